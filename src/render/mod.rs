//! Sidebar rendering
//!
//! Everything here is a pure function from a [`NavTree`](crate::nav::NavTree)
//! to a UI tree: no I/O, no state, no logging. Rendering the same tree twice
//! yields equal trees.

mod header;
mod html;
mod link;
mod node;
mod sidebar;

pub use header::{render_header, HeaderEntry, IconPath, HEADER_ENTRIES};
pub use html::{element_to_html, page, to_html};
pub use link::{Link, PlainLink, RoutedLink, ROUTER_ATTR};
pub use node::{Element, Node};
pub use sidebar::{render_items, render_sidebar};

use crate::nav::NavTree;

/// Render the full sidebar straight to HTML
pub fn sidebar_html(tree: &NavTree, link: &dyn Link) -> String {
    to_html(&Node::from(render_sidebar(tree, link)))
}
