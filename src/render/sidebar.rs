//! Recursive navigation list and the sidebar shell around it

use super::header::render_header;
use super::link::Link;
use super::node::Element;
use crate::nav::{NavEntry, NavTree};

const LIST_CLASS: &str = "text-sm font-medium";
const LINK_CLASS: &str =
    "px-3 py-2 transition-colors duration-200 relative block hover:text-gray-900 text-gray-500";
const GROUP_HEADER_CLASS: &str = "px-3 pt-4 font-bold flex items-center";
const GROUP_BODY_CLASS: &str = "pl-3 pt-2";
const ICON_CLASS: &str = "h-5 pr-2";

/// Render a tree as a nested `ul`
///
/// Each entry becomes one `li` keyed by its title, in input order. Links go
/// through `link`; groups become a bold header followed by their children,
/// rendered by recursion with no depth limit. The tree must be acyclic.
pub fn render_items(tree: &NavTree, link: &dyn Link) -> Element {
    Element::new("ul")
        .class(LIST_CLASS)
        .children(tree.iter().map(|entry| render_entry(entry, link)))
}

fn render_entry(entry: &NavEntry, link: &dyn Link) -> Element {
    match entry {
        NavEntry::Link { title, url } => {
            let anchor = Element::new("a").class(LINK_CLASS).text(title.as_str());
            Element::new("li")
                .key(title.as_str())
                .child(link.render(url, anchor))
        }
        NavEntry::Group {
            title,
            children,
            icon,
        } => {
            let mut header = Element::new("div").class(GROUP_HEADER_CLASS);
            if let Some(icon) = icon {
                header = header.child(
                    Element::new("img")
                        .attr("src", icon.as_str())
                        .attr("alt", "")
                        .class(ICON_CLASS),
                );
            }
            let header = header.text(title.as_str());

            Element::new("li")
                .key(title.as_str())
                .child(header)
                .child(
                    Element::new("div")
                        .class(GROUP_BODY_CLASS)
                        .child(render_items(children, link)),
                )
        }
    }
}

/// Full sidebar: fixed header plus the tree inside a sticky scroll container
pub fn render_sidebar(tree: &NavTree, link: &dyn Link) -> Element {
    Element::new("div").class("relative").child(
        Element::new("div").class("sticky top-16").child(
            Element::new("div")
                .class("overflow-y-auto pb-16 pt-4")
                .attr("style", "height: calc(100vh - 4rem)")
                .child(render_header(link))
                .child(render_items(tree, link)),
        ),
    )
}
