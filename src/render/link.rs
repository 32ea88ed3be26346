//! Hyperlink collaborator
//!
//! The renderers build the anchor's content and styling; whatever turns that
//! anchor into something navigable is decided here, outside the sidebar. This
//! keeps the choice between full-page loads and client-side routing with the
//! host page.

use super::node::{Element, Node};

/// Turns a styled anchor into a navigable node
pub trait Link: Send + Sync {
    /// `anchor` is an `a` element without `href`. Implementations must point it
    /// at `href` exactly as given.
    fn render(&self, href: &str, anchor: Element) -> Node;
}

/// Full-page navigation: plain `<a href>`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainLink;

impl Link for PlainLink {
    fn render(&self, href: &str, anchor: Element) -> Node {
        anchor.attr("href", href).into()
    }
}

/// Client-side navigation: the anchor is tagged for the host router to intercept
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutedLink;

/// Attribute a client-side router looks for
pub const ROUTER_ATTR: &str = "data-router-link";

impl Link for RoutedLink {
    fn render(&self, href: &str, anchor: Element) -> Node {
        anchor.attr("href", href).attr(ROUTER_ATTR, "").into()
    }
}
