//! Fixed entry points rendered above the navigation tree

use super::link::Link;
use super::node::Element;

/// One SVG path of a header icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPath {
    pub d: &'static str,
    /// Path uses the `evenodd` fill and clip rules
    pub evenodd: bool,
}

/// A top-level entry point with its icon and gradient swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderEntry {
    pub title: &'static str,
    pub href: &'static str,
    /// Tailwind gradient stops for the round swatch behind the icon
    pub gradient: &'static str,
    pub icon: &'static [IconPath],
}

/// Always these three, in this order
pub const HEADER_ENTRIES: [HeaderEntry; 3] = [
    HeaderEntry {
        title: "Documentation",
        href: "/",
        gradient: "from-green-400 to-blue-500",
        icon: &[IconPath {
            d: "M4 4a2 2 0 012-2h4.586A2 2 0 0112 2.586L15.414 6A2 2 0 0116 7.414V16a2 2 0 01-2 2H6a2 2 0 01-2-2V4zm2 6a1 1 0 011-1h6a1 1 0 110 2H7a1 1 0 01-1-1zm1 3a1 1 0 100 2h6a1 1 0 100-2H7z",
            evenodd: true,
        }],
    },
    HeaderEntry {
        title: "Reference API",
        href: "/reference",
        gradient: "from-yellow-500 to-yellow-600",
        icon: &[
            IconPath {
                d: "M7 9a2 2 0 012-2h6a2 2 0 012 2v6a2 2 0 01-2 2H9a2 2 0 01-2-2V9z",
                evenodd: false,
            },
            IconPath {
                d: "M5 3a2 2 0 00-2 2v6a2 2 0 002 2V5h8a2 2 0 00-2-2H5z",
                evenodd: false,
            },
        ],
    },
    HeaderEntry {
        title: "Screencasts",
        href: "/screencasts",
        gradient: "from-yellow-500 via-pink-400 to-pink-800",
        icon: &[IconPath {
            d: "M2 6a2 2 0 012-2h6a2 2 0 012 2v8a2 2 0 01-2 2H4a2 2 0 01-2-2V6zM14.553 7.106A1 1 0 0014 8v4a1 1 0 00.553.894l2 1A1 1 0 0018 13V7a1 1 0 00-1.447-.894l-2 1z",
            evenodd: false,
        }],
    },
];

const LIST_CLASS: &str = "pt-4 pl-1";
const SWATCH_CLASS: &str = "w-7 h-7 rounded-full flex items-center justify-center bg-gradient-to-br";
const TITLE_CLASS: &str = "font-semibold pl-2 group-hover:opacity-75 transition-opacity";

/// Render the header list. Takes no data: the entries are fixed.
pub fn render_header(link: &dyn Link) -> Element {
    Element::new("ul")
        .class(LIST_CLASS)
        .children(HEADER_ENTRIES.iter().map(|entry| render_entry(entry, link)))
}

fn render_entry(entry: &HeaderEntry, link: &dyn Link) -> Element {
    let anchor = Element::new("a")
        .class("flex items-center group")
        .child(
            Element::new("div")
                .class(format!("{} {}", SWATCH_CLASS, entry.gradient))
                .child(render_icon(entry.icon)),
        )
        .child(Element::new("div").class(TITLE_CLASS).text(entry.title));

    Element::new("li")
        .key(entry.title)
        .class("mb-3")
        .child(link.render(entry.href, anchor))
}

fn render_icon(paths: &[IconPath]) -> Element {
    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .class("h-4 w-4 text-white")
        .attr("viewBox", "0 0 20 20")
        .attr("fill", "currentColor")
        .children(paths.iter().map(|path| {
            let el = Element::new("path");
            if path.evenodd {
                el.attr("fill-rule", "evenodd")
                    .attr("d", path.d)
                    .attr("clip-rule", "evenodd")
            } else {
                el.attr("d", path.d)
            }
        }))
}
