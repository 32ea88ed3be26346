//! HTML serialization of the UI tree

use super::node::{Element, Node};

/// Elements written as `<tag ... />` with no children
const VOID_TAGS: &[&str] = &["img", "path", "br", "hr", "meta", "link", "input"];

/// Serialize a node to compact HTML
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

pub fn element_to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

/// Wrap a body fragment in a minimal HTML5 document
pub fn page(title: &str, body: &str) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\" /><title>");
    escape_into(title, &mut out);
    out.push_str("</title></head><body>");
    out.push_str(body);
    out.push_str("</body></html>\n");
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => escape_into(text, out),
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, out);
        out.push('"');
    }

    if VOID_TAGS.contains(&element.tag) && element.children.is_empty() {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
