//! Sidebar Widget - Header plus the navigation tree as an indented outline
//!
//! Mirrors the HTML sidebar: groups are bold, non-selectable rows with their
//! children indented below; links show their target in muted text.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::header::{NavHeader, HEADER_HEIGHT};
use crate::nav::{NavEntry, NavTree};
use crate::tui::theme::Theme;

/// Spaces per nesting level
const INDENT: usize = 2;

/// One flattened row of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineRow {
    Link {
        depth: usize,
        title: String,
        url: String,
    },
    Group {
        depth: usize,
        title: String,
        has_icon: bool,
    },
}

/// Flatten a tree depth-first, group header before its children
pub fn outline(tree: &NavTree) -> Vec<OutlineRow> {
    let mut rows = Vec::with_capacity(tree.count());
    push_rows(tree, 0, &mut rows);
    rows
}

fn push_rows(tree: &NavTree, depth: usize, rows: &mut Vec<OutlineRow>) {
    for entry in tree {
        match entry {
            NavEntry::Link { title, url } => rows.push(OutlineRow::Link {
                depth,
                title: title.clone(),
                url: url.clone(),
            }),
            NavEntry::Group {
                title,
                children,
                icon,
            } => {
                rows.push(OutlineRow::Group {
                    depth,
                    title: title.clone(),
                    has_icon: icon.is_some(),
                });
                push_rows(children, depth + 1, rows);
            }
        }
    }
}

/// Cut `text` to at most `max` display columns, marking the cut with `…`
fn fit(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Sidebar widget
pub struct NavSidebar<'a> {
    tree: &'a NavTree,
    theme: &'a Theme,
    scroll: u16,
}

impl<'a> NavSidebar<'a> {
    pub fn new(tree: &'a NavTree, theme: &'a Theme) -> Self {
        Self {
            tree,
            theme,
            scroll: 0,
        }
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    fn row_line(&self, row: &OutlineRow, width: usize) -> Line<'static> {
        match row {
            OutlineRow::Group {
                depth,
                title,
                has_icon,
            } => {
                let indent = " ".repeat(depth * INDENT);
                let marker = if *has_icon { "◆ " } else { "" };
                let room = width.saturating_sub(indent.len() + marker.width());
                Line::from(vec![
                    Span::raw(indent),
                    Span::styled(marker, Style::default().fg(self.theme.purple)),
                    Span::styled(
                        fit(title, room),
                        Style::default()
                            .fg(self.theme.text_primary)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            }
            OutlineRow::Link { depth, title, url } => {
                let indent = " ".repeat(depth * INDENT);
                let room = width.saturating_sub(indent.len());
                let title = fit(title, room);
                let rest = room.saturating_sub(title.width() + 2);
                let mut spans = vec![
                    Span::raw(indent),
                    Span::styled(title, Style::default().fg(self.theme.text_secondary)),
                ];
                if rest > 0 {
                    spans.push(Span::styled(
                        format!("  {}", fit(url, rest)),
                        Style::default().fg(self.theme.text_muted),
                    ));
                }
                Line::from(spans)
            }
        }
    }
}

impl Widget for NavSidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.bg_sidebar))
            .title("Docs");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT + 1), // fixed entries + gap
                Constraint::Min(0),                    // tree
            ])
            .split(inner);

        NavHeader::new(self.theme).render(chunks[0], buf);

        let width = chunks[1].width as usize;
        let lines: Vec<Line> = outline(self.tree)
            .iter()
            .map(|row| self.row_line(row, width))
            .collect();
        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .render(chunks[1], buf);
    }
}
