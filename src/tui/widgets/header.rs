//! Header Widget
//!
//! The three fixed entry points, one per line, each behind a colored swatch

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::render::HEADER_ENTRIES;
use crate::tui::theme::Theme;

/// Rows the header occupies
pub const HEADER_HEIGHT: u16 = HEADER_ENTRIES.len() as u16;

pub struct NavHeader<'a> {
    theme: &'a Theme,
}

impl<'a> NavHeader<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        HEADER_ENTRIES
            .iter()
            .zip(self.theme.header_swatches())
            .map(|(entry, swatch)| {
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(swatch)),
                    Span::styled(
                        entry.title,
                        Style::default()
                            .fg(self.theme.text_primary)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", entry.href),
                        Style::default().fg(self.theme.text_muted),
                    ),
                ])
            })
            .collect()
    }
}

impl Widget for NavHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }
        Paragraph::new(self.lines()).render(area, buf);
    }
}
