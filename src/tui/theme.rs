//! Theme colors for the terminal preview

use ratatui::style::Color;

/// Theme colors for the sidebar preview
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub bg_sidebar: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub purple: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::catppuccin_mocha()
    }
}

impl Theme {
    /// Catppuccin Mocha theme (default)
    pub fn catppuccin_mocha() -> Self {
        Self {
            bg_sidebar: Color::Rgb(30, 30, 46),
            border: Color::Rgb(49, 50, 68),

            text_primary: Color::Rgb(205, 214, 244),
            text_secondary: Color::Rgb(166, 173, 200),
            text_muted: Color::Rgb(108, 112, 134),

            green: Color::Rgb(166, 227, 161),
            yellow: Color::Rgb(249, 226, 175),
            red: Color::Rgb(243, 139, 168),
            purple: Color::Rgb(203, 166, 247),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            bg_sidebar: Color::Rgb(46, 52, 64),
            border: Color::Rgb(76, 86, 106),

            text_primary: Color::Rgb(236, 239, 244),
            text_secondary: Color::Rgb(229, 233, 240),
            text_muted: Color::Rgb(143, 157, 179),

            green: Color::Rgb(163, 190, 140),
            yellow: Color::Rgb(235, 203, 139),
            red: Color::Rgb(191, 97, 106),
            purple: Color::Rgb(180, 142, 173),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "catppuccin" | "catppuccin-mocha" | "mocha" => Some(Self::catppuccin_mocha()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }

    /// Stand-in for the header gradients: first stop of each, in header order
    pub fn header_swatches(&self) -> [Color; 3] {
        [self.green, self.yellow, self.red]
    }
}
