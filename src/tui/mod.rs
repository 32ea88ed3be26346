//! Terminal preview of the documentation sidebar
//!
//! Renders the same header and tree as the HTML output, using ratatui.

pub mod theme;
pub mod widgets;

pub use theme::Theme;
pub use widgets::{NavHeader, NavSidebar};
