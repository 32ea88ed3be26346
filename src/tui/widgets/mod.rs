//! Terminal widgets for the sidebar preview

mod header;
mod nav_sidebar;

pub use header::{NavHeader, HEADER_HEIGHT};
pub use nav_sidebar::{outline, NavSidebar, OutlineRow};
