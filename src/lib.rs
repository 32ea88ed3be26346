//! docnav: documentation sidebar renderer
//!
//! This library provides:
//! - A typed navigation tree loaded from JSON or TOML site configuration
//! - A pure renderer turning the tree into a UI tree and HTML markup
//! - Lint checks for sidebar data quality
//! - An HTTP preview server and a terminal preview

pub mod config;
pub mod nav;
pub mod render;
pub mod transport;
pub mod tui;

pub use config::Config;
pub use nav::{NavEntry, NavTree};
pub use render::{render_sidebar, Link, PlainLink, RoutedLink};
