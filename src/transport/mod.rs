//! Transport layer for CLI, HTTP preview, and terminal preview

pub mod cli;
pub mod http;
pub mod preview;
