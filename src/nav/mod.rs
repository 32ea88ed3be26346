//! Navigation tree model, loading and lint

mod error;
mod lint;
mod load;
mod model;

pub use error::NavError;
pub use lint::{lint, Finding, FindingKind};
pub use load::{load_file, parse_str, NavFormat};
pub use model::{NavEntry, NavTree};
