/// pkg-recall library
///
/// Digs through shell history and pulls out every package you ever installed.

pub mod config;
pub mod core;
pub mod error;
pub mod shell;

// Re-exports for convenience
pub use crate::config::Environment;
pub use crate::core::{ExtractionReport, Extractor, PackageSet};
pub use crate::error::{ExtractError, Result};
