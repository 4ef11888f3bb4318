/// Error types for pkg-recall
///
/// Only a few things can actually go wrong here. Missing executables, missing
/// history files and weird history lines are all expected and never become errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pkg-recall operations
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A history file exists but could not be read
    #[error("Failed to read history file {path}: {source}")]
    HistoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HOME is unset, so history paths can't be built
    #[error("HOME environment variable is not set")]
    MissingHome,
}

/// Result type alias for pkg-recall operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Convert ExtractError to a user-friendly error message
impl ExtractError {
    pub fn user_message(&self) -> String {
        match self {
            ExtractError::HistoryRead { path, source } => {
                format!(
                    "Could not read shell history at {}. Check permissions. Details: {}",
                    path.display(),
                    source
                )
            }
            ExtractError::MissingHome => {
                "Could not locate your home directory. Set $HOME and try again.".to_string()
            }
        }
    }
}
