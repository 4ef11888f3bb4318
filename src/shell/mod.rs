/// Shell integration module
///
/// Knows which shells exist, where they keep history, and how to read it.

pub mod history_format;
pub mod shell_registry;

pub use history_format::{simple_tokenizer, zsh_cleanup, Cleanup, Tokenizer};
pub use shell_registry::{Shell, ShellEntry};
