/// Shell registry
///
/// Which shells we know about, where their binaries and history files live,
/// and how their history lines should be read.

use crate::config::Environment;
use crate::shell::history_format::{simple_tokenizer, zsh_cleanup, Cleanup, Tokenizer};
use std::fmt;
use std::path::PathBuf;

/// Supported shells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
}

impl Shell {
    /// Get the shell name as a string
    pub fn name(&self) -> &str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
        }
    }

    /// History file name, relative to the home directory
    pub fn history_filename(&self) -> &str {
        match self {
            Shell::Bash => ".bash_history",
            Shell::Zsh => ".zsh_history",
        }
    }

    /// Where we expect the shell binary to live
    pub fn executable_path(&self) -> PathBuf {
        match self {
            Shell::Bash => PathBuf::from("/bin/bash"),
            Shell::Zsh => PathBuf::from("/bin/zsh"),
        }
    }

    pub fn tokenizer(&self) -> Tokenizer {
        simple_tokenizer
    }

    pub fn cleanup(&self) -> Option<Cleanup> {
        match self {
            Shell::Bash => None,
            Shell::Zsh => Some(zsh_cleanup),
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Everything the processor needs to scan one shell's history
#[derive(Clone)]
pub struct ShellEntry {
    pub shell: Shell,
    pub executable: PathBuf,
    pub history_file: PathBuf,
    pub tokenizer: Tokenizer,
    pub cleanup: Option<Cleanup>,
}

impl ShellEntry {
    /// Entry for a shell using its standard locations
    pub fn for_shell(shell: Shell, env: &Environment) -> Self {
        Self {
            shell,
            executable: shell.executable_path(),
            history_file: env.history_path(shell.history_filename()),
            tokenizer: shell.tokenizer(),
            cleanup: shell.cleanup(),
        }
    }

    /// Bash first, then zsh
    pub fn defaults(env: &Environment) -> Vec<ShellEntry> {
        [Shell::Bash, Shell::Zsh]
            .into_iter()
            .map(|shell| ShellEntry::for_shell(shell, env))
            .collect()
    }

    /// Point the entry at a different binary (tests use fake ones)
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    pub fn is_available(&self) -> bool {
        self.executable.exists()
    }
}
