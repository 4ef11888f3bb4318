/// Process environment, resolved once at startup
///
/// Everything that used to be read from the environment at random points is
/// captured here and handed to whoever needs it.

use crate::error::{ExtractError, Result};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

const SUPERUSER: &str = "root";

/// The bits of the environment the extractor cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    home: PathBuf,
    user: Option<String>,
}

impl Environment {
    /// Build an environment from explicit values (handy for tests)
    pub fn new<P: Into<PathBuf>>(home: P, user: Option<&str>) -> Self {
        Self {
            home: home.into(),
            user: user.map(str::to_string),
        }
    }

    /// Read HOME and USER from the running process
    ///
    /// # Returns
    /// * `Ok(Environment)` - HOME was set (even to "")
    /// * `Err(ExtractError::MissingHome)` - HOME is unset
    pub fn from_process() -> Result<Self> {
        Self::from_vars(env::var_os("HOME"), env::var("USER").ok())
    }

    // An empty HOME is allowed; history paths just end up relative
    fn from_vars(home: Option<OsString>, user: Option<String>) -> Result<Self> {
        let home = home.map(PathBuf::from).ok_or(ExtractError::MissingHome)?;

        // No USER just means we assume a regular user
        Ok(Self { home, user })
    }

    /// True only when USER is literally root
    pub fn is_superuser(&self) -> bool {
        self.user.as_deref() == Some(SUPERUSER)
    }

    /// Path of a history file inside the home directory
    pub fn history_path(&self, file_name: &str) -> PathBuf {
        self.home.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superuser_detection() {
        assert!(Environment::new("/root", Some("root")).is_superuser());
        assert!(!Environment::new("/home/dev", Some("dev")).is_superuser());
        assert!(!Environment::new("/home/dev", None).is_superuser());
    }

    #[test]
    fn test_history_path() {
        let env = Environment::new("/home/dev", Some("dev"));
        assert_eq!(
            env.history_path(".bash_history"),
            PathBuf::from("/home/dev/.bash_history")
        );
    }

    #[test]
    fn test_unset_home_is_fatal() {
        let result = Environment::from_vars(None, Some("dev".to_string()));
        assert!(matches!(result, Err(ExtractError::MissingHome)));
    }

    #[test]
    fn test_empty_home_gives_relative_paths() {
        let env = Environment::from_vars(Some(OsString::new()), None).unwrap();
        assert_eq!(env.history_path(".bash_history"), PathBuf::from(".bash_history"));
        assert!(!env.is_superuser());
    }

    #[test]
    fn test_user_from_vars() {
        let env = Environment::from_vars(Some("/root".into()), Some("root".to_string())).unwrap();
        assert!(env.is_superuser());
    }
}
