// Package managers we know how to spot in history
//
// Each one is an executable we can check for plus the install command prefix
// people actually type.

use crate::config::Environment;
use log::debug;
use std::path::PathBuf;

// Prepended to prefixes when the user isn't root. Nobody runs apt install without it.
const ELEVATION_TOKEN: &str = "sudo ";

// (id, executable, install prefix). Order matters when a line matches more than one.
const DEFAULT_MANAGERS: &[(&str, &str, &str)] = &[
    ("apt", "/usr/bin/apt", "apt install"),
    ("snap", "/usr/bin/snap", "snap install"),
    ("yum", "/usr/bin/yum", "yum install"),
];

/// A package manager and the install command that gives it away
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    pub id: String,
    pub executable: PathBuf,
    pub install_prefix: String,
}

impl PackageManager {
    pub fn new(id: &str, executable: impl Into<PathBuf>, install_prefix: &str) -> Self {
        Self {
            id: id.to_string(),
            executable: executable.into(),
            install_prefix: install_prefix.to_string(),
        }
    }

    /// The built-in registry: apt, snap, yum
    pub fn defaults() -> Vec<PackageManager> {
        DEFAULT_MANAGERS
            .iter()
            .map(|(id, exe, prefix)| PackageManager::new(id, *exe, prefix))
            .collect()
    }

    /// Same manager, but the prefix now starts with sudo
    pub fn with_elevation(&self) -> Self {
        Self {
            install_prefix: format!("{}{}", ELEVATION_TOKEN, self.install_prefix),
            ..self.clone()
        }
    }

    pub fn is_installed(&self) -> bool {
        self.executable.exists()
    }
}

/// Keep only the managers installed on this machine
///
/// Returns fresh entries and leaves `registry` alone, so calling this twice
/// never ends up with "sudo sudo apt install".
pub fn resolve_available(registry: &[PackageManager], env: &Environment) -> Vec<PackageManager> {
    let elevate = !env.is_superuser();

    registry
        .iter()
        .filter(|manager| {
            let installed = manager.is_installed();
            if !installed {
                debug!(
                    "{} not found at {}, ignoring",
                    manager.id,
                    manager.executable.display()
                );
            }
            installed
        })
        .map(|manager| {
            let resolved = if elevate {
                manager.with_elevation()
            } else {
                manager.clone()
            };
            debug!("{} available, prefix '{}'", resolved.id, resolved.install_prefix);
            resolved
        })
        .collect()
}

/// First manager whose install prefix shows up anywhere in the line
pub fn match_prefix<'a>(line: &str, managers: &'a [PackageManager]) -> Option<&'a PackageManager> {
    managers
        .iter()
        .find(|manager| line.contains(manager.install_prefix.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fake_registry(temp: &TempDir) -> Vec<PackageManager> {
        let apt = temp.path().join("apt");
        fs::write(&apt, "").unwrap();

        vec![
            PackageManager::new("apt", apt, "apt install"),
            PackageManager::new("snap", temp.path().join("snap"), "snap install"),
        ]
    }

    #[test]
    fn test_defaults_order() {
        let ids: Vec<String> = PackageManager::defaults().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["apt", "snap", "yum"]);
    }

    #[test]
    fn test_missing_managers_skipped() {
        let temp = TempDir::new().unwrap();
        let env = Environment::new(temp.path(), Some("root"));

        let available = resolve_available(&fake_registry(&temp), &env);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "apt");
        assert_eq!(available[0].install_prefix, "apt install");
    }

    #[test]
    fn test_non_root_gets_sudo() {
        let temp = TempDir::new().unwrap();
        let env = Environment::new(temp.path(), Some("dev"));

        let available = resolve_available(&fake_registry(&temp), &env);
        assert_eq!(available[0].install_prefix, "sudo apt install");
    }

    #[test]
    fn test_missing_user_gets_sudo() {
        let temp = TempDir::new().unwrap();
        let env = Environment::new(temp.path(), None);

        let available = resolve_available(&fake_registry(&temp), &env);
        assert_eq!(available[0].install_prefix, "sudo apt install");
    }

    #[test]
    fn test_resolving_twice_does_not_double_sudo() {
        let temp = TempDir::new().unwrap();
        let env = Environment::new(temp.path(), Some("dev"));
        let registry = fake_registry(&temp);

        let first = resolve_available(&registry, &env);
        let second = resolve_available(&registry, &env);

        assert_eq!(first, second);
        assert_eq!(registry[0].install_prefix, "apt install");
    }

    #[test]
    fn test_match_prefix() {
        let managers = vec![
            PackageManager::new("apt", "/usr/bin/apt", "apt install"),
            PackageManager::new("snap", "/usr/bin/snap", "snap install"),
        ];

        let hit = match_prefix("sudo snap install code", &managers).unwrap();
        assert_eq!(hit.id, "snap");
        assert!(match_prefix("apt update", &managers).is_none());
    }
}
