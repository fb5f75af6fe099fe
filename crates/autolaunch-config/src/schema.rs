//! Configuration schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::loader::ConfigLoader;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Home directory that holds `Library/LaunchAgents`. Defaults to the
    /// current user's home.
    #[serde(default)]
    pub home_dir: Option<String>,

    /// Configured launch items.
    #[serde(default)]
    pub items: Vec<LaunchItem>,
}

impl Config {
    /// Find an item by name.
    pub fn item(&self, name: &str) -> Option<&LaunchItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Home directory with `~` expanded, if configured.
    pub fn resolved_home_dir(&self) -> Option<PathBuf> {
        self.home_dir.as_deref().map(expand)
    }
}

/// One auto-launch item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchItem {
    /// Label and descriptor file name.
    pub name: String,

    /// Program to launch.
    pub program: String,

    /// Arguments appended after the program.
    #[serde(default)]
    pub args: Vec<String>,

    /// Relaunch interval in seconds.
    #[serde(default)]
    pub start_interval: Option<u32>,

    /// Standard output redirect.
    #[serde(default)]
    pub stdout_path: Option<String>,

    /// Standard error redirect.
    #[serde(default)]
    pub stderr_path: Option<String>,
}

impl LaunchItem {
    pub fn program_path(&self) -> PathBuf {
        expand(&self.program)
    }

    pub fn stdout_path(&self) -> Option<PathBuf> {
        self.stdout_path.as_deref().map(expand)
    }

    pub fn stderr_path(&self) -> Option<PathBuf> {
        self.stderr_path.as_deref().map(expand)
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(ConfigLoader::expand_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> LaunchItem {
        LaunchItem {
            name: name.to_string(),
            program: "/usr/local/bin/app".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.items.is_empty());
        assert!(config.resolved_home_dir().is_none());
    }

    #[test]
    fn test_item_lookup() {
        let config = Config {
            home_dir: None,
            items: vec![item("first"), item("second")],
        };
        assert_eq!(config.item("second").map(|i| i.name.as_str()), Some("second"));
        assert!(config.item("third").is_none());
    }

    #[test]
    fn test_paths_are_tilde_expanded() {
        let mut it = item("app");
        it.program = "~/bin/app".to_string();
        it.stdout_path = Some("~/logs/app.out".to_string());

        assert!(!it.program_path().to_string_lossy().starts_with('~'));
        assert!(it.program_path().ends_with("bin/app"));
        assert!(it.stdout_path().unwrap().ends_with("logs/app.out"));
        assert!(it.stderr_path().is_none());
    }

    #[test]
    fn test_absolute_paths_unchanged() {
        let it = item("app");
        assert_eq!(it.program_path(), PathBuf::from("/usr/local/bin/app"));
    }
}
