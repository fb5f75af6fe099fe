//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default config location: `~/.autolaunch/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".autolaunch").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".autolaunch/config.toml"))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration, falling back to an empty one when the file is missing.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    ///
    /// Comment lines are left untouched.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        let mut result = String::with_capacity(content.len());
        for line in content.split_inclusive('\n') {
            if line.trim_start().starts_with('#') {
                result.push_str(line);
                continue;
            }

            let mut expanded = line.to_string();
            for cap in re.captures_iter(line) {
                let var_name = &cap[1];
                let var_value = std::env::var(var_name)
                    .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
                expanded = expanded.replace(&cap[0], &var_value);
            }
            result.push_str(&expanded);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/Library`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert!(config.items.is_empty());
        assert!(config.home_dir.is_none());
    }

    #[test]
    fn test_load_items() {
        let content = r#"
            home_dir = "/Users/tester"

            [[items]]
            name = "com.example.app"
            program = "/Applications/Example.app/Contents/MacOS/example"
            args = ["--autostart=1", "--quiet"]
            start_interval = 60
            stdout_path = "/tmp/example.out"

            [[items]]
            name = "hello-world"
            program = "/usr/local/bin/hello-world"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.home_dir.as_deref(), Some("/Users/tester"));
        assert_eq!(config.items.len(), 2);

        let app = config.item("com.example.app").unwrap();
        assert_eq!(app.args, vec!["--autostart=1", "--quiet"]);
        assert_eq!(app.start_interval, Some(60));
        assert_eq!(app.stdout_path.as_deref(), Some("/tmp/example.out"));
        assert!(app.stderr_path.is_none());

        let hello = config.item("hello-world").unwrap();
        assert!(hello.args.is_empty());
        assert!(hello.start_interval.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[items]]").unwrap();
        writeln!(file, "name = \"app\"").unwrap();
        writeln!(file, "program = \"/bin/app\"").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.items[0].name, "app");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = ConfigLoader::load_or_default(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("items = [unclosed");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_start_interval_rejects_negative() {
        let content = r#"
            [[items]]
            name = "app"
            program = "/bin/app"
            start_interval = -5
        "#;
        assert!(ConfigLoader::load_str(content).is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("AUTOLAUNCH_TEST_PROGRAM_DIR", "/opt/tools");
        }
        let content = r#"
            [[items]]
            name = "tool"
            program = "${AUTOLAUNCH_TEST_PROGRAM_DIR}/tool"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.items[0].program, "/opt/tools/tool");
        unsafe {
            std::env::remove_var("AUTOLAUNCH_TEST_PROGRAM_DIR");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "home_dir = \"${AUTOLAUNCH_NONEXISTENT_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_skips_comments() {
        let content = "# reference values as ${AUTOLAUNCH_NONEXISTENT_VAR_12345}\nhome_dir = \"/Users/tester\"\n";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }

    #[test]
    fn test_load_shipped_example() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/example.toml");
        let config = ConfigLoader::load(&path).unwrap();

        assert_eq!(config.items.len(), 2);
        let hello = config.item("hello-world").unwrap();
        assert_eq!(hello.args, vec!["--autostart=1"]);
        let sync = config.item("com.example.sync").unwrap();
        assert_eq!(sync.start_interval, Some(900));
        assert!(crate::ConfigValidator::validate(&config).is_valid());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/test");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/test"));
    }

    #[test]
    fn test_default_path() {
        let path = ConfigLoader::default_path();
        assert!(path.ends_with(".autolaunch/config.toml"));
    }
}
