// Rust guideline compliant 2026-10-15

//! Configuration management for the Elisp hooks.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional per-repository configuration file.
pub const CONFIG_FILE: &str = ".pre-commit-elisp.toml";

/// Environment variable naming the helper library file.
pub const LIBRARY_ENV: &str = "PRE_COMMIT_ELISP_LIB";

/// Environment variable naming the interpreter program.
pub const EMACS_ENV: &str = "PRE_COMMIT_ELISP_EMACS";

/// Environment variable holding extra load-path directories.
pub const LOAD_PATH_ENV: &str = "PRE_COMMIT_ELISP_LOAD_PATH";

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "PRE_COMMIT_ELISP_LOG";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for hook invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Interpreter program, looked up on PATH unless it is a path.
    #[serde(default = "default_emacs")]
    pub emacs: String,

    /// Explicit helper library location.
    #[serde(default)]
    pub library: Option<PathBuf>,

    /// Directories passed to the interpreter with `-L`.
    #[serde(default)]
    pub load_path: Vec<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_emacs() -> String {
    "emacs".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emacs: default_emacs(),
            library: None,
            load_path: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from a directory and the process environment.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.pre-commit-elisp.toml` in `dir`
    /// 3. Environment variables with `PRE_COMMIT_ELISP_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let mut config = if path.exists() {
            Self::parse_file(&path)?
        } else {
            Self::default()
        };

        config.apply_overrides_from(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from an explicit file, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or invalid.
    pub fn load_file(path: &Path) -> Result<Self> {
        let mut config = Self::parse_file(path)?;
        config.apply_overrides_from(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Applies environment overrides using the given lookup function.
    ///
    /// Supported variables:
    /// - `PRE_COMMIT_ELISP_LIB` - Helper library path
    /// - `PRE_COMMIT_ELISP_EMACS` - Interpreter program
    /// - `PRE_COMMIT_ELISP_LOAD_PATH` - Extra load-path directories, platform path-list syntax
    /// - `PRE_COMMIT_ELISP_LOG` - Log level
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be applied.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(val) = get(LIBRARY_ENV) {
            self.library = Some(PathBuf::from(val));
        }

        if let Some(val) = get(EMACS_ENV) {
            self.emacs = val;
        }

        if let Some(val) = get(LOAD_PATH_ENV) {
            self.load_path = std::env::split_paths(&val)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
        }

        if let Some(val) = get(LOG_ENV) {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `emacs` is empty
    /// - `log_level` is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.emacs.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "emacs must name an interpreter program".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.emacs, "emacs");
        assert!(config.library.is_none());
        assert!(config.load_path.is_empty());
        assert_eq!(config.log_level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_file_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        let content = r#"
emacs = "/opt/emacs/bin/emacs"
library = "/srv/lisp/pre-commit-elisp.el"
load_path = ["lisp", "vendor"]
log_level = "debug"
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::parse_file(&path).unwrap();
        assert_eq!(config.emacs, "/opt/emacs/bin/emacs");
        assert_eq!(
            config.library,
            Some(PathBuf::from("/srv/lisp/pre-commit-elisp.el"))
        );
        assert_eq!(
            config.load_path,
            vec![PathBuf::from("lisp"), PathBuf::from("vendor")]
        );
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_parse_file_partial_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "load_path = [\"lisp\"]\n").unwrap();

        let config = Config::parse_file(&path).unwrap();
        assert_eq!(config.emacs, "emacs");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_parse_file_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "emacs = [").unwrap();

        let err = Config::parse_file(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_load_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_file(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = Config {
            emacs: "emacs-29".to_string(),
            ..Config::default()
        };
        config
            .apply_overrides_from(env(&[
                (EMACS_ENV, "emacs-30"),
                (LIBRARY_ENV, "/tmp/lib.el"),
                (LOG_ENV, "INFO"),
            ]))
            .unwrap();

        assert_eq!(config.emacs, "emacs-30");
        assert_eq!(config.library, Some(PathBuf::from("/tmp/lib.el")));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_env_load_path_split() {
        let joined = std::env::join_paths(["a", "b"]).unwrap();
        let mut config = Config::default();
        config
            .apply_overrides_from(env(&[(LOAD_PATH_ENV, joined.to_str().unwrap())]))
            .unwrap();
        assert_eq!(
            config.load_path,
            vec![PathBuf::from("a"), PathBuf::from("b")]
        );
    }

    #[test]
    fn test_empty_env_values_ignored() {
        let mut config = Config::default();
        config
            .apply_overrides_from(env(&[(EMACS_ENV, ""), (LIBRARY_ENV, "")]))
            .unwrap();
        assert_eq!(config.emacs, "emacs");
        assert!(config.library.is_none());
    }

    #[test]
    fn test_validation_empty_emacs() {
        let config = Config {
            emacs: "  ".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validation_unknown_log_level() {
        let config = Config {
            log_level: "chatty".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("chatty"));
    }
}
