// Rust guideline compliant 2026-10-15

//! Command-line arguments shared by every hook.

use elisp_hooks_core::{Config, Result};
use std::path::{Path, PathBuf};

/// Options that override configuration.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SettingsArgs {
    /// Helper library path (overrides PRE_COMMIT_ELISP_LIB)
    #[arg(long, value_name = "PATH")]
    pub lib: Option<PathBuf>,

    /// Emacs executable (overrides PRE_COMMIT_ELISP_EMACS)
    #[arg(long, value_name = "PROGRAM")]
    pub emacs: Option<String>,

    /// Directory to add to the Emacs load path (repeatable)
    #[arg(short = 'L', long = "load-path", value_name = "DIR")]
    pub load_path: Vec<PathBuf>,

    /// Configuration file (default: .pre-commit-elisp.toml in the working directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments accepted by each hook binary and CLI subcommand.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct HookArgs {
    /// Emacs Lisp files to process
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

impl SettingsArgs {
    /// Loads configuration and applies command-line overrides.
    ///
    /// Reads `--config` when given, otherwise `.pre-commit-elisp.toml` in `dir`
    /// if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is invalid or the result
    /// fails validation.
    pub fn load_config(&self, dir: &Path) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_file(path)?,
            None => Config::load(dir)?,
        };
        self.apply_to(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides to `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(lib) = &self.lib {
            config.library = Some(lib.clone());
        }
        if let Some(emacs) = &self.emacs {
            config.emacs = emacs.clone();
        }
        if !self.load_path.is_empty() {
            config.load_path = self.load_path.clone();
        }
        if self.verbose {
            config.log_level = "debug".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config() {
        let args = SettingsArgs {
            lib: Some(PathBuf::from("/x/lib.el")),
            emacs: Some("emacs-30".to_string()),
            load_path: vec![PathBuf::from("lisp")],
            verbose: true,
            ..SettingsArgs::default()
        };
        let mut config = Config {
            load_path: vec![PathBuf::from("old")],
            ..Config::default()
        };
        args.apply_to(&mut config);

        assert_eq!(config.library, Some(PathBuf::from("/x/lib.el")));
        assert_eq!(config.emacs, "emacs-30");
        assert_eq!(config.load_path, vec![PathBuf::from("lisp")]);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_no_flags_keep_config() {
        let mut config = Config {
            emacs: "emacs-29".to_string(),
            load_path: vec![PathBuf::from("lisp")],
            ..Config::default()
        };
        SettingsArgs::default().apply_to(&mut config);
        assert_eq!(config.emacs, "emacs-29");
        assert_eq!(config.load_path, vec![PathBuf::from("lisp")]);
    }

    #[test]
    fn test_explicit_config_file_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let args = SettingsArgs {
            config: Some(temp_dir.path().join("missing.toml")),
            ..SettingsArgs::default()
        };
        let err = args.load_config(temp_dir.path()).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_config_file_in_dir_is_read() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(elisp_hooks_core::CONFIG_FILE),
            "load_path = [\"lisp\"]\n",
        )
        .unwrap();
        let config = SettingsArgs::default()
            .load_config(temp_dir.path())
            .unwrap();
        assert_eq!(config.load_path, vec![PathBuf::from("lisp")]);
    }

    #[test]
    fn test_empty_emacs_flag_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let args = SettingsArgs {
            emacs: Some(String::new()),
            ..SettingsArgs::default()
        };
        assert!(args.load_config(temp_dir.path()).is_err());
    }
}
