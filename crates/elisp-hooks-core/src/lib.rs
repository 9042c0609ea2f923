// Rust guideline compliant 2026-10-15

//! Elisp Hooks Core Library
//!
//! This crate provides the shared pieces behind the Emacs Lisp pre-commit hooks:
//! - Hook kinds and the Lisp snippet each evaluates
//! - Helper library resolution
//! - Batch interpreter command construction
//! - Synchronous process execution with exit code mapping
//! - Configuration loading
//! - Error types and result handling

pub mod command;
pub mod config;
pub mod error;
pub mod hook;
pub mod library;
pub mod runner;

pub use command::ElispCommand;
pub use config::{Config, CONFIG_FILE, EMACS_ENV, LIBRARY_ENV, LOAD_PATH_ENV, LOG_ENV};
pub use error::{Error, Result};
pub use hook::Hook;
pub use library::{LibraryLocator, BUNDLED_LIBRARY, LIBRARY_FILE};
pub use runner::{DuctRunner, ProcessRunner};
