// Rust guideline compliant 2026-10-15

//! pre-commit-elisp CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
