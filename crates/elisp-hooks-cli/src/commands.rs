// Rust guideline compliant 2026-10-15

//! Command implementations for the pre-commit-elisp CLI.

pub mod doctor;
pub mod hooks;
