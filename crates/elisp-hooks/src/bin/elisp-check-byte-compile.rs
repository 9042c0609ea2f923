// Rust guideline compliant 2026-10-15

//! CLI entry point for the elisp-check-byte-compile hook.

fn main() {
    std::process::exit(elisp_hooks::entry::main(elisp_hooks::Hook::CheckByteCompile));
}
