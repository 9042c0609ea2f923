// Rust guideline compliant 2026-10-15

//! Hook kinds and the Lisp snippet each one evaluates.

use std::fmt;

/// Loads the helper library named by `PRE_COMMIT_ELISP_LIB`, or signals an error.
const BOOTSTRAP: &str = r#"(let ((lib (getenv "PRE_COMMIT_ELISP_LIB")))
  (if (and lib (file-exists-p lib))
      (load-file lib)
    (error "PRE_COMMIT_ELISP_LIB is not set or points to a non-existent file.")))"#;

/// The operation a hook performs on its files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Byte-compile in place, leaving `.elc` files beside the sources.
    ByteCompile,
    /// Byte-compile into temporary files that are removed afterwards.
    CheckByteCompile,
    /// Check that parentheses balance.
    CheckParens,
    /// Re-indent files in place.
    Indent,
}

impl Hook {
    /// Every hook, in manifest order.
    pub const ALL: [Hook; 4] = [
        Hook::ByteCompile,
        Hook::CheckByteCompile,
        Hook::CheckParens,
        Hook::Indent,
    ];

    /// Hook id, also the name of its binary.
    pub fn name(self) -> &'static str {
        match self {
            Hook::ByteCompile => "elisp-byte-compile",
            Hook::CheckByteCompile => "elisp-check-byte-compile",
            Hook::CheckParens => "elisp-check-parens",
            Hook::Indent => "elisp-indent",
        }
    }

    /// One-line description for help output.
    pub fn description(self) -> &'static str {
        match self {
            Hook::ByteCompile => "Byte-compile Emacs Lisp files, leaving .elc files",
            Hook::CheckByteCompile => {
                "Check that Emacs Lisp files byte-compile, leaving no .elc files"
            }
            Hook::CheckParens => "Check parentheses in Emacs Lisp files",
            Hook::Indent => "Indent Emacs Lisp files in place",
        }
    }

    /// Prefix the helper library puts in front of its messages.
    pub fn label(self) -> &'static str {
        match self {
            Hook::ByteCompile => "[ELISP BYTE-COMPILE] ",
            Hook::CheckByteCompile => "[ELISP CHECK-BYTE-COMPILE] ",
            Hook::CheckParens => "[ELISP CHECK-PARENS] ",
            Hook::Indent => "[ELISP INDENT] ",
        }
    }

    /// Returns the form passed to `--eval`.
    ///
    /// The form loads the helper library first and then calls the helper for
    /// this hook, which processes `command-line-args-left` and exits.
    pub fn snippet(self) -> String {
        let call = match self {
            Hook::ByteCompile => format!("(pre-commit-elisp-byte-compile {:?} nil)", self.label()),
            Hook::CheckByteCompile => {
                format!("(pre-commit-elisp-byte-compile {:?} t)", self.label())
            }
            Hook::CheckParens => format!("(pre-commit-elisp-check-parens {:?})", self.label()),
            Hook::Indent => format!("(pre-commit-elisp-indent {:?})", self.label()),
        };
        format!("(with-temp-buffer\n{BOOTSTRAP}\n{call})")
    }

    /// Whether a successful run leaves compiled files on disk.
    pub fn leaves_artifacts(self) -> bool {
        matches!(self, Hook::ByteCompile)
    }

    /// Whether the hook rewrites its input files.
    pub fn rewrites_files(self) -> bool {
        matches!(self, Hook::Indent)
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippets_bootstrap_library() {
        for hook in Hook::ALL {
            let snippet = hook.snippet();
            assert!(snippet.contains("(getenv \"PRE_COMMIT_ELISP_LIB\")"));
            assert!(snippet.contains("(load-file lib)"));
        }
    }

    #[test]
    fn test_byte_compile_variants_differ_only_in_temporary_flag() {
        assert!(Hook::ByteCompile
            .snippet()
            .contains("(pre-commit-elisp-byte-compile \"[ELISP BYTE-COMPILE] \" nil)"));
        assert!(Hook::CheckByteCompile
            .snippet()
            .contains("(pre-commit-elisp-byte-compile \"[ELISP CHECK-BYTE-COMPILE] \" t)"));
    }

    #[test]
    fn test_snippet_parens_balance() {
        for hook in Hook::ALL {
            let snippet = hook.snippet();
            let mut depth = 0i32;
            let mut in_string = false;
            for c in snippet.chars() {
                match c {
                    '"' => in_string = !in_string,
                    '(' if !in_string => depth += 1,
                    ')' if !in_string => depth -= 1,
                    _ => {}
                }
                assert!(depth >= 0, "{hook}: closes more than it opens");
            }
            assert_eq!(depth, 0, "{hook}: unbalanced snippet");
        }
    }

    #[test]
    fn test_artifact_flags() {
        assert!(Hook::ByteCompile.leaves_artifacts());
        assert!(!Hook::CheckByteCompile.leaves_artifacts());
        assert!(Hook::Indent.rewrites_files());
        assert!(!Hook::CheckParens.rewrites_files());
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Hook::CheckParens.to_string(), "elisp-check-parens");
    }
}
