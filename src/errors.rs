//! KiCad S-expression error handling.
//!
//! A single `miette`-aware error enum covers every failure mode: reading text,
//! binding terms to records, and the file entry points. Decode errors always
//! carry the diagnostic path from the root record down to the failing field.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Unified error type for reading, decoding and file handling.
#[derive(Debug, Error, Diagnostic)]
pub enum SexprError {
    #[error("Syntax error: {message}")]
    #[diagnostic(code(kicadfiles::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("Token mismatch at {path}: expected '{expected}', got '{found}'")]
    #[diagnostic(
        code(kicadfiles::decode::token_mismatch),
        help("the head symbol of the expression names a different record type")
    )]
    TokenMismatch {
        path: String,
        expected: String,
        found: String,
    },

    #[error("{path}: Missing required {kind} '{field}' at index {index}")]
    #[diagnostic(code(kicadfiles::decode::missing_field))]
    MissingField {
        path: String,
        field: String,
        kind: &'static str,
        index: usize,
    },

    #[error("{path}: Required token '{token}' not found")]
    #[diagnostic(code(kicadfiles::decode::missing_token))]
    MissingToken { path: String, token: String },

    #[error("{path}: Cannot convert '{value}' to {kind} for '{field}'")]
    #[diagnostic(code(kicadfiles::decode::conversion))]
    Conversion {
        path: String,
        field: String,
        kind: &'static str,
        value: String,
    },

    #[error("{path}: Unused parameters {items}")]
    #[diagnostic(
        code(kicadfiles::decode::unused),
        help("decode with a failsafe or silent strictness to ignore unknown elements")
    )]
    UnusedInput { path: String, items: String },

    #[error("Unsupported file '{}'. Expected: {expected}", .path.display())]
    #[diagnostic(code(kicadfiles::file::unsupported))]
    UnsupportedFile { path: PathBuf, expected: String },

    #[error("I/O error on '{}'", .path.display())]
    #[diagnostic(code(kicadfiles::file::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SexprError {
    /// True for the structural identity failure raised when a term's head is
    /// not the expected token.
    pub fn is_token_mismatch(&self) -> bool {
        matches!(self, SexprError::TokenMismatch { .. })
    }

    /// The diagnostic path of a decode error, if it has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            SexprError::TokenMismatch { path, .. }
            | SexprError::MissingField { path, .. }
            | SexprError::MissingToken { path, .. }
            | SexprError::Conversion { path, .. }
            | SexprError::UnusedInput { path, .. } => Some(path),
            _ => None,
        }
    }

    pub(crate) fn syntax(
        message: impl Into<String>,
        name: &str,
        source: &str,
        start: usize,
        end: usize,
    ) -> Self {
        SexprError::Syntax {
            message: message.into(),
            src: NamedSource::new(name, source.to_string()),
            span: SourceSpan::from(start..end.max(start)),
        }
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Prints an error with full miette diagnostics to stderr.
pub fn print_error(error: SexprError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_mismatch_message() {
        let err = SexprError::TokenMismatch {
            path: "Size".into(),
            expected: "size".into(),
            found: "wrong_token".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Token mismatch"));
        assert!(msg.contains("expected 'size'"));
        assert!(msg.contains("got 'wrong_token'"));
        assert!(err.is_token_mismatch());
        assert_eq!(err.path(), Some("Size"));
    }

    #[test]
    fn test_unsupported_file_has_no_path() {
        let err = SexprError::UnsupportedFile {
            path: PathBuf::from("board.txt"),
            expected: ".kicad_pcb".into(),
        };
        assert!(err.to_string().contains("Expected: .kicad_pcb"));
        assert_eq!(err.path(), None);
    }
}
