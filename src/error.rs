//! Centralized error handling for folio
//!
//! This module provides a unified error type that covers all error scenarios
//! in the crate: document packing, file saving, clipboard access, and host
//! parameter parsing.
//!
//! Two conditions are deliberately NOT errors: an absent goal collection
//! (the goals section is simply omitted) and a blocked create-document action
//! while required inputs are unfilled (a user-recoverable state surfaced as a
//! message, not a fault).

use log::warn;
use std::fmt;
use std::io;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Custom Result Type Alias
// ─────────────────────────────────────────────────────────────────────────────

/// A specialized `Result` type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The centralized error type for the crate.
#[derive(Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────
    // Export Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// DOCX packing failed (document blocks could not be encoded)
    Pack { message: String },

    /// Failed to write the exported file
    FileWrite { path: PathBuf, source: io::Error },

    /// Failed to access or write the system clipboard
    Clipboard(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Host Parameter Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Failed to parse the host parameter object (invalid JSON/format)
    ParamsParse {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Generic Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Generic I/O error wrapper
    Io(io::Error),
}

// Implement From traits for convenient error conversion
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParamsParse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Error::Clipboard(err.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display trait implementation for user-friendly error messages
// ─────────────────────────────────────────────────────────────────────────────
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Export Errors
            Error::Pack { message } => {
                write!(f, "Failed to pack document: {}", message)
            }
            Error::FileWrite { path, source } => {
                write!(f, "Failed to write '{}': {}", path.display(), source)
            }
            Error::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),

            // Host Parameter Errors
            Error::ParamsParse { message, .. } => {
                write!(f, "Invalid parameter format: {}", message)
            }

            // Generic Errors
            Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// std::error::Error trait implementation for error chaining
// ─────────────────────────────────────────────────────────────────────────────
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::FileWrite { source, .. } => Some(source),
            Error::ParamsParse { source, .. } => source
                .as_ref()
                .map(|s| s.as_ref() as &(dyn std::error::Error + 'static)),
            Error::Pack { .. } | Error::Clipboard(_) => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Graceful Degradation Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for Result to support graceful degradation.
///
/// Export and clipboard actions are best-effort: a failure is logged and the
/// page is left in its pre-action state rather than propagated upward.
pub trait ResultExt<T> {
    /// If the result is an error, log it at warning level and return the provided default.
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                warn!("{}: {}. Using default.", context, err);
                default
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
