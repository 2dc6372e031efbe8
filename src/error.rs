//! Global error handling for docs-packager
//!
//! Every failure in either utility is fatal, so a single error type covers
//! configuration, pattern, path and filesystem problems.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for docs-packager operations
#[derive(Error, Debug)]
pub enum PackagerError {
    /// Wrong or missing command-line arguments
    #[error("{0}")]
    Usage(String),

    /// The configuration descriptor is not valid JSON or has mistyped fields
    #[error("Failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Required configuration fields are absent
    #[error("Missing required fields: {}", .0.join(", "))]
    ConfigValidation(Vec<String>),

    /// Exclude pattern could not be compiled
    #[error("Invalid exclude pattern: {0}")]
    Pattern(String),

    /// Path not found
    #[error("{0}")]
    PathNotFound(String),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON processing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unexpected error
    #[error("{0}")]
    Unexpected(String),
}

/// Specialized Result type for docs-packager operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Creates a PackagerError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::PackagerError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for adding context to errors
pub trait ResultExt<T, E> {
    /// Add additional context to an error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E: std::error::Error + 'static> ResultExt<T, E> for std::result::Result<T, E> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| {
            let context = f();
            PackagerError::Unexpected(format!("{}: {}", context, e))
        })
    }
}

// Lets tests built around io::Result use `?` on library calls
impl From<PackagerError> for io::Error {
    fn from(err: PackagerError) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}
