//! Error types for werdegang
//!
//! Uses `thiserror` for library errors; the binary wraps these in
//! `anyhow` at command boundaries.

use std::path::PathBuf;

use thiserror::Error;

use crate::checks::ContentReport;

/// Result type alias for werdegang operations
pub type ContentResult<T> = Result<T, ContentError>;

/// Main error type for werdegang operations
#[derive(Error, Debug)]
pub enum ContentError {
    /// Content document missing from a content directory
    #[error("content document not found: {path}")]
    DocumentNotFound { path: PathBuf },

    /// Content directory missing entirely
    #[error("content directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Invalid TOML in a content or config document
    #[error("invalid TOML in {file}: {message}")]
    InvalidToml { file: PathBuf, message: String },

    /// Content failed the load-time consistency checks
    #[error("content validation failed with {} error(s) - run `werdegang check` for details", report.errors())]
    Invalid { report: ContentReport },

    /// Unknown project slug requested
    #[error("no project with id '{id}'")]
    UnknownProject { id: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
