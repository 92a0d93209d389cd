//! Error types for adsh operations.
//!
//! This module defines [`AdshError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Resolution and lifecycle failures each get a dedicated variant so the
//!   command layer can report them unmodified
//! - Use `anyhow::Error` (via `AdshError::Other`) for unexpected errors
//! - Nothing in the library retries; every error aborts the current operation

use std::path::PathBuf;
use thiserror::Error;

use crate::site::BootstrapLevel;

/// Core error type for adsh operations.
#[derive(Debug, Error)]
pub enum AdshError {
    /// Identifier is absent from every registry (or from the named one).
    #[error("Unknown identifier in registry: {identifier}")]
    UnknownIdentifier { identifier: String },

    /// Qualified identifier names an alias no registry was added under.
    #[error("Could not find the registry: {alias}")]
    UnknownAlias { alias: String },

    /// Bare identifier matches sites in more than one registry.
    #[error("Identifier conflict for {identifier}, can be one of: {}", candidates.join(", "))]
    AmbiguousIdentifier {
        identifier: String,
        candidates: Vec<String>,
    },

    /// Two registries were added under the same alias.
    #[error("Registry with alias {alias} already exists")]
    DuplicateAlias { alias: String },

    /// Identifier or alias cannot be represented in qualified form.
    #[error("Invalid identifier '{identifier}': {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    /// Mutation attempted on a locked site.
    #[error("Cannot change site {field} of a locked instance")]
    SiteLocked { field: &'static str },

    /// Site is missing a fact required for the requested operation.
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    /// Version could not be read from the site's source files.
    #[error("Could not determine site version under {root}")]
    VersionNotFound { root: PathBuf },

    /// URL was not given and could not be discovered.
    #[error("The URL of the site at {root} cannot be determined automatically")]
    UrlNotFound { root: PathBuf },

    /// Walked up to the filesystem root without finding a site.
    #[error("No site found in the current working path: {start}")]
    NoLocalInstanceFound { start: PathBuf },

    /// External runtime failed to enter a bootstrap level.
    #[error("Bootstrap failed at level {level}: {message}")]
    BootstrapFailed {
        level: BootstrapLevel,
        message: String,
    },

    /// Failed to parse a site definition file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for adsh operations.
pub type Result<T> = std::result::Result<T, AdshError>;
