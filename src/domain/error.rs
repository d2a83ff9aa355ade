//! Error types for the Zroster plugin.
//!
//! This module defines the centralized error type [`ZrosterError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Roster operations themselves never fail: a blank add, or a delete/toggle of an
//! unknown entry, is a silent no-op by design. Errors exist only for the ambient
//! surfaces around the roster (theme files, configuration, I/O).

use thiserror::Error;

/// The main error type for Zroster plugin operations.
///
/// Consolidates the error conditions that can occur around the roster: theme
/// loading, configuration parsing, and filesystem access for trace output.
/// I/O errors convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use zroster::domain::ZrosterError;
///
/// fn validate_config() -> Result<(), ZrosterError> {
///     Err(ZrosterError::Config("seed_count must be a number".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ZrosterError {
    /// Theme parsing or application failed.
    ///
    /// Occurs when a built-in or custom theme cannot be parsed or read.
    /// The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when plugin configuration values are malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Zroster operations.
///
/// This is a type alias for `std::result::Result<T, ZrosterError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZrosterError>;
