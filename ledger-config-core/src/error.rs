//! # Error Types
//!
//! Errors returned by configuration lookups.

use std::fmt;
use thiserror::Error;

/// Error types that can occur while resolving a configuration query.
///
/// Configuration providers fail for two reasons: the requested entity does
/// not exist, or the configuration backing the request is unusable. Each
/// variant carries a short message so callers can surface it verbatim.
///
/// # Examples
///
/// ```rust
/// use ledger_config_core::{ConfigError, ErrorKind};
///
/// let error = ConfigError::not_found("no peer");
/// assert_eq!(error.kind(), ErrorKind::NotFound);
/// assert_eq!(error.to_string(), "Not found: no peer");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No peer, orderer or configuration section matched the query
    #[error("Not found: {what}")]
    NotFound { what: String },

    /// The configuration exists but cannot be used to answer the query
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

/// Coarse classification of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidConfiguration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::InvalidConfiguration => write!(f, "invalid configuration"),
        }
    }
}

/// Type alias for Results returned by configuration lookups.
///
/// # Examples
///
/// ```rust
/// use ledger_config_core::{ConfigError, ConfigResult};
///
/// fn lookup_orderer(name: &str) -> ConfigResult<String> {
///     if name.is_empty() {
///         return Err(ConfigError::not_found("no orderer"));
///     }
///     Ok(format!("{}.example.com", name))
/// }
/// ```
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Creates a new not-found error with the given message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ledger_config_core::ConfigError;
    ///
    /// let error = ConfigError::not_found("no orderer");
    /// assert!(error.is_not_found());
    /// ```
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Creates a new invalid-configuration error with the given reason.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidConfiguration { .. } => ErrorKind::InvalidConfiguration,
        }
    }

    /// Whether the query failed because nothing matched it.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
