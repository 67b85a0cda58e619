// SPDX-License-Identifier: MPL-2.0
//! Crate-level error types.
//!
//! Per-preview load failures live next to the content viewer port
//! ([`crate::application::port::content`]); this module holds the errors
//! that surface at application level.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("HTTP client Error: {0}")]
    Http(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Rejection of a submitted URL. The previous target stays active.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// Nothing but whitespace was submitted.
    #[error("no URL entered")]
    Empty,

    /// The normalized input does not parse as an absolute URL with a host.
    #[error("'{input}' is not a valid URL: {reason}")]
    Malformed { input: String, reason: String },
}

impl UrlError {
    /// Returns the i18n message key shown next to the URL field.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UrlError::Empty => "url-error-empty",
            UrlError::Malformed { .. } => "url-error-malformed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_message() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("gone")));
    }

    #[test]
    fn url_errors_describe_the_input() {
        let err = UrlError::Malformed {
            input: "x y".into(),
            reason: "invalid domain".into(),
        };
        assert_eq!(err.to_string(), "'x y' is not a valid URL: invalid domain");
    }

    #[test]
    fn url_error_keys_are_distinct() {
        let malformed = UrlError::Malformed {
            input: "x y".into(),
            reason: "invalid domain".into(),
        };
        assert_ne!(UrlError::Empty.i18n_key(), malformed.i18n_key());
    }
}
