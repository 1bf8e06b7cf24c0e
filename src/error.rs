//! Error types for reqinit.

use derive_more::{Display, Error, From};

/// Main error type for request-initialization operations.
///
/// The pipeline never wraps or transforms errors: the caller of
/// [`InitializerPipeline::initialize`](crate::InitializerPipeline::initialize)
/// sees exactly the error the failing initializer raised.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// I/O error raised while preparing the request.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    /// A header value could not be constructed.
    #[display("invalid header value: {_0}")]
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// A header name could not be constructed.
    #[display("invalid header name: {_0}")]
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// An initializer could not complete.
    #[display("initialization failed: {_0}")]
    #[from(skip)]
    Initialization(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an initialization error from a message.
    #[must_use]
    pub fn initialization(message: impl Into<String>) -> Self {
        Self::Initialization(message.into())
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns `true` if this is an initialization error.
    #[must_use]
    pub const fn is_initialization(&self) -> bool {
        matches!(self, Self::Initialization(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::initialization("missing credentials");
        assert_eq!(err.to_string(), "initialization failed: missing credentials");

        let err = Error::from(std::io::Error::other("disk on fire"));
        assert_eq!(err.to_string(), "I/O error: disk on fire");
    }

    #[test]
    fn error_predicates() {
        let err = Error::initialization("nope");
        assert!(err.is_initialization());
        assert!(!err.is_io());

        let err = Error::from(std::io::Error::other("oops"));
        assert!(err.is_io());
        assert!(!err.is_initialization());
    }

    #[test]
    fn error_from_invalid_header_value() {
        let invalid = http::HeaderValue::try_from("bad\nvalue").expect_err("control char");
        let err = Error::from(invalid);
        assert!(matches!(err, Error::InvalidHeaderValue(_)));
    }
}
