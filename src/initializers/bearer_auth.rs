//! Bearer token authentication initializer.
//!
//! Adds an `Authorization: Bearer <token>` header to the request.

use std::sync::Arc;

use http::HeaderValue;
use http::header::AUTHORIZATION;

use crate::{Initializer, Result};

/// Sets `Authorization: Bearer <token>` on the request.
///
/// Any `Authorization` header already on the request is replaced. The header
/// value is marked sensitive so header-dumping layers redact it.
///
/// # Example
///
/// ```
/// use reqinit::InitializerPipeline;
/// use reqinit::initializers::BearerAuth;
///
/// let pipeline: InitializerPipeline = InitializerPipeline::builder()
///     .with(BearerAuth::new("my-secret-token"))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct BearerAuth {
    token: Arc<str>,
}

impl BearerAuth {
    /// Create a new bearer auth initializer with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::from(token.into()),
        }
    }
}

impl<B> Initializer<B> for BearerAuth {
    fn initialize(&self, request: &mut http::Request<B>) -> Result<()> {
        let mut value = HeaderValue::try_from(format!("Bearer {}", self.token))?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    #[test]
    fn adds_authorization_header() {
        let auth = BearerAuth::new("my-secret-token");
        let mut request = http::Request::builder()
            .uri("https://api.example.com")
            .body(Bytes::new())
            .expect("request");

        auth.initialize(&mut request).expect("initialize");

        let value = request
            .headers()
            .get(AUTHORIZATION)
            .expect("authorization header");
        assert_eq!(value.as_bytes(), b"Bearer my-secret-token");
        assert!(value.is_sensitive());
    }

    #[test]
    fn invalid_token_is_an_error() {
        let auth = BearerAuth::new("bad\ntoken");
        let mut request = http::Request::builder()
            .uri("https://api.example.com")
            .body(Bytes::new())
            .expect("request");

        let err = auth.initialize(&mut request).expect_err("control char");
        assert!(matches!(err, crate::Error::InvalidHeaderValue(_)));
    }
}
