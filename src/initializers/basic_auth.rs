//! Basic authentication initializer.
//!
//! Adds an `Authorization: Basic <base64(user:pass)>` header to the request.

use std::sync::Arc;

use base64::Engine;
use http::HeaderValue;
use http::header::AUTHORIZATION;

use crate::{Initializer, Result};

/// Sets `Authorization: Basic <base64(username:password)>` on the request.
///
/// Credentials are encoded once at construction. Any `Authorization` header
/// already on the request is replaced, and the value is marked sensitive.
///
/// # Example
///
/// ```
/// use reqinit::InitializerPipeline;
/// use reqinit::initializers::BasicAuth;
///
/// let pipeline: InitializerPipeline = InitializerPipeline::builder()
///     .with(BasicAuth::new("username", "password"))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct BasicAuth {
    /// Base64-encoded "username:password".
    encoded_credentials: Arc<str>,
}

impl BasicAuth {
    /// Create a new basic auth initializer with the given username and password.
    pub fn new(username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        let credentials = format!("{}:{}", username.as_ref(), password.as_ref());
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
        Self {
            encoded_credentials: Arc::from(encoded),
        }
    }
}

impl<B> Initializer<B> for BasicAuth {
    fn initialize(&self, request: &mut http::Request<B>) -> Result<()> {
        let mut value = HeaderValue::try_from(format!("Basic {}", self.encoded_credentials))?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}
