//! User-Agent initializer.

use std::sync::Arc;

use http::HeaderValue;
use http::header::USER_AGENT;

use crate::{Initializer, Result};

/// Sets the `User-Agent` header, unless the request already carries one.
///
/// A `User-Agent` set earlier on the request (by the caller or by a previous
/// initializer) wins.
#[derive(Debug, Clone)]
pub struct UserAgent {
    value: Arc<str>,
}

impl UserAgent {
    /// Create a new user-agent initializer with the given product string.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Arc::from(value.into()),
        }
    }
}

impl<B> Initializer<B> for UserAgent {
    fn initialize(&self, request: &mut http::Request<B>) -> Result<()> {
        if !request.headers().contains_key(USER_AGENT) {
            let value = HeaderValue::try_from(&*self.value)?;
            request.headers_mut().insert(USER_AGENT, value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    fn request() -> http::Request<Bytes> {
        http::Request::builder()
            .uri("https://api.example.com")
            .body(Bytes::new())
            .expect("request")
    }

    #[test]
    fn adds_user_agent() {
        let ua = UserAgent::new("my-app/1.0");
        let mut request = request();

        ua.initialize(&mut request).expect("initialize");

        assert_eq!(
            request.headers().get(USER_AGENT).map(HeaderValue::as_bytes),
            Some(&b"my-app/1.0"[..]),
        );
    }

    #[test]
    fn keeps_existing_user_agent() {
        let ua = UserAgent::new("my-app/1.0");
        let mut request = request();
        request
            .headers_mut()
            .insert(USER_AGENT, HeaderValue::from_static("custom/2.0"));

        ua.initialize(&mut request).expect("initialize");

        assert_eq!(
            request.headers().get(USER_AGENT).map(HeaderValue::as_bytes),
            Some(&b"custom/2.0"[..]),
        );
    }
}
