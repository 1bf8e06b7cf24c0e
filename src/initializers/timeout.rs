//! Per-request timeout initializer.
//!
//! The pipeline performs no I/O, so it cannot enforce a timeout itself.
//! Instead, [`Timeout`] records the wanted duration in the request's
//! extensions for the transport layer to honor.

use std::time::Duration;

use crate::{Initializer, Result};

/// Per-request timeout, stored in the request extensions by [`Timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeout(pub Duration);

/// Records a [`RequestTimeout`] in the request's extensions.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use bytes::Bytes;
/// use reqinit::Initializer;
/// use reqinit::initializers::{RequestTimeout, Timeout};
///
/// let timeout = Timeout::new(Duration::from_secs(5));
/// let mut request = http::Request::builder()
///     .uri("https://api.example.com")
///     .body(Bytes::new())
///     .expect("request");
/// timeout.initialize(&mut request)?;
///
/// let recorded = request.extensions().get::<RequestTimeout>();
/// assert_eq!(recorded, Some(&RequestTimeout(Duration::from_secs(5))));
/// # Ok::<(), reqinit::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Timeout {
    duration: Duration,
}

impl Timeout {
    /// Create a new timeout initializer with the given duration.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl<B> Initializer<B> for Timeout {
    fn initialize(&self, request: &mut http::Request<B>) -> Result<()> {
        request
            .extensions_mut()
            .insert(RequestTimeout(self.duration));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    #[test]
    fn records_timeout_extension() {
        let timeout = Timeout::new(Duration::from_millis(250));
        let mut request = http::Request::builder()
            .uri("https://api.example.com")
            .body(Bytes::new())
            .expect("request");

        timeout.initialize(&mut request).expect("initialize");

        assert_eq!(
            request.extensions().get::<RequestTimeout>(),
            Some(&RequestTimeout(Duration::from_millis(250))),
        );
    }

    #[test]
    fn later_timeout_wins() {
        let mut request = http::Request::builder()
            .uri("https://api.example.com")
            .body(Bytes::new())
            .expect("request");

        Timeout::new(Duration::from_secs(30))
            .initialize(&mut request)
            .expect("initialize");
        Timeout::new(Duration::from_secs(5))
            .initialize(&mut request)
            .expect("initialize");

        assert_eq!(
            request.extensions().get::<RequestTimeout>(),
            Some(&RequestTimeout(Duration::from_secs(5))),
        );
    }
}
