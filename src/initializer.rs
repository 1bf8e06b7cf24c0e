//! The request-initializer capability.
//!
//! An [`Initializer`] inspects or mutates an outgoing [`http::Request`] before
//! it is sent, and may fail. [`InitializerPipeline`](crate::InitializerPipeline)
//! composes initializers sequentially and is itself an [`Initializer`], so
//! pipelines nest.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;

use crate::Result;

/// A hook that prepares an outgoing request before it is sent.
///
/// Implementations typically add headers, inject credentials, or record
/// per-request metadata in the request's extensions. The request is borrowed
/// mutably for the duration of the call and never retained.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use reqinit::{Initializer, Result};
///
/// struct TraceHeader;
///
/// impl<B> Initializer<B> for TraceHeader {
///     fn initialize(&self, request: &mut http::Request<B>) -> Result<()> {
///         request
///             .headers_mut()
///             .insert("X-Trace-Id", http::HeaderValue::from_static("abc123"));
///         Ok(())
///     }
/// }
///
/// let mut request = http::Request::builder()
///     .uri("https://api.example.com")
///     .body(Bytes::new())
///     .expect("request");
/// TraceHeader.initialize(&mut request)?;
/// assert!(request.headers().contains_key("X-Trace-Id"));
/// # Ok::<(), reqinit::Error>(())
/// ```
pub trait Initializer<B = Bytes>: Send + Sync {
    /// Prepare the request, mutating it in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be prepared, commonly an
    /// I/O-style failure from fetching credentials or building header values.
    fn initialize(&self, request: &mut http::Request<B>) -> Result<()>;
}

impl<B, T> Initializer<B> for &T
where
    T: Initializer<B> + ?Sized,
{
    fn initialize(&self, request: &mut http::Request<B>) -> Result<()> {
        (**self).initialize(request)
    }
}

impl<B, T> Initializer<B> for Box<T>
where
    T: Initializer<B> + ?Sized,
{
    fn initialize(&self, request: &mut http::Request<B>) -> Result<()> {
        (**self).initialize(request)
    }
}

impl<B, T> Initializer<B> for Arc<T>
where
    T: Initializer<B> + ?Sized,
{
    fn initialize(&self, request: &mut http::Request<B>) -> Result<()> {
        (**self).initialize(request)
    }
}

/// Turn a closure into an [`Initializer`].
///
/// The same idiom as `tower::service_fn`: a named wrapper rather than a
/// blanket `Fn` impl, which would conflict with the forwarding impls.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use reqinit::{Result, init_fn};
///
/// let add_accept = init_fn(|request: &mut http::Request<Bytes>| -> Result<()> {
///     request
///         .headers_mut()
///         .insert(http::header::ACCEPT, "application/json".parse()?);
///     Ok(())
/// });
/// ```
pub fn init_fn<F>(f: F) -> InitFn<F> {
    InitFn { f }
}

/// An [`Initializer`] backed by a closure, created by [`init_fn`].
#[derive(Clone, Copy)]
pub struct InitFn<F> {
    f: F,
}

impl<F> fmt::Debug for InitFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitFn").finish_non_exhaustive()
    }
}

impl<B, F> Initializer<B> for InitFn<F>
where
    F: Fn(&mut http::Request<B>) -> Result<()> + Send + Sync,
{
    fn initialize(&self, request: &mut http::Request<B>) -> Result<()> {
        (self.f)(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> http::Request<Bytes> {
        http::Request::builder()
            .uri("https://api.example.com")
            .body(Bytes::new())
            .expect("request")
    }

    #[test]
    fn init_fn_runs_closure() {
        let marker = init_fn(|request: &mut http::Request<Bytes>| {
            request
                .headers_mut()
                .insert("X-Marker", http::HeaderValue::from_static("1"));
            Ok(())
        });

        let mut request = request();
        marker.initialize(&mut request).expect("initialize");
        assert!(request.headers().contains_key("X-Marker"));
    }

    #[test]
    fn forwarding_impls() {
        let marker = init_fn(|request: &mut http::Request<Bytes>| {
            request
                .headers_mut()
                .insert("X-Marker", http::HeaderValue::from_static("1"));
            Ok(())
        });

        let boxed: Box<dyn Initializer> = Box::new(marker);
        let mut request = request();
        boxed.initialize(&mut request).expect("boxed");
        assert!(request.headers().contains_key("X-Marker"));

        let shared: Arc<dyn Initializer> = Arc::from(boxed);
        let mut request = self::request();
        shared.initialize(&mut request).expect("shared");
        assert!(request.headers().contains_key("X-Marker"));
    }
}
