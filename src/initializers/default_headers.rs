//! Default-header initializer.

use http::HeaderMap;

use crate::{Initializer, Result};

/// Applies a fixed set of headers to the request.
///
/// By default a header the request already carries is kept; call
/// [`overwrite`](Self::overwrite) to replace it instead.
///
/// # Example
///
/// ```
/// use http::HeaderMap;
/// use http::header::{ACCEPT, HeaderValue};
/// use reqinit::InitializerPipeline;
/// use reqinit::initializers::DefaultHeaders;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
///
/// let pipeline: InitializerPipeline = InitializerPipeline::builder()
///     .with(DefaultHeaders::new(headers))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct DefaultHeaders {
    headers: HeaderMap,
    overwrite: bool,
}

impl DefaultHeaders {
    /// Create a new initializer applying the given headers.
    #[must_use]
    pub fn new(headers: HeaderMap) -> Self {
        Self {
            headers,
            overwrite: false,
        }
    }

    /// Replace headers the request already carries instead of keeping them.
    #[must_use]
    pub fn overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }
}

impl<B> Initializer<B> for DefaultHeaders {
    fn initialize(&self, request: &mut http::Request<B>) -> Result<()> {
        for name in self.headers.keys() {
            if self.overwrite || !request.headers().contains_key(name) {
                request.headers_mut().remove(name);
                for value in self.headers.get_all(name) {
                    request.headers_mut().append(name.clone(), value.clone());
                }
            }
        }
        Ok(())
    }
}
