//! Sequential composition of request initializers.
//!
//! Use [`InitializerPipeline::builder`] to chain initializers, or
//! [`InitializerPipeline::new`] to build one from an existing collection.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use reqinit::InitializerPipeline;
//! use reqinit::initializers::{BearerAuth, UserAgent};
//!
//! let pipeline = InitializerPipeline::builder()
//!     .with(BearerAuth::new("my-token"))
//!     .with(UserAgent::new("reqinit/0.1"))
//!     .build();
//!
//! let mut request = http::Request::builder()
//!     .uri("https://api.example.com/users")
//!     .body(Bytes::new())
//!     .expect("request");
//! pipeline.initialize(&mut request)?;
//!
//! assert_eq!(
//!     request.headers().get("Authorization").map(|v| v.as_bytes()),
//!     Some(&b"Bearer my-token"[..]),
//! );
//! # Ok::<(), reqinit::Error>(())
//! ```

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use tracing::trace;

use crate::{Initializer, Result};

/// An ordered, immutable-after-construction chain of [`Initializer`]s.
///
/// Calling [`initialize`](Self::initialize) runs every initializer in
/// construction order against the same request, stopping at the first error.
/// The pipeline holds no per-call state: one instance can prepare any number
/// of requests, concurrently if the caller serializes access to each request.
///
/// `InitializerPipeline` implements [`Initializer`] itself, so a pipeline can
/// be nested as a stage inside another pipeline.
pub struct InitializerPipeline<B = Bytes> {
    initializers: Vec<Arc<dyn Initializer<B>>>,
}

impl<B> InitializerPipeline<B> {
    /// Creates a pipeline from an ordered collection of initializers.
    ///
    /// The initializers are collected into the pipeline's own storage, so
    /// later mutation of the source collection cannot change the pipeline.
    pub fn new(initializers: impl IntoIterator<Item = Arc<dyn Initializer<B>>>) -> Self {
        Self {
            initializers: initializers.into_iter().collect(),
        }
    }

    /// Creates a new [`PipelineBuilder`].
    #[must_use]
    pub fn builder() -> PipelineBuilder<B> {
        PipelineBuilder::new()
    }

    /// Runs every initializer against the request, in construction order.
    ///
    /// Each initializer observes the mutations made by the ones before it.
    /// An empty pipeline succeeds without touching the request.
    ///
    /// # Errors
    ///
    /// Returns the first initializer failure, unmodified. Initializers after
    /// the failing one do not run; mutations already applied stay on the
    /// request (no rollback).
    pub fn initialize(&self, request: &mut http::Request<B>) -> Result<()> {
        let total = self.initializers.len();
        for (index, initializer) in self.initializers.iter().enumerate() {
            trace!(index, total, "running request initializer");
            initializer.initialize(request)?;
        }
        Ok(())
    }

    /// The initializer at the given position, ordering consistent with
    /// construction.
    ///
    /// Returns `None` when `index` is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<dyn Initializer<B>>> {
        self.initializers.get(index)
    }

    /// Number of initializers in the pipeline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.initializers.len()
    }

    /// Returns `true` if the pipeline contains no initializers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.initializers.is_empty()
    }

    /// Iterates over the initializers in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Initializer<B>>> {
        self.initializers.iter()
    }
}

// Manual impls to avoid a `B: Clone`/`B: Debug` bound from the derives.
impl<B> Clone for InitializerPipeline<B> {
    fn clone(&self) -> Self {
        Self {
            initializers: self.initializers.clone(),
        }
    }
}

impl<B> fmt::Debug for InitializerPipeline<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitializerPipeline")
            .field("len", &self.initializers.len())
            .finish()
    }
}

impl<B> Default for InitializerPipeline<B> {
    fn default() -> Self {
        Self {
            initializers: Vec::new(),
        }
    }
}

impl<B> FromIterator<Arc<dyn Initializer<B>>> for InitializerPipeline<B> {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Initializer<B>>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<B> Initializer<B> for InitializerPipeline<B> {
    fn initialize(&self, request: &mut http::Request<B>) -> Result<()> {
        Self::initialize(self, request)
    }
}

/// Builder for constructing [`InitializerPipeline`] instances.
///
/// # Example
///
/// ```
/// use reqinit::InitializerPipeline;
/// use reqinit::initializers::BearerAuth;
///
/// let pipeline: InitializerPipeline = InitializerPipeline::builder()
///     .with(BearerAuth::new("token"))
///     .build();
/// assert_eq!(pipeline.len(), 1);
/// ```
pub struct PipelineBuilder<B = Bytes> {
    initializers: Vec<Arc<dyn Initializer<B>>>,
}

impl<B> PipelineBuilder<B> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            initializers: Vec::new(),
        }
    }

    /// Appends an initializer to the end of the chain.
    #[must_use]
    pub fn with(self, initializer: impl Initializer<B> + 'static) -> Self {
        self.with_arc(Arc::new(initializer))
    }

    /// Appends an already-shared initializer to the end of the chain.
    #[must_use]
    pub fn with_arc(mut self, initializer: Arc<dyn Initializer<B>>) -> Self {
        self.initializers.push(initializer);
        self
    }

    /// Builds the [`InitializerPipeline`].
    #[must_use]
    pub fn build(self) -> InitializerPipeline<B> {
        InitializerPipeline {
            initializers: self.initializers,
        }
    }
}

impl<B> Default for PipelineBuilder<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> fmt::Debug for PipelineBuilder<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineBuilder")
            .field("len", &self.initializers.len())
            .finish()
    }
}
