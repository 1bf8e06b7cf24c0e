//! Composable request initialization for HTTP clients.
//!
//! An [`InitializerPipeline`] chains multiple [`Initializer`]s so they run in
//! a fixed sequence against an outgoing [`http::Request`] before it is sent.
//! Each initializer mutates the request in place (headers, credentials,
//! per-request metadata); later initializers observe the mutations made by
//! earlier ones. The first failure stops the chain and is relayed to the
//! caller unmodified.
//!
//! The pipeline is immutable after construction and holds no per-call state,
//! so one instance can prepare any number of requests. It implements
//! [`Initializer`] itself, so pipelines nest inside pipelines.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use reqinit::{InitializerPipeline, Result, init_fn};
//! use reqinit::initializers::{BearerAuth, UserAgent};
//!
//! let pipeline = InitializerPipeline::builder()
//!     .with(UserAgent::new("my-app/1.0"))
//!     .with(BearerAuth::new("my-secret-token"))
//!     .with(init_fn(|request: &mut http::Request<Bytes>| -> Result<()> {
//!         request
//!             .headers_mut()
//!             .insert(http::header::ACCEPT, "application/json".parse()?);
//!         Ok(())
//!     }))
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
//!     Some(&b"Bearer my-secret-token"[..]),
//! );
//! # Ok::<(), reqinit::Error>(())
//! ```

mod error;
mod initializer;
pub mod initializers;
mod pipeline;
pub mod prelude;

pub use error::{Error, Result};
pub use initializer::{InitFn, Initializer, init_fn};
pub use pipeline::{InitializerPipeline, PipelineBuilder};

// Re-export http crate types used at the API surface
pub use http::{HeaderMap, HeaderName, HeaderValue, header};
