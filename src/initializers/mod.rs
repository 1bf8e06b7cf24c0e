//! Built-in request initializers.
//!
//! Each initializer covers one common request-preparation concern and can be
//! chained with any custom [`Initializer`](crate::Initializer) through an
//! [`InitializerPipeline`](crate::InitializerPipeline).
//!
//! # Available initializers
//!
//! - [`BearerAuth`] - Adds `Authorization: Bearer <token>` header
//! - [`BasicAuth`] - Adds `Authorization: Basic <base64>` header
//! - [`UserAgent`] - Adds `User-Agent` header when absent
//! - [`DefaultHeaders`] - Applies a fixed set of headers
//! - [`Timeout`] - Records a per-request timeout in the request extensions
//!
//! # Example
//!
//! ```
//! use reqinit::InitializerPipeline;
//! use reqinit::initializers::{BearerAuth, UserAgent};
//!
//! let pipeline: InitializerPipeline = InitializerPipeline::builder()
//!     .with(UserAgent::new("my-app/1.0"))
//!     .with(BearerAuth::new("my-secret-token"))
//!     .build();
//! ```

mod basic_auth;
mod bearer_auth;
mod default_headers;
mod timeout;
mod user_agent;

pub use basic_auth::BasicAuth;
pub use bearer_auth::BearerAuth;
pub use default_headers::DefaultHeaders;
pub use timeout::{RequestTimeout, Timeout};
pub use user_agent::UserAgent;
