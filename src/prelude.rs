//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```
//! use reqinit::prelude::*;
//! ```

pub use crate::initializers::{
    BasicAuth, BearerAuth, DefaultHeaders, RequestTimeout, Timeout, UserAgent,
};
pub use crate::{Error, InitFn, Initializer, InitializerPipeline, PipelineBuilder, Result, init_fn};
