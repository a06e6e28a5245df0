//! Mock image-processing results
//!
//! Holds the canned success and error records a caller of the image
//! pipeline can expect, and writes them out as single-line JSON.

pub mod backend;
pub mod emitter;
pub mod error;
pub mod fixtures;
pub mod models;

pub use error::{Error, Result};
