//! Core types for waitstat: shared error handling and model traits.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;

pub use error::{Error, Result};
