//! Core error types and collections for Adventure.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`NameMap`] - Ordered, name-keyed map used for item containers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;

pub use collections::NameMap;
pub use error::{Error, ErrorContext, ErrorKind};

/// Result type alias using the Adventure error type.
pub type Result<T> = std::result::Result<T, Error>;
