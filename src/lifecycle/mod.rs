//! Runtime wiring and observability.
//!
//! # Main Components
//!
//! - [`CourseCatalog`] - Builds the sample student and courses and runs the subscriptions
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod catalog;
pub mod tracing;

pub use catalog::*;
pub use self::tracing::*;
