//! Core rendering abstractions for annotation PDF generation.
//!
//! This crate provides the fundamental traits and types used by PDF surface
//! backends:
//! - `PageSurface` trait abstracting the multi-page vector drawing primitives
//! - Error types for rendering operations
//! - Shared utility functions for coordinate conversion

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::PageSurface;
pub use types::{LineCap, LineJoin, Rgba};
