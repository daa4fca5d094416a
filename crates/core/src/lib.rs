//! Annotation rendering and composition engine.
//!
//! Maps device-space stroke geometry into PDF-space vector graphics and
//! assembles the result into an output document, either standalone or
//! stacked on top of a background PDF. The concrete drawing backend is a
//! build-time capability: with the `vector-render` feature (the default)
//! the full engine is compiled; without it [`PdfGenerator::generate`]
//! always fails with [`GenerateError::CapabilityUnavailable`].

pub mod brush;
pub mod error;
pub mod geometry;
pub mod options;
pub mod sequencer;

#[cfg(feature = "vector-render")]
mod generator;
#[cfg(not(feature = "vector-render"))]
#[path = "stub.rs"]
mod generator;

pub use error::GenerateError;
pub use generator::PdfGenerator;
pub use options::GeneratorOptions;
