//! PDF page surface implementation using lopdf.
//!
//! This crate provides the concrete [`PageSurface`] backend: drawing
//! operations are buffered per page as content-stream operators and the
//! whole document is assembled and serialized on `finish`.
//!
//! [`PageSurface`]: inkpress_render_core::PageSurface

mod surface;
mod writer;

pub use surface::LopdfSurface;
pub use writer::DocumentWriter;
