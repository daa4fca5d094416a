//! Export handwritten notebook annotations to PDF.
//!
//! The engine reads a notebook archive (stroke data captured from a
//! digitizer, plus an optional background PDF), renders the strokes as
//! vector graphics, and writes a single output PDF, either standalone or
//! with the annotation layer stacked on top of the background document.
//!
//! ```no_run
//! use inkpress::{GeneratorOptions, PdfGenerator};
//!
//! let options = GeneratorOptions {
//!     add_page_numbers: true,
//!     ..GeneratorOptions::default()
//! };
//! PdfGenerator::new("notes.zip", "notes.pdf", options).generate()?;
//! # Ok::<(), inkpress::GenerateError>(())
//! ```

pub use inkpress_archive::{
    ArchiveError, NotebookArchive, create_metadata_file, create_notebook_archive,
};
pub use inkpress_core::{GenerateError, GeneratorOptions, PdfGenerator};
pub use inkpress_types as types;
