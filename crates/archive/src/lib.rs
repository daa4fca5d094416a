//! Notebook container handling.
//!
//! A notebook archive is a ZIP file holding a `.content` JSON descriptor,
//! one binary `.lines` stroke file per annotated page, and optionally the
//! source PDF the notes were taken on. This crate reads such archives into
//! the stroke data model, parses the `.lines` format, and provides the
//! upload-side helpers: building an archive from a bare document, metadata
//! generation, and first-page thumbnail rendering via an external tool.

mod content;
mod error;
mod lines;
mod reader;
pub mod thumbnail;
mod writer;

pub use content::{Content, ExtraMetadata, Metadata, Transform};
pub use error::ArchiveError;
pub use lines::parse_lines;
pub use reader::NotebookArchive;
pub use writer::{create_metadata_file, create_notebook_archive, unix_timestamp_millis};
