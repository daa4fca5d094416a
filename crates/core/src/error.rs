use inkpress_archive::ArchiveError;
use inkpress_render_core::RenderError;
use thiserror::Error;

/// Everything that can end a `generate` call. All variants are terminal
/// for the call; nothing is retried internally and no partial output file
/// is left at the destination.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The input archive is unreadable, of an unsupported kind, or yields
    /// a document without pages.
    #[error("input error: {0}")]
    Input(#[from] ArchiveError),

    /// The background bytes do not parse as a PDF document.
    #[error("malformed background document: {0}")]
    MalformedDocument(String),

    /// Stacking the annotation layer onto the background failed.
    #[error("composition failed: {0}")]
    Composition(String),

    #[error(transparent)]
    Render(#[from] RenderError),

    /// Temporary storage allocation or the final write failed.
    #[error("output error: {0}")]
    Resource(#[from] std::io::Error),

    /// This build was compiled without the vector-drawing backend.
    #[error(
        "annotation export is unavailable in this build; \
         rebuild with the `vector-render` feature enabled"
    )]
    CapabilityUnavailable,
}
