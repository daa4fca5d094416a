use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed stroke data: {0}")]
    MalformedLines(String),

    #[error("unsupported container kind: {0}")]
    UnsupportedContainer(String),

    #[error("archive is missing entry: {0}")]
    MissingEntry(String),

    #[error("the document has no pages")]
    EmptyDocument,

    #[error("thumbnail generation failed: {0}")]
    Thumbnail(String),
}
