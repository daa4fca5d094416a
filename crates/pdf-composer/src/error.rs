use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposerError {
    /// The input bytes could not be parsed as a PDF document.
    #[error("malformed PDF document: {0}")]
    Malformed(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("{0}")]
    Other(String),
}
