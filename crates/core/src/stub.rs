use crate::error::GenerateError;
use crate::options::GeneratorOptions;
use std::path::PathBuf;

/// Placeholder generator compiled when the `vector-render` capability is
/// absent. Every call fails fast; no partial rendering is attempted.
#[allow(dead_code)]
pub struct PdfGenerator {
    archive_path: PathBuf,
    output_path: PathBuf,
    options: GeneratorOptions,
}

impl PdfGenerator {
    pub fn new(
        archive_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        options: GeneratorOptions,
    ) -> Self {
        Self {
            archive_path: archive_path.into(),
            output_path: output_path.into(),
            options,
        }
    }

    pub fn generate(&self) -> Result<(), GenerateError> {
        Err(GenerateError::CapabilityUnavailable)
    }
}
