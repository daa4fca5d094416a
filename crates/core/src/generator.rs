use crate::error::GenerateError;
use crate::geometry::DEFAULT_PAGE_SIZE;
use crate::options::GeneratorOptions;
use crate::sequencer;
use inkpress_archive::{ArchiveError, NotebookArchive};
use inkpress_pdf_composer as composer;
use inkpress_render_core::PageSurface;
use inkpress_render_lopdf::LopdfSurface;
use inkpress_types::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Drives one annotation-export invocation: archive in, PDF out.
///
/// When the archive carries a background document and `annotations_only`
/// is not set, the annotation layer is rendered into an intermediate
/// document and stacked onto the background; otherwise the rendered
/// annotations are the output. All intermediate state lives within the
/// call and the destination file is only ever replaced atomically on full
/// success.
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
        let archive = NotebookArchive::open(&self.archive_path)?;
        if archive.file_type() == "epub" {
            return Err(ArchiveError::UnsupportedContainer(
                "epub; only pdf and notebooks are supported".to_string(),
            )
            .into());
        }
        if archive.document.pages.is_empty() {
            return Err(ArchiveError::EmptyDocument.into());
        }

        let background = self.validated_background(&archive)?;
        let annotations = self.render_annotations(&archive.document)?;

        let output = match background {
            Some(bytes) if !self.options.annotations_only => {
                log::debug!("overlay mode: stacking annotations onto the background");
                composer::stack_documents(bytes, &annotations)
                    .map_err(|e| GenerateError::Composition(e.to_string()))?
            }
            _ => {
                log::debug!("blank mode: standalone annotation document");
                annotations
            }
        };
        self.write_output(&output)
    }

    /// Confirms the background payload parses as a PDF, if one is present.
    /// Encryption is only observed here; the composer reads the content
    /// with default credentials and any failure there surfaces as a
    /// composition error.
    fn validated_background<'a>(
        &self,
        archive: &'a NotebookArchive,
    ) -> Result<Option<&'a [u8]>, GenerateError> {
        let Some(bytes) = archive.payload.as_deref().filter(|b| !b.is_empty()) else {
            return Ok(None);
        };
        let info = composer::inspect(bytes)
            .map_err(|e| GenerateError::MalformedDocument(e.to_string()))?;
        if info.encrypted {
            log::info!("background document is encrypted; composition will use default credentials");
        }
        log::debug!("background document has {} page(s)", info.page_count);
        Ok(Some(bytes))
    }

    fn render_annotations(&self, document: &Document) -> Result<Vec<u8>, GenerateError> {
        let mut surface = Box::new(LopdfSurface::new(DEFAULT_PAGE_SIZE));
        sequencer::render_document(
            surface.as_mut(),
            document,
            &self.options,
            DEFAULT_PAGE_SIZE,
        );
        Ok(surface.finish()?)
    }

    /// Stages the result next to the destination, then moves it into
    /// place, so a failed call never leaves a partial file behind.
    fn write_output(&self, bytes: &[u8]) -> Result<(), GenerateError> {
        let dir = self
            .output_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut staging = NamedTempFile::new_in(dir)?;
        staging.write_all(bytes)?;
        staging
            .persist(&self.output_path)
            .map_err(|e| GenerateError::Resource(e.error))?;
        log::info!("wrote {}", self.output_path.display());
        Ok(())
    }
}
