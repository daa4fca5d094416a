pub mod fixtures;
pub mod pdf_assertions;

use inkpress::{GenerateError, GeneratorOptions, PdfGenerator};
use lopdf::Document as LopdfDocument;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let bytes = fs::read(path)?;
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

/// One generator invocation against an in-memory archive, with the
/// staging directory kept alive so the output can be inspected.
pub struct GeneratorRun {
    pub dir: TempDir,
    pub output: PathBuf,
    pub result: Result<(), GenerateError>,
}

pub fn run_generator(archive: &[u8], options: GeneratorOptions) -> GeneratorRun {
    let dir = TempDir::new().expect("temp dir");
    let archive_path = dir.path().join("notebook.zip");
    fs::write(&archive_path, archive).expect("write archive fixture");
    let output = dir.path().join("out.pdf");
    let result = PdfGenerator::new(&archive_path, &output, options).generate();
    GeneratorRun {
        dir,
        output,
        result,
    }
}

/// Generate a PDF from an archive and load the result for inspection.
pub fn generate(
    archive: &[u8],
    options: GeneratorOptions,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let run = run_generator(archive, options);
    run.result?;
    GeneratedPdf::load(&run.output)
}
