//! First-page thumbnail rendering.
//!
//! Rasterizing a PDF page is delegated to the external `pdftoppm` tool
//! (poppler-utils); this module only hands it finished PDF bytes, captures
//! its stderr for diagnostics, and post-processes the PNG it produces.

use crate::error::ArchiveError;
use image::imageops::FilterType;
use std::io::Cursor;
use std::process::Command;

/// Maximum dimension `pdftoppm` renders at before downscaling.
const RENDER_SCALE: &str = "800";
const THUMBNAIL_WIDTH: u32 = 280;
const THUMBNAIL_HEIGHT: u32 = 374;

/// Renders the first page of `pdf` to a 280x374 JPEG.
pub fn make_thumbnail(pdf: &[u8]) -> Result<Vec<u8>, ArchiveError> {
    // pdftoppm requires file paths on both ends.
    let dir = tempfile::tempdir()?;
    let pdf_path = dir.path().join("page.pdf");
    std::fs::write(&pdf_path, pdf)?;
    let output_prefix = dir.path().join("page");

    let output = Command::new("pdftoppm")
        .arg("-png")
        .arg("-singlefile")
        .args(["-f", "1", "-l", "1"])
        .args(["-scale-to", RENDER_SCALE])
        .arg(&pdf_path)
        .arg(&output_prefix)
        .output()
        .map_err(|e| {
            ArchiveError::Thumbnail(format!(
                "failed to run pdftoppm: {e}; ensure poppler-utils is installed"
            ))
        })?;
    if !output.status.success() {
        return Err(ArchiveError::Thumbnail(format!(
            "pdftoppm failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let rendered = image::open(dir.path().join("page.png"))
        .map_err(|e| ArchiveError::Thumbnail(format!("cannot decode rendered page: {e}")))?;
    let thumbnail = rendered.resize_exact(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT, FilterType::Lanczos3);

    let mut jpeg = Vec::new();
    thumbnail
        .write_to(&mut Cursor::new(&mut jpeg), image::ImageFormat::Jpeg)
        .map_err(|e| ArchiveError::Thumbnail(format!("cannot encode thumbnail: {e}")))?;
    Ok(jpeg)
}
