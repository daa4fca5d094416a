use crate::content::{Content, ExtraMetadata, Metadata, Transform};
use crate::error::ArchiveError;
use crate::thumbnail;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Environment variable gating thumbnail generation during archive
/// creation. Rendering needs the external `pdftoppm` tool, so it is
/// opt-in.
const THUMBNAILS_ENV: &str = "INKPRESS_THUMBNAILS";

/// Milliseconds since the Unix epoch, as the metadata format expects.
pub fn unix_timestamp_millis() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// Writes a `.metadata` descriptor for a document or collection into
/// `dir`, returning the path of the created file.
pub fn create_metadata_file(
    id: &str,
    name: &str,
    parent: &str,
    collection_type: &str,
    dir: &Path,
) -> Result<PathBuf, ArchiveError> {
    let metadata = Metadata {
        visible_name: name.to_string(),
        version: 0,
        last_modified: unix_timestamp_millis(),
        collection_type: collection_type.to_string(),
        parent: parent.to_string(),
        synced: true,
    };
    let path = dir.join(format!("{id}.metadata"));
    fs::write(&path, serde_json::to_vec(&metadata)?)?;
    Ok(path)
}

/// Packs a bare source document (`.pdf`, `.epub` or a single `.rm` stroke
/// file) into a notebook archive, returning the path of the temporary ZIP.
/// A path that already points at a ZIP is returned unchanged.
pub fn create_notebook_archive(id: &str, src_path: &Path) -> Result<PathBuf, ArchiveError> {
    let ext = src_path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if ext == "zip" {
        return Ok(src_path.to_path_buf());
    }

    // Decide on the layout before touching any storage, so an unsupported
    // source leaves nothing behind.
    let (document_path, file_type, pages) = match ext.as_str() {
        "rm" => {
            let page_id = Uuid::new_v4().to_string();
            (
                format!("{id}/{page_id}.rm"),
                "notebook".to_string(),
                vec![page_id],
            )
        }
        "pdf" | "epub" => (format!("{id}.{ext}"), ext.clone(), vec![String::new()]),
        other => return Err(ArchiveError::UnsupportedContainer(other.to_string())),
    };

    let document = fs::read(src_path)?;
    // The staging file is only persisted once the archive is complete;
    // any earlier failure drops and removes it.
    let staging = tempfile::Builder::new()
        .prefix("inkpress-archive-")
        .suffix(".zip")
        .tempfile()?;
    let mut writer = ZipWriter::new(staging);
    let options = SimpleFileOptions::default();

    writer.start_file(&document_path, options)?;
    writer.write_all(&document)?;

    if ext == "pdf" && std::env::var_os(THUMBNAILS_ENV).is_some() {
        match thumbnail::make_thumbnail(&document) {
            Ok(jpeg) => {
                writer.start_file(format!("{id}.thumbnails/0.jpg"), options)?;
                writer.write_all(&jpeg)?;
            }
            Err(err) => log::error!("cannot generate thumbnail: {err}"),
        }
    }

    writer.start_file(format!("{id}.pagedata"), options)?;
    writer.write_all(&[])?;

    writer.start_file(format!("{id}.content"), options)?;
    writer.write_all(&serde_json::to_vec(&content_descriptor(&file_type, pages))?)?;

    let staging = writer.finish()?;
    let (_file, path) = staging.keep().map_err(|e| ArchiveError::Io(e.error))?;
    Ok(path)
}

fn content_descriptor(file_type: &str, pages: Vec<String>) -> Content {
    Content {
        dummy_document: false,
        extra_metadata: ExtraMetadata {
            last_pen: "Finelinerv2".to_string(),
            last_tool: "Finelinerv2".to_string(),
            last_fineliner_size: "1".to_string(),
        },
        file_type: file_type.to_string(),
        page_count: 0,
        last_opened_page: 0,
        line_height: -1,
        margins: 180,
        text_scale: 1,
        transform: Transform::identity(),
        pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::NotebookArchive;

    #[test]
    fn packs_a_pdf_into_a_readable_archive() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("notes.pdf");
        fs::write(&src, b"%PDF-1.4 payload").unwrap();

        let archive_path = create_notebook_archive("doc-42", &src).unwrap();
        let archive = NotebookArchive::open(&archive_path).unwrap();
        fs::remove_file(&archive_path).unwrap();

        assert_eq!(archive.id, "doc-42");
        assert_eq!(archive.file_type(), "pdf");
        assert_eq!(archive.payload.as_deref(), Some(b"%PDF-1.4 payload".as_ref()));
        // The single page entry has no stroke file yet.
        assert_eq!(archive.document.page_count(), 1);
        assert!(!archive.document.pages[0].has_content());
    }

    #[test]
    fn refuses_unknown_source_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("notes.docx");
        fs::write(&src, b"whatever").unwrap();
        assert!(matches!(
            create_notebook_archive("doc-43", &src),
            Err(ArchiveError::UnsupportedContainer(_))
        ));
    }

    #[test]
    fn unknown_kinds_are_rejected_before_touching_storage() {
        // The source does not even exist; rejection must come from the
        // extension check, before any read or staging file.
        let missing = Path::new("/nonexistent/notes.docx");
        assert!(matches!(
            create_notebook_archive("doc-45", missing),
            Err(ArchiveError::UnsupportedContainer(_))
        ));
    }

    #[test]
    fn metadata_file_carries_the_visible_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_metadata_file("doc-44", "My Notes", "", "DocumentType", dir.path())
            .unwrap();
        let metadata: Metadata =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(metadata.visible_name, "My Notes");
        assert!(metadata.synced);
    }
}
