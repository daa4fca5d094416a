use crate::content::Content;
use crate::error::ArchiveError;
use crate::lines::parse_lines;
use inkpress_types::{Document, Page};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

// Declared entry sizes come from untrusted ZIP headers; preallocation is
// bounded here and the buffers grow normally past it.
const ENTRY_PREALLOC_CAP: usize = 1 << 20;

/// A notebook archive read into memory: descriptor, stroke document and
/// the optional background payload the notes were taken on.
#[derive(Debug)]
pub struct NotebookArchive {
    pub id: String,
    pub content: Content,
    pub document: Document,
    pub payload: Option<Vec<u8>>,
}

impl NotebookArchive {
    pub fn open(path: &Path) -> Result<Self, ArchiveError> {
        Self::read(File::open(path)?)
    }

    pub fn read<R: Read + Seek>(reader: R) -> Result<Self, ArchiveError> {
        let mut archive = ZipArchive::new(reader)?;

        let content_name = archive
            .file_names()
            .find(|name| name.ends_with(".content") && !name.contains('/'))
            .map(String::from)
            .ok_or_else(|| ArchiveError::MissingEntry("*.content".to_string()))?;
        let id = content_name.trim_end_matches(".content").to_string();
        let content: Content = serde_json::from_slice(&read_entry(&mut archive, &content_name)?)?;

        let payload = match read_optional(&mut archive, &format!("{id}.pdf"))? {
            Some(bytes) => Some(bytes),
            None => read_optional(&mut archive, &format!("{id}.epub"))?,
        };

        let page_ids = if content.pages.is_empty() {
            // Older containers carry no page list; their stroke files are
            // named by page index.
            numbered_page_ids(&archive, &id)
        } else {
            content.pages.clone()
        };

        let mut pages = Vec::with_capacity(page_ids.len());
        for page_id in &page_ids {
            let entry = format!("{id}/{page_id}.rm");
            let page = match read_optional(&mut archive, &entry)? {
                Some(bytes) => Page {
                    data: Some(parse_lines(&bytes)?),
                },
                None => Page::blank(),
            };
            pages.push(page);
        }
        log::debug!("read archive {id}: {} page(s)", pages.len());

        Ok(Self {
            id,
            content,
            document: Document { pages },
            payload,
        })
    }

    pub fn file_type(&self) -> &str {
        &self.content.file_type
    }
}

fn numbered_page_ids<R: Read + Seek>(archive: &ZipArchive<R>, id: &str) -> Vec<String> {
    let prefix = format!("{id}/");
    let mut indices: Vec<u32> = archive
        .file_names()
        .filter_map(|name| {
            name.strip_prefix(&prefix)?
                .strip_suffix(".rm")?
                .parse()
                .ok()
        })
        .collect();
    indices.sort_unstable();
    indices.iter().map(u32::to_string).collect()
}

fn read_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Vec<u8>, ArchiveError> {
    let mut entry = archive.by_name(name)?;
    let mut bytes = Vec::with_capacity((entry.size() as usize).min(ENTRY_PREALLOC_CAP));
    entry.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn read_optional<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<Vec<u8>>, ArchiveError> {
    match archive.by_name(name) {
        Ok(mut entry) => {
            let mut bytes = Vec::with_capacity((entry.size() as usize).min(ENTRY_PREALLOC_CAP));
            entry.read_to_end(&mut bytes)?;
            Ok(Some(bytes))
        }
        Err(ZipError::FileNotFound) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
