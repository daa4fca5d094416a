//! Background PDF inspection and per-page overlay compositing.
//!
//! This crate provides the composition collaborator for annotation export:
//! - Structural validation of a background PDF, reporting its `Encrypted`
//!   flag without acting on it
//! - True page stacking: each page of an annotation document is stamped on
//!   top of the corresponding background page, so annotation marks occlude
//!   the background rather than following it as extra pages
//! - Deep object copying between documents with cycle detection

mod error;

pub use error::ComposerError;

use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::collections::HashMap;

/// What structural inspection of a background document reports.
#[derive(Debug, Clone, Copy)]
pub struct BackgroundInfo {
    pub encrypted: bool,
    pub page_count: usize,
}

/// Validates that `bytes` parse as a PDF document.
///
/// Encryption is reported, never acted on here; composition later reads the
/// document with default credentials and surfaces any failure as its own
/// error.
pub fn inspect(bytes: &[u8]) -> Result<BackgroundInfo, ComposerError> {
    let doc = Document::load_mem(bytes).map_err(|e| ComposerError::Malformed(e.to_string()))?;
    let encrypted = doc.trailer.get(b"Encrypt").is_ok();
    Ok(BackgroundInfo {
        encrypted,
        page_count: doc.get_pages().len(),
    })
}

/// Stacks `overlay` on top of `background`, page for page.
///
/// Each overlay page's content is imported into the background document as
/// a Form XObject and drawn after that page's own content. The existing
/// page content is bracketed in a save/restore pair so leftover graphics
/// state cannot leak into the stamp. Overlay pages beyond the background's
/// page count are appended as new pages.
pub fn stack_documents(background: &[u8], overlay: &[u8]) -> Result<Vec<u8>, ComposerError> {
    let mut target =
        Document::load_mem(background).map_err(|e| ComposerError::Malformed(e.to_string()))?;
    let source =
        Document::load_mem(overlay).map_err(|e| ComposerError::Malformed(e.to_string()))?;

    let target_pages: Vec<ObjectId> = target.get_pages().into_values().collect();
    let source_pages: Vec<ObjectId> = source.get_pages().into_values().collect();
    log::debug!(
        "stacking {} overlay page(s) onto {} background page(s)",
        source_pages.len(),
        target_pages.len()
    );

    let mut appended = Vec::new();
    for (index, overlay_id) in source_pages.iter().enumerate() {
        let name = format!("XAnn{index}");
        let (form_id, bbox) = import_page_as_form(&source, *overlay_id, &mut target)?;
        match target_pages.get(index) {
            Some(page_id) => stamp_form(&mut target, *page_id, form_id, &name)?,
            None => appended.push(new_form_page(&mut target, form_id, bbox, &name)),
        }
    }
    if !appended.is_empty() {
        extend_page_tree(&mut target, &appended)?;
    }

    let mut bytes = Vec::new();
    target
        .save_to(&mut bytes)
        .map_err(|e| ComposerError::Other(e.to_string()))?;
    Ok(bytes)
}

/// Manages importing objects from one document into another.
struct ObjectImporter<'a> {
    source: &'a Document,
    target: &'a mut Document,
    imported: HashMap<ObjectId, ObjectId>,
}

impl<'a> ObjectImporter<'a> {
    fn new(source: &'a Document, target: &'a mut Document) -> Self {
        Self {
            source,
            target,
            imported: HashMap::new(),
        }
    }

    /// Deep copies an object and everything it references, assigning fresh
    /// ids in the target document. Each source object is copied once.
    fn import(&mut self, source_id: ObjectId) -> Result<ObjectId, lopdf::Error> {
        if let Some(target_id) = self.imported.get(&source_id) {
            return Ok(*target_id);
        }

        // Reserve the target id before recursing so cyclic references
        // (Page -> Parent -> Kids -> Page) terminate. The placeholder is
        // replaced once the object's own references are rewritten.
        let target_id = self.target.add_object(Object::Null);
        self.imported.insert(source_id, target_id);

        let object = self.source.get_object(source_id)?.clone();
        let rewritten = self.rewrite(object)?;
        match self.target.objects.get_mut(&target_id) {
            Some(slot) => *slot = rewritten,
            None => return Err(lopdf::Error::ObjectNotFound(target_id)),
        }
        Ok(target_id)
    }

    /// Replaces every reference inside `object` with the id of its imported
    /// copy, importing on first encounter.
    fn rewrite(&mut self, object: Object) -> Result<Object, lopdf::Error> {
        match object {
            Object::Reference(id) => Ok(Object::Reference(self.import(id)?)),
            Object::Array(items) => Ok(Object::Array(
                items
                    .into_iter()
                    .map(|item| self.rewrite(item))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Object::Dictionary(mut dict) => {
                for (_, value) in dict.iter_mut() {
                    *value = self.rewrite(value.clone())?;
                }
                Ok(Object::Dictionary(dict))
            }
            Object::Stream(mut stream) => {
                for (_, value) in stream.dict.iter_mut() {
                    *value = self.rewrite(value.clone())?;
                }
                Ok(Object::Stream(stream))
            }
            primitive => Ok(primitive),
        }
    }
}

/// Imports one page of `source` into `target` as a Form XObject carrying
/// the page's full content and a deep copy of its resources. Returns the
/// new object id and the bounding box used.
fn import_page_as_form(
    source: &Document,
    page_id: ObjectId,
    target: &mut Document,
) -> Result<(ObjectId, [f32; 4]), ComposerError> {
    let content = source.get_page_content(page_id)?;
    let page = source.get_object(page_id)?.as_dict()?;
    let bbox = media_box(page).unwrap_or([0.0, 0.0, 445.0, 594.0]);

    let mut importer = ObjectImporter::new(source, target);
    let resources = match page.get(b"Resources") {
        Ok(object) => importer.rewrite(object.clone())?,
        Err(_) => Object::Dictionary(Dictionary::new()),
    };

    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Form",
        "BBox" => bbox.iter().map(|v| Object::Real(*v)).collect::<Vec<Object>>(),
        "Resources" => resources,
    };
    let form_id = target.add_object(Object::Stream(Stream::new(dict, content)));
    Ok((form_id, bbox))
}

fn media_box(page: &Dictionary) -> Option<[f32; 4]> {
    let array = page.get(b"MediaBox").ok()?.as_array().ok()?;
    if array.len() != 4 {
        return None;
    }
    let mut bbox = [0.0f32; 4];
    for (slot, value) in bbox.iter_mut().zip(array) {
        // MediaBox entries may be written as integers or reals.
        *slot = value.as_float().ok()?;
    }
    Some(bbox)
}

/// Draws `form_id` on top of an existing page's content.
fn stamp_form(
    doc: &mut Document,
    page_id: ObjectId,
    form_id: ObjectId,
    name: &str,
) -> Result<(), ComposerError> {
    register_xobject(doc, page_id, form_id, name)?;

    // Bracket the original content in q/Q, then draw the form last so it
    // occludes the page beneath it.
    let save_id = doc.add_object(Object::Stream(Stream::new(dictionary! {}, b"q\n".to_vec())));
    let stamp = format!("Q\nq\n/{name} Do\nQ").into_bytes();
    let stamp_id = doc.add_object(Object::Stream(Stream::new(dictionary! {}, stamp)));

    let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
    let mut contents = match page.get(b"Contents") {
        Ok(Object::Array(items)) => items.clone(),
        Ok(single) => vec![single.clone()],
        Err(_) => Vec::new(),
    };
    contents.insert(0, Object::Reference(save_id));
    contents.push(Object::Reference(stamp_id));
    page.set("Contents", Object::Array(contents));
    Ok(())
}

/// Adds `name -> form_id` to the page's XObject resources, following
/// indirection for both the resource dictionary and the XObject entry.
fn register_xobject(
    doc: &mut Document,
    page_id: ObjectId,
    form_id: ObjectId,
    name: &str,
) -> Result<(), ComposerError> {
    let resources_ref = {
        let page = doc.get_object(page_id)?.as_dict()?;
        match page.get(b"Resources") {
            Ok(Object::Reference(id)) => Some(*id),
            _ => None,
        }
    };

    let indirect_xobjects = match resources_ref {
        Some(resources_id) => {
            let resources = doc.get_object_mut(resources_id)?.as_dict_mut()?;
            set_xobject_entry(resources, name, form_id)
        }
        None => {
            // Inline or absent resource dictionary; rewrite it on the page.
            // A page relying purely on inherited resources gets a fresh
            // dictionary holding only the stamp.
            let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
            let mut resources = match page.get(b"Resources") {
                Ok(Object::Dictionary(dict)) => dict.clone(),
                _ => Dictionary::new(),
            };
            let indirect = set_xobject_entry(&mut resources, name, form_id);
            page.set("Resources", Object::Dictionary(resources));
            indirect
        }
    };

    if let Some(xobjects_id) = indirect_xobjects {
        let xobjects = doc.get_object_mut(xobjects_id)?.as_dict_mut()?;
        xobjects.set(name, Object::Reference(form_id));
    }
    Ok(())
}

/// Sets the entry in the resource dictionary's XObject map, or returns the
/// map's object id when it is itself indirect.
fn set_xobject_entry(
    resources: &mut Dictionary,
    name: &str,
    form_id: ObjectId,
) -> Option<ObjectId> {
    match resources.get_mut(b"XObject") {
        Ok(Object::Dictionary(xobjects)) => {
            xobjects.set(name, Object::Reference(form_id));
            None
        }
        Ok(Object::Reference(id)) => Some(*id),
        _ => {
            let mut xobjects = Dictionary::new();
            xobjects.set(name, Object::Reference(form_id));
            resources.set("XObject", Object::Dictionary(xobjects));
            None
        }
    }
}

/// Builds a fresh page whose only content is the form stamp. Used for
/// overlay pages with no background counterpart.
fn new_form_page(doc: &mut Document, form_id: ObjectId, bbox: [f32; 4], name: &str) -> ObjectId {
    let content = format!("q\n/{name} Do\nQ").into_bytes();
    let content_id = doc.add_object(Object::Stream(Stream::new(dictionary! {}, content)));
    let mut xobjects = Dictionary::new();
    xobjects.set(name, Object::Reference(form_id));
    doc.add_object(dictionary! {
        "Type" => "Page",
        "MediaBox" => bbox.iter().map(|v| Object::Real(*v)).collect::<Vec<Object>>(),
        "Contents" => content_id,
        "Resources" => dictionary! { "XObject" => xobjects },
    })
}

/// Appends `pages` to the document's page tree and points their Parent at
/// it.
fn extend_page_tree(doc: &mut Document, pages: &[ObjectId]) -> Result<(), ComposerError> {
    let root_id = doc.trailer.get(b"Root")?.as_reference()?;
    let pages_id = {
        let root = doc.get_object(root_id)?.as_dict()?;
        root.get(b"Pages")?.as_reference()?
    };

    {
        let tree = doc.get_object_mut(pages_id)?.as_dict_mut()?;
        let mut kids = tree.get(b"Kids")?.as_array()?.clone();
        let count = tree.get(b"Count")?.as_i64()?;
        kids.extend(pages.iter().map(|id| Object::Reference(*id)));
        tree.set("Kids", Object::Array(kids));
        tree.set("Count", count + pages.len() as i64);
    }

    for page_id in pages {
        let page = doc.get_object_mut(*page_id)?.as_dict_mut()?;
        page.set("Parent", Object::Reference(pages_id));
    }
    Ok(())
}
