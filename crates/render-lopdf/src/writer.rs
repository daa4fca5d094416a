use inkpress_render_core::RenderError;
use inkpress_types::Size;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

/// Assembles a multi-page PDF document object graph.
///
/// Page content streams are added as pages are flushed; the shared resource
/// dictionary (font for page labels, ExtGState entries for stroke alpha) and
/// the page tree are written once on `finish`. All pages reference the same
/// resources object.
pub struct DocumentWriter {
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    // (graphics state name, stroke/fill alpha)
    alpha_states: Vec<(String, f32)>,
}

impl DocumentWriter {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let resources_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            alpha_states: Vec::new(),
        }
    }

    /// Returns the ExtGState name registered for `alpha`, creating one on
    /// first use. Names are stable for the lifetime of the writer.
    pub fn alpha_state(&mut self, alpha: f32) -> String {
        if let Some((name, _)) = self
            .alpha_states
            .iter()
            .find(|(_, a)| a.to_bits() == alpha.to_bits())
        {
            return name.clone();
        }
        let name = format!("GS{}", self.alpha_states.len());
        self.alpha_states.push((name.clone(), alpha));
        name
    }

    /// Appends a finished page with the given content and media box.
    pub fn write_page(&mut self, content: Content, size: Size) -> Result<(), RenderError> {
        let encoded = content
            .encode()
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let content_id = self
            .doc
            .add_object(Object::Stream(Stream::new(dictionary! {}, encoded)));
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), size.width.into(), size.height.into()],
            "Contents" => content_id,
            "Resources" => Object::Reference(self.resources_id),
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Writes the resource dictionary, page tree and catalog, then
    /// serializes the document.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        let font_id = self.doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let mut resources = dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        };
        if !self.alpha_states.is_empty() {
            let mut ext_g_states = Dictionary::new();
            for (name, alpha) in &self.alpha_states {
                ext_g_states.set(
                    name.as_bytes(),
                    dictionary! {
                        "Type" => "ExtGState",
                        "CA" => *alpha,
                        "ca" => *alpha,
                    },
                );
            }
            resources.set("ExtGState", ext_g_states);
        }
        self.doc.objects.insert(self.resources_id, resources.into());

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.doc.objects.insert(self.pages_id, pages_dict.into());

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        self.doc
            .save_to(&mut bytes)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        Ok(bytes)
    }
}

impl Default for DocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}
