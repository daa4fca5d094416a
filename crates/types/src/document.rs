use crate::brush::{BrushColor, BrushType};
use crate::device::Point;

/// A parsed handwritten-annotation document: an ordered sequence of pages.
///
/// Documents are read-only inputs to the rendering engine. A document with
/// zero pages is a fatal input error, checked at the entry point rather
/// than enforced by construction.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// A single page. `data` is absent for blank pages (no stroke file in the
/// source container).
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub data: Option<StrokeData>,
}

impl Page {
    pub fn blank() -> Self {
        Self { data: None }
    }

    pub fn has_content(&self) -> bool {
        self.data.is_some()
    }
}

/// Stroke content of one page. Layers render in list order; later layers
/// draw on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct StrokeData {
    pub layers: Vec<Layer>,
}

#[derive(Debug, Clone, Default)]
pub struct Layer {
    pub lines: Vec<Line>,
}

/// One captured stroke: an ordered polyline of device-space samples plus
/// the brush it was drawn with.
#[derive(Debug, Clone)]
pub struct Line {
    pub brush_type: BrushType,
    pub brush_color: BrushColor,
    pub brush_size: f32,
    pub points: Vec<Point>,
}
