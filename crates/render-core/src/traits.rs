use crate::error::RenderError;
use crate::types::{LineCap, LineJoin, Rgba};
use inkpress_types::Size;

/// A multi-page vector surface, abstracting the PDF-writing primitives.
///
/// Coordinates are PDF page space: bottom-left origin, units of points.
/// A surface always has a current page; `show_page` emits it and opens the
/// next one, which inherits the current page size until `set_page_size` is
/// called again. `finish` emits the current page only when it carries
/// drawing operations, or when no page has been emitted at all, so a
/// trailing `show_page` never produces a dangling blank page.
pub trait PageSurface {
    fn set_page_size(&mut self, size: Size);

    fn set_stroke_color(&mut self, color: Rgba);

    fn set_stroke_width(&mut self, width: f32);

    fn set_line_cap(&mut self, cap: LineCap);

    fn set_line_join(&mut self, join: LineJoin);

    fn move_to(&mut self, x: f32, y: f32);

    fn line_to(&mut self, x: f32, y: f32);

    /// Strokes the current path and starts a new one.
    fn stroke(&mut self);

    /// Places `text` with its baseline origin at `(x, y)`, filled black.
    fn show_text(&mut self, x: f32, y: f32, font_size: f32, text: &str);

    /// Emits the current page and advances to a fresh page context.
    fn show_page(&mut self);

    /// Finalizes the surface and returns the completed document bytes.
    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError>;
}
