use crate::writer::DocumentWriter;
use inkpress_render_core::{LineCap, LineJoin, PageSurface, RenderError, Rgba};
use inkpress_types::Size;
use lopdf::Object;
use lopdf::content::{Content, Operation};
use std::mem;

/// A [`PageSurface`] buffering content-stream operators per page.
pub struct LopdfSurface {
    writer: DocumentWriter,
    ops: Vec<Operation>,
    page_size: Size,
}

impl LopdfSurface {
    pub fn new(page_size: Size) -> Self {
        Self {
            writer: DocumentWriter::new(),
            ops: Vec::new(),
            page_size,
        }
    }

    fn flush_page(&mut self) -> Result<(), RenderError> {
        let operations = mem::take(&mut self.ops);
        self.writer.write_page(Content { operations }, self.page_size)
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.ops.push(Operation::new(operator, operands));
    }
}

impl PageSurface for LopdfSurface {
    fn set_page_size(&mut self, size: Size) {
        self.page_size = size;
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        // Alpha lives in the graphics state, not the color operator, so a
        // state is registered even for fully opaque colors to reset any
        // transparency a previous draw left behind.
        let state = self.writer.alpha_state(color.a);
        self.push("gs", vec![Object::Name(state.into_bytes())]);
        self.push(
            "RG",
            vec![color.r.into(), color.g.into(), color.b.into()],
        );
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.push("w", vec![width.into()]);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        let style: i64 = match cap {
            LineCap::Butt => 0,
            LineCap::Round => 1,
        };
        self.push("J", vec![style.into()]);
    }

    fn set_line_join(&mut self, join: LineJoin) {
        let style: i64 = match join {
            LineJoin::Miter => 0,
            LineJoin::Round => 1,
        };
        self.push("j", vec![style.into()]);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push("m", vec![x.into(), y.into()]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push("l", vec![x.into(), y.into()]);
    }

    fn stroke(&mut self) {
        self.push("S", vec![]);
    }

    fn show_text(&mut self, x: f32, y: f32, font_size: f32, text: &str) {
        // Labels are always opaque, whatever alpha the last stroke left
        // installed.
        let state = self.writer.alpha_state(1.0);
        self.push("gs", vec![Object::Name(state.into_bytes())]);
        self.push("rg", vec![0.into(), 0.into(), 0.into()]);
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![Object::Name(b"F1".to_vec()), font_size.into()],
        );
        self.push("Td", vec![x.into(), y.into()]);
        self.push("Tj", vec![Object::string_literal(text)]);
        self.push("ET", vec![]);
    }

    fn show_page(&mut self) {
        // Emitting a page is infallible in practice; content encoding only
        // fails on malformed operands, which this surface never produces.
        if let Err(err) = self.flush_page() {
            log::error!("failed to emit page: {err}");
        }
    }

    fn finish(mut self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        // The current page is only emitted when it carries content, or when
        // the document would otherwise be empty. A trailing `show_page`
        // therefore never yields a dangling blank page, while a document
        // whose every source page was skipped still has its initial page.
        if !self.ops.is_empty() || self.writer.page_count() == 0 {
            self.flush_page()?;
        }
        self.writer.finish()
    }
}
