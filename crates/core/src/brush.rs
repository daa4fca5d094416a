//! Per-brush rendering rules.

use crate::geometry::map_point;
use inkpress_render_core::{LineCap, LineJoin, PageSurface, Rgba};
use inkpress_types::{BrushColor, Line};

const STROKE_WIDTH_FACTOR: f32 = 6.0;
const STROKE_WIDTH_OFFSET: f32 = 10.8;
// Guards against degenerate widths for small brush sizes.
const MIN_STROKE_WIDTH: f32 = 0.5;

// Highlighter band: semi-transparent yellow, thickness in device pixels.
const HIGHLIGHT_COLOR: Rgba = Rgba::new(1.0, 1.0, 0.0, 0.5);
const HIGHLIGHT_THICKNESS: f32 = 30.0;

/// Issues the drawing sequence for one captured line against the active
/// page. Erasers and empty lines draw nothing.
pub fn render_line<S: PageSurface + ?Sized>(
    surface: &mut S,
    line: &Line,
    scale: f32,
    page_height: f32,
) {
    if line.points.is_empty() || line.brush_type.is_eraser() {
        return;
    }
    if line.brush_type.is_highlighter() {
        render_highlight(surface, line, scale, page_height);
    } else {
        render_stroke(surface, line, scale, page_height);
    }
}

/// Exported stroke width for a given brush size.
pub fn stroke_width(brush_size: f32) -> f32 {
    (brush_size * STROKE_WIDTH_FACTOR - STROKE_WIDTH_OFFSET).max(MIN_STROKE_WIDTH)
}

fn stroke_color(color: BrushColor) -> Rgba {
    match color {
        BrushColor::Black => Rgba::opaque(0.0, 0.0, 0.0),
        BrushColor::White => Rgba::opaque(1.0, 1.0, 1.0),
        BrushColor::Grey => Rgba::opaque(0.5, 0.5, 0.5),
    }
}

/// An ordinary stroke: the full point sequence becomes a single open path,
/// stroked once, with rounded caps and joins approximating a continuous
/// pen stroke from the captured samples.
fn render_stroke<S: PageSurface + ?Sized>(
    surface: &mut S,
    line: &Line,
    scale: f32,
    page_height: f32,
) {
    surface.set_stroke_color(stroke_color(line.brush_color));
    surface.set_stroke_width(stroke_width(line.brush_size));
    surface.set_line_cap(LineCap::Round);
    surface.set_line_join(LineJoin::Round);

    for (index, point) in line.points.iter().enumerate() {
        let (x, y) = map_point(*point, scale, page_height);
        if index == 0 {
            surface.move_to(x, y);
        } else {
            surface.line_to(x, y);
        }
    }
    surface.stroke();
}

/// A highlighter renders as one straight band from the first to the last
/// point's X at the first point's Y; interior deviation is ignored. The
/// anchor shifts down by half the band thickness before the Y-flip so the
/// band centers on the stroke, and the cap is flat so the band does not
/// bleed past its extent.
fn render_highlight<S: PageSurface + ?Sized>(
    surface: &mut S,
    line: &Line,
    scale: f32,
    page_height: f32,
) {
    if line.points.len() < 2 {
        return;
    }
    let first = line.points[0];
    let last = line.points[line.points.len() - 1];

    let thickness = scale * HIGHLIGHT_THICKNESS;
    let x1 = first.x * scale;
    let x2 = last.x * scale;
    let y = page_height - (first.y * scale + thickness / 2.0);

    surface.set_stroke_color(HIGHLIGHT_COLOR);
    surface.set_stroke_width(thickness);
    surface.set_line_cap(LineCap::Butt);
    surface.move_to(x1, y);
    surface.line_to(x2, y);
    surface.stroke();
}
