//! Device-space to PDF-space coordinate mapping.
//!
//! Stroke capture devices use a top-left origin with Y increasing
//! downward; PDF page space uses a bottom-left origin with Y increasing
//! upward. Both axes scale uniformly by a single per-page factor, so
//! aspect is always preserved.

use inkpress_render_core::utils::flip_y;
use inkpress_types::{DEVICE_HEIGHT, DEVICE_WIDTH, Point, Size};

/// Fallback page size in PDF points, used uniformly for every page.
// Background-derived per-page sizing is a known gap; see DESIGN.md.
pub const DEFAULT_PAGE_SIZE: Size = Size::new(445.0, 594.0);

/// Aspect-ratio threshold deciding which axis constrains the scale. The
/// capture device's native aspect is 1872/1404 ≈ 1.333.
const NATIVE_ASPECT: f32 = 1.33;

/// Picks the scale factor that keeps device content inside a page of the
/// given size along both axes.
pub fn page_scale(page: Size) -> f32 {
    let ratio = page.height / page.width;
    if ratio < NATIVE_ASPECT {
        page.width / DEVICE_WIDTH
    } else {
        page.height / DEVICE_HEIGHT
    }
}

/// Maps a device-space point to PDF-space coordinates.
pub fn map_point(point: Point, scale: f32, page_height: f32) -> (f32, f32) {
    (point.x * scale, flip_y(point.y * scale, page_height))
}
