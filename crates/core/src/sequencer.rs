//! Page iteration and surface page-advance protocol.

use crate::brush::render_line;
use crate::geometry::page_scale;
use crate::options::GeneratorOptions;
use inkpress_render_core::PageSurface;
use inkpress_types::{Document, Size};

const PAGE_NUMBER_FONT_SIZE: f32 = 8.0;
// Label anchor: in from the right edge, up from the bottom edge.
const PAGE_NUMBER_MARGIN_X: f32 = 20.0;
const PAGE_NUMBER_MARGIN_Y: f32 = 10.0;

/// Renders every included page of `document` onto `surface`.
///
/// Pages without stroke content are omitted entirely unless
/// `options.all_pages` is set. The surface's initial page is used for the
/// first emitted page; later pages get an explicit size assignment before
/// any drawing. The final emitted page is left unadvanced so the surface's
/// finish step does not produce a trailing blank page; if every source
/// page is skipped, the surface's initial page remains as the single,
/// empty output page.
pub fn render_document<S: PageSurface + ?Sized>(
    surface: &mut S,
    document: &Document,
    options: &GeneratorOptions,
    page_size: Size,
) {
    let total = document.page_count();
    let mut emitted = 0usize;

    for page in &document.pages {
        let has_content = page.has_content();
        if !options.all_pages && !has_content {
            continue;
        }
        emitted += 1;

        if emitted > 1 {
            surface.set_page_size(page_size);
        }
        let scale = page_scale(page_size);

        if let Some(data) = &page.data {
            for layer in &data.layers {
                for line in &layer.lines {
                    render_line(surface, line, scale, page_size.height);
                }
            }
        }

        if options.add_page_numbers {
            surface.show_text(
                page_size.width - PAGE_NUMBER_MARGIN_X,
                PAGE_NUMBER_MARGIN_Y,
                PAGE_NUMBER_FONT_SIZE,
                &emitted.to_string(),
            );
        }

        if emitted < total || options.all_pages {
            surface.show_page();
        }
    }
    log::debug!("sequenced {emitted} of {total} page(s)");
}
