use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

/// Decoded content-stream operators of one page, in order.
pub fn page_operators(doc: &LopdfDocument, page_number: u32) -> Vec<String> {
    let pages = doc.get_pages();
    let page_id = pages[&page_number];
    let bytes = doc.get_page_content(page_id).expect("page content stream");
    Content::decode(&bytes)
        .expect("decodable content stream")
        .operations
        .into_iter()
        .map(|op| op.operator)
        .collect()
}

pub fn count_operator(doc: &LopdfDocument, page_number: u32, operator: &str) -> usize {
    page_operators(doc, page_number)
        .iter()
        .filter(|op| *op == operator)
        .count()
}

/// Raw content stream of one page, lossily decoded for substring checks.
pub fn page_content_text(doc: &LopdfDocument, page_number: u32) -> String {
    let pages = doc.get_pages();
    let page_id = pages[&page_number];
    let bytes = doc.get_page_content(page_id).expect("page content stream");
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Page dimensions (width, height) in points, from the MediaBox.
pub fn page_dimensions(doc: &LopdfDocument, page_number: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_number)?;
    let dict = doc.get_object(*page_id).ok()?.as_dict().ok()?;
    let media_box = dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if media_box.len() < 4 {
        return None;
    }
    // as_float resolves both Integer and Real entries.
    let width = media_box[2].as_float().ok()? - media_box[0].as_float().ok()?;
    let height = media_box[3].as_float().ok()? - media_box[1].as_float().ok()?;
    Some((width, height))
}

/// True when the document declares an ExtGState with the given stroking
/// alpha.
pub fn has_stroke_alpha(doc: &LopdfDocument, alpha: f32) -> bool {
    doc.objects.values().any(|object| {
        object
            .as_dict()
            .ok()
            .and_then(|dict| dict.get(b"ExtGState").ok())
            .and_then(|states| states.as_dict().ok())
            .is_some_and(|states| {
                states.iter().any(|(_, state)| {
                    state
                        .as_dict()
                        .ok()
                        .and_then(|dict| dict.get(b"CA").ok())
                        // as_float resolves both Integer and Real entries.
                        .and_then(|value| value.as_float().ok())
                        .is_some_and(|value| (value - alpha).abs() < 1e-6)
                })
            })
    })
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert page dimensions within tolerance
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!(
            (w - $width).abs() < 1.0,
            "Page {} width expected ~{}, got {}",
            $page,
            $width,
            w
        );
        assert!(
            (h - $height).abs() < 1.0,
            "Page {} height expected ~{}, got {}",
            $page,
            $height,
            h
        );
    };
}
