/// Convert a top-left-origin Y coordinate to PDF Y coordinate (flip origin).
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}
