/// Pixel width of the capture device's drawing area.
pub const DEVICE_WIDTH: f32 = 1404.0;
/// Pixel height of the capture device's drawing area.
pub const DEVICE_HEIGHT: f32 = 1872.0;

/// A captured stroke sample in device space: top-left origin, units of
/// device pixels, Y increasing downward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
