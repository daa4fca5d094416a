pub mod brush;
pub mod device;
pub mod document;

pub use brush::{BrushColor, BrushType};
pub use device::{DEVICE_HEIGHT, DEVICE_WIDTH, Point, Size};
pub use document::{Document, Layer, Line, Page, StrokeData};
