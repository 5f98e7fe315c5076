//! Frame data structures for captured screen content

use chrono::{DateTime, Local};
use image::RgbaImage;

/// A captured frame from the screen
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    /// Raw RGBA pixels
    pub image: RgbaImage,
    /// Local wall-clock time the frame was grabbed
    pub captured_at: DateTime<Local>,
}

impl CapturedFrame {
    /// Create a new captured frame stamped with the current local time
    pub fn new(image: RgbaImage) -> Self {
        Self::at(image, Local::now())
    }

    /// Create a frame with an explicit capture moment
    pub fn at(image: RgbaImage, captured_at: DateTime<Local>) -> Self {
        Self { image, captured_at }
    }

    /// Get frame dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}
