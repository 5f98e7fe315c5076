//! Preview rendering: fit an image into the preview area

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

/// Fraction of the fitted size actually used, leaving a small border
pub const PREVIEW_MARGIN: f64 = 0.95;

/// Size of the preview area in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Used until the preview area has been laid out
    pub const DEFAULT: Viewport = Viewport {
        width: 500.0,
        height: 500.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A zero or one pixel area means "not laid out yet"
    pub fn is_usable(&self) -> bool {
        self.width > 1.0 && self.height > 1.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The scaled image shown for the current selection
#[derive(Debug, Clone)]
pub struct PreviewImage {
    /// Entry this preview was rendered from
    pub name: String,
    /// Scaled pixels
    pub image: RgbaImage,
    /// Dimensions of the file on disk
    pub source_size: (u32, u32),
}

impl PreviewImage {
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Scale factor: fit inside the viewport, never enlarge, keep a margin
pub fn fit_scale(image_size: (u32, u32), viewport: Viewport) -> f64 {
    let (width, height) = image_size;
    if width == 0 || height == 0 {
        return PREVIEW_MARGIN;
    }

    let fit = (viewport.width as f64 / width as f64)
        .min(viewport.height as f64 / height as f64)
        .min(1.0);

    fit * PREVIEW_MARGIN
}

/// Output size for an image of `image_size`, at least one pixel each way
pub fn fitted_size(image_size: (u32, u32), viewport: Viewport) -> (u32, u32) {
    let scale = fit_scale(image_size, viewport);
    let scaled = |v: u32| ((v as f64 * scale + 1e-9).floor() as u32).max(1);
    (scaled(image_size.0), scaled(image_size.1))
}

/// Render the preview for `name` from its decoded image
pub fn render_preview(name: &str, source: &DynamicImage, viewport: Viewport) -> PreviewImage {
    let viewport = if viewport.is_usable() {
        viewport
    } else {
        Viewport::DEFAULT
    };

    let source_size = (source.width(), source.height());
    let (width, height) = fitted_size(source_size, viewport);
    let image = source.resize_exact(width, height, FilterType::Lanczos3).to_rgba8();

    PreviewImage {
        name: name.to_string(),
        image,
        source_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_large_image_is_shrunk_to_fit() {
        let viewport = Viewport::new(800.0, 600.0);
        // Width is the limiting side: 0.4 * 0.95
        assert_eq!(fitted_size((2000, 1000), viewport), (760, 380));
        // Height is the limiting side: 0.5 * 0.95
        assert_eq!(fitted_size((1000, 1200), viewport), (475, 570));
    }

    #[test]
    fn test_small_image_is_never_enlarged() {
        let viewport = Viewport::new(800.0, 600.0);
        assert!((fit_scale((100, 60), viewport) - PREVIEW_MARGIN).abs() < 1e-12);
        assert_eq!(fitted_size((100, 60), viewport), (95, 57));
    }

    #[test]
    fn test_degenerate_sizes() {
        let viewport = Viewport::new(10.0, 10.0);
        assert_eq!(fitted_size((10_000, 1), viewport), (9, 1));
    }

    #[test]
    fn test_unusable_viewport_falls_back_to_default() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1000, 1000, Rgba([1, 2, 3, 255])));

        let preview = render_preview("a.png", &source, Viewport::new(0.0, 0.0));

        assert_eq!(preview.size(), (475, 475));
        assert_eq!(preview.source_size, (1000, 1000));
        assert_eq!(preview.name, "a.png");
    }
}
