//! Camera glyph used as the tray icon

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_hollow_rect_mut,
};
use imageproc::rect::Rect;
use tray_icon::Icon;

use super::TrayError;

pub const ICON_SIZE: u32 = 64;

const BACKGROUND: Rgba<u8> = Rgba([30, 30, 46, 255]);
const BODY: Rgba<u8> = Rgba([137, 180, 250, 255]);
const OUTLINE: Rgba<u8> = Rgba([205, 214, 244, 255]);
const LENS: Rgba<u8> = Rgba([24, 24, 37, 255]);
const FLASH: Rgba<u8> = Rgba([246, 194, 135, 255]);

/// Draw the camera: body, lens, flash and viewfinder
pub fn camera_image() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(ICON_SIZE, ICON_SIZE, BACKGROUND);

    let body = Rect::at(10, 20).of_size(45, 31);
    draw_filled_rect_mut(&mut img, body, BODY);
    draw_hollow_rect_mut(&mut img, body, OUTLINE);

    draw_filled_circle_mut(&mut img, (32, 36), 8, LENS);
    draw_hollow_circle_mut(&mut img, (32, 36), 8, OUTLINE);

    draw_filled_rect_mut(&mut img, Rect::at(26, 14).of_size(7, 7), FLASH);
    draw_filled_rect_mut(&mut img, Rect::at(42, 24).of_size(7, 5), LENS);

    img
}

/// The camera glyph as a platform tray icon
pub fn camera_icon() -> Result<Icon, TrayError> {
    let img = camera_image();
    let (width, height) = img.dimensions();
    Icon::from_rgba(img.into_raw(), width, height).map_err(|e| TrayError::Icon(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_image_layout() {
        let img = camera_image();

        assert_eq!(img.dimensions(), (ICON_SIZE, ICON_SIZE));
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*img.get_pixel(32, 36), LENS);
        assert_eq!(*img.get_pixel(14, 46), BODY);
        assert_eq!(*img.get_pixel(29, 16), FLASH);
    }
}
