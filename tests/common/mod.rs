//! Shared fixture helpers for integration tests.
//!
//! Fixtures are generated on the fly instead of being committed: a
//! text-like grayscale page and a color page, written as PNG.

use image::{GrayImage, Luma, Rgb, RgbImage};
use std::path::Path;

/// Mostly-white 8 bpp page with dark horizontal text-like bars
pub fn write_gray_page(path: &Path) {
    let img = GrayImage::from_fn(240, 320, |x, y| {
        let in_bar = (y % 40) > 8 && (y % 40) < 16 && x > 20 && x < 220;
        if in_bar {
            Luma([30u8])
        } else {
            Luma([235u8])
        }
    });
    img.save(path).expect("failed to write gray fixture");
}

/// Color page with the same bar layout on a warm paper tone
pub fn write_color_page(path: &Path) {
    let img = RgbImage::from_fn(240, 320, |x, y| {
        let in_bar = (y % 40) > 8 && (y % 40) < 16 && x > 20 && x < 220;
        if in_bar {
            Rgb([40u8, 30, 30])
        } else {
            Rgb([240u8, 235, 225])
        }
    });
    img.save(path).expect("failed to write color fixture");
}
