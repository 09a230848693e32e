//! Grayscale conversion module
//!
//! Converts a 32 bpp color image to 8 bpp grayscale via
//! `pixConvertRGBToGray`.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pix::{Pix, COLOR_DEPTH};

/// Channel weights for the gray projection.
///
/// All-zero weights select Leptonica's documented defaults (luminance-like
/// weighting). Non-zero weights must sum to 1.0 or less per the library
/// contract; they are passed through unchecked, as the library validates
/// them itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayOptions {
    pub red_weight: f32,
    pub green_weight: f32,
    pub blue_weight: f32,
}

impl Default for GrayOptions {
    fn default() -> Self {
        Self {
            red_weight: 0.0,
            green_weight: 0.0,
            blue_weight: 0.0,
        }
    }
}

impl GrayOptions {
    /// Create a new options builder
    pub fn builder() -> GrayOptionsBuilder {
        GrayOptionsBuilder::default()
    }
}

/// Builder for [`GrayOptions`]
#[derive(Debug, Default)]
pub struct GrayOptionsBuilder {
    options: GrayOptions,
}

impl GrayOptionsBuilder {
    /// Set the red channel weight
    #[must_use]
    pub fn red_weight(mut self, weight: f32) -> Self {
        self.options.red_weight = weight;
        self
    }

    /// Set the green channel weight
    #[must_use]
    pub fn green_weight(mut self, weight: f32) -> Self {
        self.options.green_weight = weight;
        self
    }

    /// Set the blue channel weight
    #[must_use]
    pub fn blue_weight(mut self, weight: f32) -> Self {
        self.options.blue_weight = weight;
        self
    }

    /// Build the options
    #[must_use]
    pub fn build(self) -> GrayOptions {
        self.options
    }
}

/// Convert a 32 bpp color image to 8 bpp grayscale.
///
/// Fails with `UnsupportedDepth` when the input is not color. Writes the
/// result to `output` in the format implied by its extension and returns
/// that path.
pub fn rgb_to_gray(input: &Path, output: &Path, options: &GrayOptions) -> Result<PathBuf> {
    let src = Pix::read(input)?;
    src.expect_depth(COLOR_DEPTH)?;

    let raw = unsafe {
        leptonica_sys::pixConvertRGBToGray(
            src.as_ptr(),
            options.red_weight,
            options.green_weight,
            options.blue_weight,
        )
    };
    let gray = Pix::from_raw(raw, "pixConvertRGBToGray")?;
    gray.write_implied(output)?;

    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrepError;

    #[test]
    fn test_default_weights_zero() {
        let opts = GrayOptions::default();
        assert_eq!(opts.red_weight, 0.0);
        assert_eq!(opts.green_weight, 0.0);
        assert_eq!(opts.blue_weight, 0.0);
    }

    #[test]
    fn test_builder() {
        let opts = GrayOptions::builder()
            .red_weight(0.3)
            .green_weight(0.5)
            .blue_weight(0.2)
            .build();
        assert_eq!(opts.red_weight, 0.3);
        assert_eq!(opts.green_weight, 0.5);
        assert_eq!(opts.blue_weight, 0.2);
    }

    #[test]
    fn test_missing_input() {
        let result = rgb_to_gray(
            Path::new("/nonexistent/page.png"),
            Path::new("/tmp/out.png"),
            &GrayOptions::default(),
        );
        assert!(matches!(result, Err(PrepError::ImageNotFound(_))));
    }
}
