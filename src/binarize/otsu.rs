//! Otsu binarization on a normalized background via
//! `pixOtsuThreshOnBackgroundNorm`.

use std::path::Path;
use std::ptr;

use crate::error::Result;
use crate::pix::{Pix, GRAYSCALE_DEPTH};

use super::types::{OtsuOptions, SweepOutcome, SweepStep};
use super::{run_sweep, ThresholdBinarizer};

/// Binarize an 8 bpp grayscale image by normalizing the background and
/// applying Otsu thresholding, sweeping the normalization threshold over
/// the configured range.
///
/// Each 1 bpp result is widened to 8 bpp before writing, so any output
/// format works. Parameters are validated before the input file is opened.
pub fn otsu_binarize(input: &Path, output: &Path, options: &OtsuOptions) -> Result<SweepOutcome> {
    otsu_binarize_with(input, output, options, |_| {})
}

/// Like [`otsu_binarize`], reporting each written step to `on_step`
pub fn otsu_binarize_with<F>(
    input: &Path,
    output: &Path,
    options: &OtsuOptions,
    mut on_step: F,
) -> Result<SweepOutcome>
where
    F: FnMut(&SweepStep),
{
    let range = options.validate()?;
    let src = Pix::read(input)?;
    src.expect_depth(GRAYSCALE_DEPTH)?;
    run_sweep(&OtsuBinarizer { options }, &src, output, range, &mut on_step)
}

struct OtsuBinarizer<'a> {
    options: &'a OtsuOptions,
}

impl ThresholdBinarizer for OtsuBinarizer<'_> {
    fn binarize_at(&self, src: &Pix, thresh: i32) -> Result<Pix> {
        let (sx, sy) = self.options.tile_geometry(src.width(), src.height());
        let raw = unsafe {
            leptonica_sys::pixOtsuThreshOnBackgroundNorm(
                src.as_ptr(),
                ptr::null_mut(),
                sx,
                sy,
                thresh,
                self.options.min_count,
                self.options.background_value,
                self.options.smooth_x,
                self.options.smooth_y,
                self.options.score_fraction,
                ptr::null_mut(),
            )
        };
        let binary = Pix::from_raw(raw, "pixOtsuThreshOnBackgroundNorm")?;

        // JPEG and friends cannot hold 1 bpp; widen before writing
        let widened =
            unsafe { leptonica_sys::pixConvert1To8(ptr::null_mut(), binary.as_ptr(), 255, 0) };
        Pix::from_raw(widened, "pixConvert1To8")
    }
}
