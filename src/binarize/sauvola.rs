//! Sauvola adaptive binarization via `pixSauvolaBinarize`.

use std::path::Path;
use std::ptr;

use crate::error::{PrepError, Result};
use crate::pix::{Pix, GRAYSCALE_DEPTH};

use super::types::{SauvolaOptions, SweepOutcome, SweepStep};
use super::{run_sweep, ThresholdBinarizer};

/// Binarize an 8 bpp grayscale image with Sauvola local thresholding,
/// sweeping the statistics window half-size over the configured range.
///
/// Writes one 1 bpp image per sweep value; pick an output format capable of
/// 1 bpp (PNG or TIFF, not JPEG). Parameters are validated before the input
/// file is opened.
pub fn sauvola_binarize(
    input: &Path,
    output: &Path,
    options: &SauvolaOptions,
) -> Result<SweepOutcome> {
    sauvola_binarize_with(input, output, options, |_| {})
}

/// Like [`sauvola_binarize`], reporting each written step to `on_step`
pub fn sauvola_binarize_with<F>(
    input: &Path,
    output: &Path,
    options: &SauvolaOptions,
    mut on_step: F,
) -> Result<SweepOutcome>
where
    F: FnMut(&SweepStep),
{
    let range = options.validate()?;
    let src = Pix::read(input)?;
    src.expect_depth(GRAYSCALE_DEPTH)?;
    run_sweep(
        &SauvolaBinarizer {
            factor: options.factor,
        },
        &src,
        output,
        range,
        &mut on_step,
    )
}

struct SauvolaBinarizer {
    factor: f32,
}

impl ThresholdBinarizer for SauvolaBinarizer {
    fn binarize_at(&self, src: &Pix, window: i32) -> Result<Pix> {
        let mut out: *mut leptonica_sys::PIX = ptr::null_mut();
        let rc = unsafe {
            leptonica_sys::pixSauvolaBinarize(
                src.as_ptr(),
                window,
                self.factor,
                0,
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                &mut out,
            )
        };
        if rc != 0 {
            return Err(PrepError::LibraryFailed {
                op: "pixSauvolaBinarize",
            });
        }
        Pix::from_raw(out, "pixSauvolaBinarize")
    }
}
