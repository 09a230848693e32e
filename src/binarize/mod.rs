//! Binarization module
//!
//! Converts 8 bpp grayscale scans to black-and-white by delegating to
//! Leptonica's thresholding routines, sweeping a numeric parameter across a
//! closed range to produce one output image per value.
//!
//! Two algorithms are available:
//!
//! - **Sauvola** ([`sauvola_binarize`]) - local adaptive thresholding;
//!   the swept parameter is the statistics window half-size
//! - **Otsu** ([`otsu_binarize`]) - global thresholding after background
//!   normalization; the swept parameter is the normalization threshold
//!
//! Each output lands next to the requested output path with the parameter
//! value spliced in before the extension (`out.png` -> `out_10.png`).
//!
//! # Example
//!
//! ```rust,no_run
//! use scanprep::{otsu_binarize, OtsuOptions};
//! use std::path::Path;
//!
//! let options = OtsuOptions::builder()
//!     .bins(3)
//!     .min_thresh(10)
//!     .max_thresh(40)
//!     .build();
//!
//! let outcome = otsu_binarize(
//!     Path::new("page.png"),
//!     Path::new("out/page.png"),
//!     &options,
//! ).unwrap();
//!
//! assert_eq!(outcome.steps.len(), 3);
//! ```

mod otsu;
mod sauvola;
mod types;

pub use otsu::{otsu_binarize, otsu_binarize_with};
pub use sauvola::{sauvola_binarize, sauvola_binarize_with};
pub use types::{
    OtsuOptions, OtsuOptionsBuilder, SauvolaOptions, SauvolaOptionsBuilder, SweepOutcome,
    SweepRange, SweepStep, DEFAULT_BACKGROUND_VALUE, DEFAULT_BINS, DEFAULT_FACTOR,
    DEFAULT_MIN_COUNT, DEFAULT_SCORE_FRACTION, DEFAULT_SMOOTHING, DEFAULT_THRESHOLD,
    DEFAULT_WINDOW_SIZE, FALLBACK_TILE_SIZE, MIN_WINDOW_SIZE,
};

use std::path::Path;

use crate::error::Result;
use crate::pix::Pix;
use crate::util::parameterized_path;

/// One thresholding routine, invoked once per sweep value
pub(crate) trait ThresholdBinarizer {
    fn binarize_at(&self, src: &Pix, value: i32) -> Result<Pix>;
}

/// Drive a sweep: threshold the decoded input at every value and write each
/// result to its templated sibling path, reporting each written step.
///
/// The first failing step aborts the rest; outputs already written are left
/// in place.
pub(crate) fn run_sweep<B, F>(
    binarizer: &B,
    src: &Pix,
    output: &Path,
    range: SweepRange,
    on_step: &mut F,
) -> Result<SweepOutcome>
where
    B: ThresholdBinarizer,
    F: FnMut(&SweepStep),
{
    let mut steps = Vec::new();
    for value in range.values() {
        let result = binarizer.binarize_at(src, value)?;
        let step_path = parameterized_path(output, value)?;
        result.write_implied(&step_path)?;
        let step = SweepStep {
            value,
            path: step_path,
        };
        on_step(&step);
        steps.push(step);
    }
    Ok(SweepOutcome { steps })
}
