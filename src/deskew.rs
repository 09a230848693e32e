//! Deskew (skew correction) module
//!
//! Detects and corrects the small-angle rotation introduced by scanning,
//! delegating to Leptonica's `pixFindSkewAndDeskew`. Accepts input of any
//! bit depth.
//!
//! # Example
//!
//! ```rust,no_run
//! use scanprep::{deskew, DeskewOptions};
//! use std::path::Path;
//!
//! let result = deskew(
//!     Path::new("scanned.png"),
//!     Path::new("straight.png"),
//!     &DeskewOptions::default(),
//! ).unwrap();
//!
//! println!("Corrected {:.2} degrees", result.angle);
//! ```

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pix::Pix;

/// Default reduction factor for the skew sweep search
pub const DEFAULT_REDUCTION: i32 = 4;

/// Options for skew detection and correction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskewOptions {
    /// Image reduction factor used during the sweep search (1, 2, 4 or 8);
    /// larger values are faster, smaller values more precise
    pub reduction: i32,
}

impl Default for DeskewOptions {
    fn default() -> Self {
        Self {
            reduction: DEFAULT_REDUCTION,
        }
    }
}

impl DeskewOptions {
    /// Create a new options builder
    pub fn builder() -> DeskewOptionsBuilder {
        DeskewOptionsBuilder::default()
    }
}

/// Builder for [`DeskewOptions`]
#[derive(Debug, Default)]
pub struct DeskewOptionsBuilder {
    options: DeskewOptions,
}

impl DeskewOptionsBuilder {
    /// Set the sweep search reduction factor
    #[must_use]
    pub fn reduction(mut self, reduction: i32) -> Self {
        self.options.reduction = reduction;
        self
    }

    /// Build the options
    #[must_use]
    pub fn build(self) -> DeskewOptions {
        self.options
    }
}

/// Deskew operation result
#[derive(Debug, Clone)]
pub struct DeskewResult {
    /// Detected skew angle in degrees (positive = clockwise)
    pub angle: f32,
    /// Detection confidence as the ratio of the peak score to its
    /// neighborhood; low values mean the page was left as-is
    pub confidence: f32,
    /// Path the corrected image was written to
    pub output_path: PathBuf,
}

/// Detect and correct page skew.
///
/// Reads `input` at any bit depth, rotates it by the detected angle and
/// writes the result to `output` in the format implied by its extension.
pub fn deskew(input: &Path, output: &Path, options: &DeskewOptions) -> Result<DeskewResult> {
    let src = Pix::read(input)?;

    let mut angle: f32 = 0.0;
    let mut confidence: f32 = 0.0;
    let raw = unsafe {
        leptonica_sys::pixFindSkewAndDeskew(
            src.as_ptr(),
            options.reduction,
            &mut angle,
            &mut confidence,
        )
    };
    let corrected = Pix::from_raw(raw, "pixFindSkewAndDeskew")?;
    corrected.write_implied(output)?;

    Ok(DeskewResult {
        angle,
        confidence,
        output_path: output.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrepError;

    #[test]
    fn test_default_options() {
        let opts = DeskewOptions::default();
        assert_eq!(opts.reduction, DEFAULT_REDUCTION);
    }

    #[test]
    fn test_builder() {
        let opts = DeskewOptions::builder().reduction(2).build();
        assert_eq!(opts.reduction, 2);
    }

    #[test]
    fn test_missing_input() {
        let result = deskew(
            Path::new("/nonexistent/page.png"),
            Path::new("/tmp/out.png"),
            &DeskewOptions::default(),
        );
        assert!(matches!(result, Err(PrepError::ImageNotFound(_))));
    }
}
