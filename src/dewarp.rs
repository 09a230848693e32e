//! Dewarp module
//!
//! Removes the page curvature and perspective distortion exhibited by
//! overhead or bound-book scans, delegating to Leptonica's
//! `dewarpSinglePage`. The disparity model is built from text lines, which
//! requires a binarized (1 bpp) input.

use std::path::{Path, PathBuf};
use std::ptr;

use crate::error::{PrepError, Result};
use crate::pix::{Pix, BINARY_DEPTH};

/// Options for single-page dewarping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DewarpOptions {
    /// Use adaptive thresholding when sampling text lines
    pub adaptive: bool,
    /// Apply horizontal disparity correction in addition to vertical
    pub use_both: bool,
}

impl Default for DewarpOptions {
    fn default() -> Self {
        Self {
            adaptive: true,
            use_both: true,
        }
    }
}

impl DewarpOptions {
    /// Create a new options builder
    pub fn builder() -> DewarpOptionsBuilder {
        DewarpOptionsBuilder::default()
    }
}

/// Builder for [`DewarpOptions`]
#[derive(Debug, Default)]
pub struct DewarpOptionsBuilder {
    options: DewarpOptions,
}

impl DewarpOptionsBuilder {
    /// Toggle adaptive thresholding
    #[must_use]
    pub fn adaptive(mut self, adaptive: bool) -> Self {
        self.options.adaptive = adaptive;
        self
    }

    /// Toggle horizontal disparity correction
    #[must_use]
    pub fn use_both(mut self, use_both: bool) -> Self {
        self.options.use_both = use_both;
        self
    }

    /// Build the options
    #[must_use]
    pub fn build(self) -> DewarpOptions {
        self.options
    }
}

/// Dewarp a single 1 bpp page.
///
/// Fails with [`PrepError::UnsupportedDepth`] unless the input is
/// binarized. Writes the corrected page to `output` in the format implied
/// by its extension and returns that path.
pub fn dewarp(input: &Path, output: &Path, options: &DewarpOptions) -> Result<PathBuf> {
    let src = Pix::read(input)?;
    src.expect_depth(BINARY_DEPTH)?;

    let mut out: *mut leptonica_sys::PIX = ptr::null_mut();
    let rc = unsafe {
        leptonica_sys::dewarpSinglePage(
            src.as_ptr(),
            0,
            options.adaptive as i32,
            options.use_both as i32,
            0,
            &mut out,
            ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        // The out-pix is not populated when the call fails
        return Err(PrepError::LibraryFailed {
            op: "dewarpSinglePage",
        });
    }
    let corrected = Pix::from_raw(out, "dewarpSinglePage")?;
    corrected.write_implied(output)?;

    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = DewarpOptions::default();
        assert!(opts.adaptive);
        assert!(opts.use_both);
    }

    #[test]
    fn test_builder() {
        let opts = DewarpOptions::builder()
            .adaptive(false)
            .use_both(false)
            .build();
        assert!(!opts.adaptive);
        assert!(!opts.use_both);
    }

    #[test]
    fn test_missing_input() {
        let result = dewarp(
            Path::new("/nonexistent/page.png"),
            Path::new("/tmp/out.png"),
            &DewarpOptions::default(),
        );
        assert!(matches!(result, Err(PrepError::ImageNotFound(_))));
    }
}
