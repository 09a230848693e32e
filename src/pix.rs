//! Safe ownership of Leptonica `PIX` handles.
//!
//! Every decoded image is held by a [`Pix`] that releases the underlying
//! buffer on drop, on every exit path. Operations that need the raw pointer
//! go through [`Pix::as_ptr`] and wrap returned pointers with
//! [`Pix::from_raw`], so no code path outside this module calls
//! `pixDestroy` by hand.

use std::ffi::{CStr, CString};
use std::path::Path;

use crate::error::{PrepError, Result};

/// Quality passed to `pixWriteImpliedFormat` when the output extension
/// implies JPEG. Ignored for lossless formats.
const WRITE_QUALITY: i32 = 100;

/// Bit depth of binarized images
pub const BINARY_DEPTH: u32 = 1;

/// Bit depth of grayscale images
pub const GRAYSCALE_DEPTH: u32 = 8;

/// Bit depth of color images as Leptonica decodes them (RGB is stored in
/// 32-bit words)
pub const COLOR_DEPTH: u32 = 32;

/// An owned Leptonica image handle
pub struct Pix {
    raw: *mut leptonica_sys::PIX,
}

impl Pix {
    /// Decode an image file. Leptonica infers the format from the file
    /// content, not the extension.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(PrepError::ImageNotFound(path.to_path_buf()));
        }
        let c_path = path_to_cstring(path)?;
        let raw = unsafe { leptonica_sys::pixRead(c_path.as_ptr()) };
        if raw.is_null() {
            return Err(PrepError::ReadFailed(path.to_path_buf()));
        }
        Ok(Self { raw })
    }

    /// Take ownership of a pointer returned by a Leptonica routine,
    /// reporting `LibraryFailed` for null.
    pub(crate) fn from_raw(raw: *mut leptonica_sys::PIX, op: &'static str) -> Result<Self> {
        if raw.is_null() {
            return Err(PrepError::LibraryFailed { op });
        }
        Ok(Self { raw })
    }

    pub(crate) fn as_ptr(&self) -> *mut leptonica_sys::PIX {
        self.raw
    }

    /// Bits per pixel: 1 binary, 8 grayscale, 32 color
    pub fn depth(&self) -> u32 {
        unsafe { leptonica_sys::pixGetDepth(self.raw) as u32 }
    }

    pub fn width(&self) -> u32 {
        unsafe { leptonica_sys::pixGetWidth(self.raw) as u32 }
    }

    pub fn height(&self) -> u32 {
        unsafe { leptonica_sys::pixGetHeight(self.raw) as u32 }
    }

    /// Enforce the exact bit depth a delegated routine requires
    pub fn expect_depth(&self, expected: u32) -> Result<()> {
        let actual = self.depth();
        if actual != expected {
            return Err(PrepError::UnsupportedDepth { expected, actual });
        }
        Ok(())
    }

    /// Write the image in the format implied by the output extension
    pub fn write_implied(&self, path: &Path) -> Result<()> {
        let c_path = path_to_cstring(path)?;
        let rc = unsafe {
            leptonica_sys::pixWriteImpliedFormat(c_path.as_ptr(), self.raw, WRITE_QUALITY, 0)
        };
        if rc != 0 {
            return Err(PrepError::WriteFailed(path.to_path_buf()));
        }
        Ok(())
    }
}

impl Drop for Pix {
    fn drop(&mut self) {
        unsafe { leptonica_sys::pixDestroy(&mut self.raw) };
    }
}

impl std::fmt::Debug for Pix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pix")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("depth", &self.depth())
            .finish()
    }
}

/// Version string of the linked Leptonica library
pub fn leptonica_version() -> String {
    unsafe {
        let raw = leptonica_sys::getLeptonicaVersion();
        if raw.is_null() {
            return String::from("unknown");
        }
        let version = CStr::from_ptr(raw).to_string_lossy().into_owned();
        leptonica_sys::lept_free(raw.cast());
        version
    }
}

fn path_to_cstring(path: &Path) -> Result<CString> {
    let s = path
        .to_str()
        .ok_or_else(|| PrepError::InvalidPath(path.to_path_buf()))?;
    CString::new(s).map_err(|_| PrepError::InvalidPath(path.to_path_buf()))
}
