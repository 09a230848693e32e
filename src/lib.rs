//! scanprep - Document image preprocessing for scanned pages
//!
//! A thin, safe layer over Leptonica's document image routines, exposing
//! the preprocessing steps an OCR pipeline runs before recognition.
//!
//! # Features
//!
//! - **Deskew** ([`deskew`]) - Correct small-angle scan tilt
//! - **Dewarp** ([`dewarp`]) - Correct page curvature of bound-book scans
//! - **Grayscale** ([`grayscale`]) - Convert color scans to 8 bpp gray
//! - **Binarization** ([`binarize`]) - Sauvola and Otsu thresholding,
//!   swept across a parameter range to produce one output per value
//!
//! All image decoding, processing and encoding is delegated to Leptonica;
//! this crate contributes parameter validation, output-path templating,
//! the parameter sweep, and RAII ownership of the image handles
//! ([`pix::Pix`]).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scanprep::{deskew, DeskewOptions};
//! use std::path::Path;
//!
//! let result = deskew(
//!     Path::new("scan.png"),
//!     Path::new("straight.png"),
//!     &DeskewOptions::default(),
//! ).unwrap();
//! println!("Corrected {:.2} degrees", result.angle);
//! ```
//!
//! ## Sweeping a binarization parameter
//!
//! ```rust,no_run
//! use scanprep::{sauvola_binarize, SauvolaOptions};
//! use std::path::Path;
//!
//! // Windows 10, 20, 30 -> page_10.png, page_20.png, page_30.png
//! let options = SauvolaOptions::builder()
//!     .bins(3)
//!     .min_window(10)
//!     .max_window(40)
//!     .build();
//! sauvola_binarize(Path::new("gray.png"), Path::new("page.png"), &options).unwrap();
//! ```
//!
//! Operations are synchronous and blocking; each one reads its input,
//! delegates, writes its output(s) and returns. Any failure aborts the
//! operation with every acquired image handle released.

pub mod binarize;
pub mod cli;
pub mod config;
pub mod deskew;
pub mod dewarp;
pub mod error;
pub mod grayscale;
pub mod pix;
pub mod util;

// Re-exports for convenience
pub use binarize::{
    otsu_binarize, otsu_binarize_with, sauvola_binarize, sauvola_binarize_with, OtsuOptions,
    OtsuOptionsBuilder, SauvolaOptions, SauvolaOptionsBuilder, SweepOutcome, SweepRange, SweepStep,
};
pub use cli::{create_spinner, create_sweep_progress_bar, Cli, Commands, ExitCode};
pub use config::{Config, ConfigError};
pub use deskew::{deskew, DeskewOptions, DeskewOptionsBuilder, DeskewResult};
pub use dewarp::{dewarp, DewarpOptions, DewarpOptionsBuilder};
pub use error::{PrepError, Result};
pub use grayscale::{rgb_to_gray, GrayOptions, GrayOptionsBuilder};
pub use pix::{leptonica_version, Pix, BINARY_DEPTH, COLOR_DEPTH, GRAYSCALE_DEPTH};
pub use util::parameterized_path;
