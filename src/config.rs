//! Configuration file support for scanprep
//!
//! Supports TOML configuration files with the following search order:
//! 1. `--config <path>` - explicitly specified path
//! 2. `./scanprep.toml` - current directory
//! 3. Default values
//!
//! Command-line arguments always take precedence over file values.
//!
//! # Example Configuration
//!
//! ```toml
//! [deskew]
//! reduction = 4
//!
//! [sauvola]
//! bins = 3
//! min_window = 10
//! max_window = 40
//! factor = 0.3
//!
//! [otsu]
//! bins = 3
//! min_thresh = 10
//! max_thresh = 40
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::binarize::{OtsuOptions, SauvolaOptions};
use crate::cli::{DeskewArgs, DewarpArgs, GrayArgs, OtsuArgs, SauvolaArgs};
use crate::deskew::DeskewOptions;
use crate::dewarp::DewarpOptions;
use crate::grayscale::GrayOptions;

/// File name searched in the working directory
pub const CONFIG_FILE_NAME: &str = "scanprep.toml";

/// Configuration file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// File not found
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Deskew defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeskewSection {
    /// Sweep search reduction factor
    #[serde(default)]
    pub reduction: Option<i32>,
}

/// Dewarp defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DewarpSection {
    /// Adaptive thresholding of text line samples
    #[serde(default)]
    pub adaptive: Option<bool>,

    /// Apply horizontal disparity correction too
    #[serde(default)]
    pub use_both: Option<bool>,
}

/// Grayscale conversion defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraySection {
    #[serde(default)]
    pub red_weight: Option<f32>,

    #[serde(default)]
    pub green_weight: Option<f32>,

    #[serde(default)]
    pub blue_weight: Option<f32>,
}

/// Sauvola binarization defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SauvolaSection {
    #[serde(default)]
    pub bins: Option<i32>,

    #[serde(default)]
    pub min_window: Option<i32>,

    #[serde(default)]
    pub max_window: Option<i32>,

    #[serde(default)]
    pub factor: Option<f32>,
}

/// Otsu binarization defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OtsuSection {
    #[serde(default)]
    pub bins: Option<i32>,

    #[serde(default)]
    pub tiles: Option<i32>,

    #[serde(default)]
    pub min_thresh: Option<i32>,

    #[serde(default)]
    pub max_thresh: Option<i32>,

    #[serde(default)]
    pub min_count: Option<i32>,

    #[serde(default)]
    pub background: Option<i32>,

    #[serde(default)]
    pub smooth_x: Option<i32>,

    #[serde(default)]
    pub smooth_y: Option<i32>,
}

/// Per-operation defaults loaded from a TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub deskew: DeskewSection,

    #[serde(default)]
    pub dewarp: DewarpSection,

    #[serde(default)]
    pub gray: GraySection,

    #[serde(default)]
    pub sauvola: SauvolaSection,

    #[serde(default)]
    pub otsu: OtsuSection,
}

impl Config {
    /// Load from an explicit path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `./scanprep.toml` when present, else defaults
    pub fn load() -> Result<Self, ConfigError> {
        let local = Path::new(CONFIG_FILE_NAME);
        if local.exists() {
            Self::load_from_path(local)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve deskew options: CLI over config over defaults
    pub fn deskew_options(&self, cli: &DeskewArgs) -> DeskewOptions {
        let defaults = DeskewOptions::default();
        DeskewOptions {
            reduction: cli
                .reduction
                .or(self.deskew.reduction)
                .unwrap_or(defaults.reduction),
        }
    }

    /// Resolve dewarp options: CLI flags over config over defaults
    pub fn dewarp_options(&self, cli: &DewarpArgs) -> DewarpOptions {
        let defaults = DewarpOptions::default();
        DewarpOptions {
            adaptive: if cli.no_adaptive {
                false
            } else {
                self.dewarp.adaptive.unwrap_or(defaults.adaptive)
            },
            use_both: if cli.vertical_only {
                false
            } else {
                self.dewarp.use_both.unwrap_or(defaults.use_both)
            },
        }
    }

    /// Resolve grayscale options: CLI over config over defaults
    pub fn gray_options(&self, cli: &GrayArgs) -> GrayOptions {
        let defaults = GrayOptions::default();
        GrayOptions {
            red_weight: cli
                .red_weight
                .or(self.gray.red_weight)
                .unwrap_or(defaults.red_weight),
            green_weight: cli
                .green_weight
                .or(self.gray.green_weight)
                .unwrap_or(defaults.green_weight),
            blue_weight: cli
                .blue_weight
                .or(self.gray.blue_weight)
                .unwrap_or(defaults.blue_weight),
        }
    }

    /// Resolve Sauvola options: CLI over config over defaults
    pub fn sauvola_options(&self, cli: &SauvolaArgs) -> SauvolaOptions {
        let defaults = SauvolaOptions::default();
        SauvolaOptions {
            bins: cli.bins.or(self.sauvola.bins).unwrap_or(defaults.bins),
            min_window: cli
                .min_window
                .or(self.sauvola.min_window)
                .unwrap_or(defaults.min_window),
            max_window: cli
                .max_window
                .or(self.sauvola.max_window)
                .unwrap_or(defaults.max_window),
            factor: cli
                .factor
                .or(self.sauvola.factor)
                .unwrap_or(defaults.factor),
        }
    }

    /// Resolve Otsu options: CLI over config over defaults
    pub fn otsu_options(&self, cli: &OtsuArgs) -> OtsuOptions {
        let defaults = OtsuOptions::default();
        OtsuOptions {
            bins: cli.bins.or(self.otsu.bins).unwrap_or(defaults.bins),
            tiles: cli.tiles.or(self.otsu.tiles).unwrap_or(defaults.tiles),
            min_thresh: cli
                .min_thresh
                .or(self.otsu.min_thresh)
                .unwrap_or(defaults.min_thresh),
            max_thresh: cli
                .max_thresh
                .or(self.otsu.max_thresh)
                .unwrap_or(defaults.max_thresh),
            min_count: cli
                .min_count
                .or(self.otsu.min_count)
                .unwrap_or(defaults.min_count),
            background_value: cli
                .background
                .or(self.otsu.background)
                .unwrap_or(defaults.background_value),
            smooth_x: cli
                .smooth_x
                .or(self.otsu.smooth_x)
                .unwrap_or(defaults.smooth_x),
            smooth_y: cli
                .smooth_y
                .or(self.otsu.smooth_y)
                .unwrap_or(defaults.smooth_y),
            score_fraction: defaults.score_fraction,
        }
    }
}
