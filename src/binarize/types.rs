//! Binarization core types
//!
//! Sweep ranges, per-algorithm options and the sweep result structures.

use std::path::PathBuf;

use crate::error::{PrepError, Result};

// ============================================================
// Constants
// ============================================================

/// Default number of sweep bins (a single output)
pub const DEFAULT_BINS: i32 = 1;

/// Default Sauvola window half-size
pub const DEFAULT_WINDOW_SIZE: i32 = 10;

/// Smallest window half-size the Sauvola routine accepts
pub const MIN_WINDOW_SIZE: i32 = 2;

/// Default Sauvola threshold reduction factor
pub const DEFAULT_FACTOR: f32 = 0.3;

/// Default Otsu background normalization threshold
pub const DEFAULT_THRESHOLD: i32 = 100;

/// Default minimum foreground count per tile for background estimation
pub const DEFAULT_MIN_COUNT: i32 = 50;

/// Default target background value after normalization
pub const DEFAULT_BACKGROUND_VALUE: i32 = 255;

/// Default pre-threshold smoothing kernel half-width, both axes
pub const DEFAULT_SMOOTHING: i32 = 2;

/// Default fraction of the Otsu score allowed below the peak
pub const DEFAULT_SCORE_FRACTION: f32 = 0.1;

/// Tile size used when no tile count is given (width, height)
pub const FALLBACK_TILE_SIZE: (i32, i32) = (10, 15);

// ============================================================
// Sweep range
// ============================================================

/// Evenly spaced integer parameter values over a closed range.
///
/// The sequence starts at `min` and steps by `(max - min) / bins` (integer
/// division), continuing while the running value stays strictly below
/// `max`. A degenerate range with `min == max` yields exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepRange {
    bins: i32,
    min: i32,
    max: i32,
}

impl SweepRange {
    /// Validate and build a sweep range.
    ///
    /// Rejects `bins < 1`, `min > max`, and non-degenerate ranges whose
    /// step rounds to zero (which would never reach `max`).
    pub fn new(bins: i32, min: i32, max: i32) -> Result<Self> {
        if bins < 1 {
            return Err(PrepError::InvalidParameters(format!(
                "bin count must be at least 1, got {bins}"
            )));
        }
        if min > max {
            return Err(PrepError::InvalidParameters(format!(
                "range minimum {min} exceeds maximum {max}"
            )));
        }
        if min < max && (max - min) / bins == 0 {
            return Err(PrepError::InvalidParameters(format!(
                "step for range {min}..{max} over {bins} bins rounds to zero"
            )));
        }
        Ok(Self { bins, min, max })
    }

    pub fn bins(&self) -> i32 {
        self.bins
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Distance between consecutive sweep values
    pub fn step(&self) -> i32 {
        (self.max - self.min) / self.bins
    }

    /// Expand the range into its sweep values.
    ///
    /// Always yields at least one value: a `min == max` range produces
    /// `[min]`.
    pub fn values(&self) -> Vec<i32> {
        let step = self.step();
        let mut values = Vec::new();
        let mut v = self.min;
        loop {
            values.push(v);
            v += step;
            if v >= self.max {
                break;
            }
        }
        values
    }
}

// ============================================================
// Options
// ============================================================

/// Options for Sauvola binarization.
///
/// The window half-size is the swept parameter: local statistics are
/// computed over a window of twice this size.
#[derive(Debug, Clone, PartialEq)]
pub struct SauvolaOptions {
    /// Number of sweep bins
    pub bins: i32,
    /// Smallest window half-size
    pub min_window: i32,
    /// Largest window half-size
    pub max_window: i32,
    /// Threshold reduction factor due to local variance, `0.0 <= f < 1.0`
    pub factor: f32,
}

impl Default for SauvolaOptions {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            min_window: DEFAULT_WINDOW_SIZE,
            max_window: DEFAULT_WINDOW_SIZE,
            factor: DEFAULT_FACTOR,
        }
    }
}

impl SauvolaOptions {
    /// Create a new options builder
    pub fn builder() -> SauvolaOptionsBuilder {
        SauvolaOptionsBuilder::default()
    }

    /// Check parameter bounds and produce the window sweep range.
    ///
    /// Runs before the input file is opened.
    pub fn validate(&self) -> Result<SweepRange> {
        if self.min_window < MIN_WINDOW_SIZE {
            return Err(PrepError::InvalidParameters(format!(
                "window half-size must be at least {MIN_WINDOW_SIZE}, got {}",
                self.min_window
            )));
        }
        if !(0.0..1.0).contains(&self.factor) {
            return Err(PrepError::InvalidParameters(format!(
                "factor must be in [0, 1), got {}",
                self.factor
            )));
        }
        SweepRange::new(self.bins, self.min_window, self.max_window)
    }
}

/// Builder for [`SauvolaOptions`]
#[derive(Debug, Default)]
pub struct SauvolaOptionsBuilder {
    options: SauvolaOptions,
}

impl SauvolaOptionsBuilder {
    /// Set the number of sweep bins
    #[must_use]
    pub fn bins(mut self, bins: i32) -> Self {
        self.options.bins = bins;
        self
    }

    /// Set the smallest window half-size
    #[must_use]
    pub fn min_window(mut self, size: i32) -> Self {
        self.options.min_window = size;
        self
    }

    /// Set the largest window half-size
    #[must_use]
    pub fn max_window(mut self, size: i32) -> Self {
        self.options.max_window = size;
        self
    }

    /// Set the threshold reduction factor
    #[must_use]
    pub fn factor(mut self, factor: f32) -> Self {
        self.options.factor = factor;
        self
    }

    /// Build the options
    #[must_use]
    pub fn build(self) -> SauvolaOptions {
        self.options
    }
}

/// Options for background-normalized Otsu binarization.
///
/// The normalization threshold is the swept parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct OtsuOptions {
    /// Number of sweep bins
    pub bins: i32,
    /// Tiles per image axis; `0` selects the fixed fallback tile size
    pub tiles: i32,
    /// Smallest normalization threshold
    pub min_thresh: i32,
    /// Largest normalization threshold
    pub max_thresh: i32,
    /// Minimum foreground count per tile for background estimation
    pub min_count: i32,
    /// Target background value after normalization
    pub background_value: i32,
    /// Horizontal smoothing kernel half-width
    pub smooth_x: i32,
    /// Vertical smoothing kernel half-width
    pub smooth_y: i32,
    /// Fraction of the Otsu score allowed below the peak
    pub score_fraction: f32,
}

impl Default for OtsuOptions {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            tiles: 0,
            min_thresh: DEFAULT_THRESHOLD,
            max_thresh: DEFAULT_THRESHOLD,
            min_count: DEFAULT_MIN_COUNT,
            background_value: DEFAULT_BACKGROUND_VALUE,
            smooth_x: DEFAULT_SMOOTHING,
            smooth_y: DEFAULT_SMOOTHING,
            score_fraction: DEFAULT_SCORE_FRACTION,
        }
    }
}

impl OtsuOptions {
    /// Create a new options builder
    pub fn builder() -> OtsuOptionsBuilder {
        OtsuOptionsBuilder::default()
    }

    /// Check parameter bounds and produce the threshold sweep range.
    ///
    /// Runs before the input file is opened.
    pub fn validate(&self) -> Result<SweepRange> {
        if self.tiles < 0 {
            return Err(PrepError::InvalidParameters(format!(
                "tile count must not be negative, got {}",
                self.tiles
            )));
        }
        SweepRange::new(self.bins, self.min_thresh, self.max_thresh)
    }

    /// Tile dimensions for the background normalization
    pub(crate) fn tile_geometry(&self, width: u32, height: u32) -> (i32, i32) {
        if self.tiles > 0 {
            (width as i32 / self.tiles, height as i32 / self.tiles)
        } else {
            FALLBACK_TILE_SIZE
        }
    }
}

/// Builder for [`OtsuOptions`]
#[derive(Debug, Default)]
pub struct OtsuOptionsBuilder {
    options: OtsuOptions,
}

impl OtsuOptionsBuilder {
    /// Set the number of sweep bins
    #[must_use]
    pub fn bins(mut self, bins: i32) -> Self {
        self.options.bins = bins;
        self
    }

    /// Set the tiles per image axis
    #[must_use]
    pub fn tiles(mut self, tiles: i32) -> Self {
        self.options.tiles = tiles;
        self
    }

    /// Set the smallest normalization threshold
    #[must_use]
    pub fn min_thresh(mut self, thresh: i32) -> Self {
        self.options.min_thresh = thresh;
        self
    }

    /// Set the largest normalization threshold
    #[must_use]
    pub fn max_thresh(mut self, thresh: i32) -> Self {
        self.options.max_thresh = thresh;
        self
    }

    /// Set the minimum foreground count per tile
    #[must_use]
    pub fn min_count(mut self, count: i32) -> Self {
        self.options.min_count = count;
        self
    }

    /// Set the target background value
    #[must_use]
    pub fn background_value(mut self, value: i32) -> Self {
        self.options.background_value = value;
        self
    }

    /// Set the horizontal smoothing half-width
    #[must_use]
    pub fn smooth_x(mut self, half_width: i32) -> Self {
        self.options.smooth_x = half_width;
        self
    }

    /// Set the vertical smoothing half-width
    #[must_use]
    pub fn smooth_y(mut self, half_width: i32) -> Self {
        self.options.smooth_y = half_width;
        self
    }

    /// Set the Otsu score fraction
    #[must_use]
    pub fn score_fraction(mut self, fraction: f32) -> Self {
        self.options.score_fraction = fraction;
        self
    }

    /// Build the options
    #[must_use]
    pub fn build(self) -> OtsuOptions {
        self.options
    }
}

// ============================================================
// Results
// ============================================================

/// One written sweep output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepStep {
    /// Parameter value this output was produced at
    pub value: i32,
    /// Path the output was written to
    pub path: PathBuf,
}

/// Result of a completed sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOutcome {
    /// Written outputs, in sweep order
    pub steps: Vec<SweepStep>,
}

impl SweepOutcome {
    /// Paths of all written outputs, in sweep order
    pub fn paths(&self) -> Vec<&PathBuf> {
        self.steps.iter().map(|s| &s.path).collect()
    }
}
