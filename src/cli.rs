//! CLI interface module
//!
//! Provides command-line interface using clap derive macros.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::error::PrepError;

/// Exit codes for the CLI
///
/// These codes follow standard Unix conventions and give scripts a stable
/// mapping of the error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed
    Success = 0,
    /// Uncategorized error
    GeneralError = 1,
    /// Invalid arguments or parameter ranges
    InvalidArgs = 2,
    /// Input file missing or undecodable
    InputNotFound = 3,
    /// Output could not be written
    OutputError = 4,
    /// Input bit depth not accepted by the operation
    UnsupportedInput = 5,
    /// The delegated Leptonica routine failed
    LibraryError = 6,
}

impl ExitCode {
    /// Convert to process exit code
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Get human-readable description
    pub fn description(self) -> &'static str {
        match self {
            ExitCode::Success => "Success",
            ExitCode::GeneralError => "General error",
            ExitCode::InvalidArgs => "Invalid arguments",
            ExitCode::InputNotFound => "Input file not found or not decodable",
            ExitCode::OutputError => "Output error (permission denied, disk full, etc.)",
            ExitCode::UnsupportedInput => "Unsupported input bit depth",
            ExitCode::LibraryError => "Leptonica operation failed",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.code()
    }
}

impl From<&PrepError> for ExitCode {
    fn from(err: &PrepError) -> Self {
        match err {
            PrepError::InvalidParameters(_)
            | PrepError::MissingExtension(_)
            | PrepError::InvalidPath(_) => ExitCode::InvalidArgs,
            PrepError::ImageNotFound(_) | PrepError::ReadFailed(_) => ExitCode::InputNotFound,
            PrepError::WriteFailed(_) | PrepError::Io(_) => ExitCode::OutputError,
            PrepError::UnsupportedDepth { .. } => ExitCode::UnsupportedInput,
            PrepError::LibraryFailed { .. } => ExitCode::LibraryError,
        }
    }
}

/// Document image preprocessing for scans, backed by Leptonica
#[derive(Parser, Debug)]
#[command(name = "scanprep")]
#[command(version)]
#[command(about = "Document image preprocessing for scans", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (default: ./scanprep.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Correct page skew (any input depth)
    Deskew(DeskewArgs),
    /// Correct page curvature (1 bpp input)
    Dewarp(DewarpArgs),
    /// Convert color input to 8 bpp grayscale
    Gray(GrayArgs),
    /// Sauvola adaptive binarization sweep (8 bpp input)
    Sauvola(SauvolaArgs),
    /// Background-normalized Otsu binarization sweep (8 bpp input)
    Otsu(OtsuArgs),
    /// Show tool and library information
    Info,
}

/// Arguments for the deskew command
#[derive(clap::Args, Debug)]
pub struct DeskewArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image; format implied by the extension
    pub output: PathBuf,

    /// Reduction factor for the sweep search (1, 2, 4 or 8)
    #[arg(long)]
    pub reduction: Option<i32>,
}

/// Arguments for the dewarp command
#[derive(clap::Args, Debug)]
pub struct DewarpArgs {
    /// Input image (must be 1 bpp)
    pub input: PathBuf,

    /// Output image; format implied by the extension
    pub output: PathBuf,

    /// Disable adaptive thresholding of text line samples
    #[arg(long = "no-adaptive")]
    pub no_adaptive: bool,

    /// Apply only vertical disparity correction
    #[arg(long = "vertical-only")]
    pub vertical_only: bool,
}

/// Arguments for the gray command
#[derive(clap::Args, Debug)]
pub struct GrayArgs {
    /// Input image (must be 32 bpp color)
    pub input: PathBuf,

    /// Output image; format implied by the extension
    pub output: PathBuf,

    /// Red channel weight (0 selects the library default)
    #[arg(long)]
    pub red_weight: Option<f32>,

    /// Green channel weight (0 selects the library default)
    #[arg(long)]
    pub green_weight: Option<f32>,

    /// Blue channel weight (0 selects the library default)
    #[arg(long)]
    pub blue_weight: Option<f32>,
}

/// Arguments for the sauvola command
#[derive(clap::Args, Debug)]
pub struct SauvolaArgs {
    /// Input image (must be 8 bpp grayscale)
    pub input: PathBuf,

    /// Output base path; `_<window>` is inserted before the extension
    pub output: PathBuf,

    /// Number of sweep bins
    #[arg(long)]
    pub bins: Option<i32>,

    /// Smallest window half-size
    #[arg(long)]
    pub min_window: Option<i32>,

    /// Largest window half-size
    #[arg(long)]
    pub max_window: Option<i32>,

    /// Threshold reduction factor, 0.0 <= f < 1.0
    #[arg(long)]
    pub factor: Option<f32>,
}

/// Arguments for the otsu command
#[derive(clap::Args, Debug)]
pub struct OtsuArgs {
    /// Input image (must be 8 bpp grayscale)
    pub input: PathBuf,

    /// Output base path; `_<threshold>` is inserted before the extension
    pub output: PathBuf,

    /// Number of sweep bins
    #[arg(long)]
    pub bins: Option<i32>,

    /// Tiles per image axis (0 selects a fixed tile size)
    #[arg(long)]
    pub tiles: Option<i32>,

    /// Smallest background normalization threshold
    #[arg(long)]
    pub min_thresh: Option<i32>,

    /// Largest background normalization threshold
    #[arg(long)]
    pub max_thresh: Option<i32>,

    /// Minimum foreground count per tile
    #[arg(long)]
    pub min_count: Option<i32>,

    /// Target background value after normalization
    #[arg(long)]
    pub background: Option<i32>,

    /// Horizontal smoothing kernel half-width
    #[arg(long)]
    pub smooth_x: Option<i32>,

    /// Vertical smoothing kernel half-width
    #[arg(long)]
    pub smooth_y: Option<i32>,
}

/// Create a styled progress bar for sweep steps
pub fn create_sweep_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    pb
}

/// Create a spinner for single-shot operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_display() {
        let mut cmd = Cli::command();
        let help = cmd.render_help().to_string();
        assert!(help.contains("scanprep"));
        assert!(help.contains("deskew"));
        assert!(help.contains("sauvola"));
        assert!(help.contains("otsu"));
    }

    #[test]
    fn test_missing_output_error() {
        let result = Cli::try_parse_from(["scanprep", "deskew", "in.png"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("required"));
    }

    #[test]
    fn test_deskew_parsing() {
        let cli =
            Cli::try_parse_from(["scanprep", "deskew", "in.png", "out.png", "--reduction", "2"])
                .unwrap();
        if let Commands::Deskew(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("in.png"));
            assert_eq!(args.output, PathBuf::from("out.png"));
            assert_eq!(args.reduction, Some(2));
        } else {
            panic!("Expected Deskew command");
        }
    }

    #[test]
    fn test_otsu_parsing() {
        let cli = Cli::try_parse_from([
            "scanprep",
            "otsu",
            "in.png",
            "out.png",
            "--bins",
            "3",
            "--min-thresh",
            "10",
            "--max-thresh",
            "40",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        if let Commands::Otsu(args) = cli.command {
            assert_eq!(args.bins, Some(3));
            assert_eq!(args.min_thresh, Some(10));
            assert_eq!(args.max_thresh, Some(40));
            assert_eq!(args.tiles, None);
        } else {
            panic!("Expected Otsu command");
        }
    }

    #[test]
    fn test_sauvola_defaults_unset() {
        let cli = Cli::try_parse_from(["scanprep", "sauvola", "in.png", "out.png"]).unwrap();
        if let Commands::Sauvola(args) = cli.command {
            assert_eq!(args.bins, None);
            assert_eq!(args.min_window, None);
            assert_eq!(args.max_window, None);
            assert_eq!(args.factor, None);
        } else {
            panic!("Expected Sauvola command");
        }
    }

    #[test]
    fn test_dewarp_flags() {
        let cli = Cli::try_parse_from([
            "scanprep",
            "dewarp",
            "in.png",
            "out.png",
            "--no-adaptive",
            "--vertical-only",
        ])
        .unwrap();
        if let Commands::Dewarp(args) = cli.command {
            assert!(args.no_adaptive);
            assert!(args.vertical_only);
        } else {
            panic!("Expected Dewarp command");
        }
    }

    #[test]
    fn test_info_command() {
        let cli = Cli::try_parse_from(["scanprep", "info"]).unwrap();
        assert!(matches!(cli.command, Commands::Info));
    }

    #[test]
    fn test_global_flags() {
        let cli =
            Cli::try_parse_from(["scanprep", "gray", "in.png", "out.png", "-vv", "--quiet"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::GeneralError.code(), 1);
        assert_eq!(ExitCode::InvalidArgs.code(), 2);
        assert_eq!(ExitCode::InputNotFound.code(), 3);
        assert_eq!(ExitCode::OutputError.code(), 4);
        assert_eq!(ExitCode::UnsupportedInput.code(), 5);
        assert_eq!(ExitCode::LibraryError.code(), 6);
    }

    #[test]
    fn test_exit_code_descriptions() {
        assert_eq!(ExitCode::Success.description(), "Success");
        assert!(!ExitCode::InvalidArgs.description().is_empty());
        assert!(!ExitCode::UnsupportedInput.description().is_empty());
        assert!(!ExitCode::LibraryError.description().is_empty());
    }

    #[test]
    fn test_error_to_exit_code_mapping() {
        use std::path::PathBuf;

        let cases: Vec<(PrepError, ExitCode)> = vec![
            (
                PrepError::InvalidParameters("bad".into()),
                ExitCode::InvalidArgs,
            ),
            (
                PrepError::MissingExtension(PathBuf::from("out")),
                ExitCode::InvalidArgs,
            ),
            (
                PrepError::ImageNotFound(PathBuf::from("in.png")),
                ExitCode::InputNotFound,
            ),
            (
                PrepError::ReadFailed(PathBuf::from("in.png")),
                ExitCode::InputNotFound,
            ),
            (
                PrepError::WriteFailed(PathBuf::from("out.png")),
                ExitCode::OutputError,
            ),
            (
                PrepError::UnsupportedDepth {
                    expected: 8,
                    actual: 32,
                },
                ExitCode::UnsupportedInput,
            ),
            (
                PrepError::LibraryFailed { op: "pixRead" },
                ExitCode::LibraryError,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ExitCode::from(&err), expected, "wrong code for {err}");
        }
    }

    #[test]
    fn test_progress_bar_helpers() {
        let pb = create_sweep_progress_bar(3);
        assert_eq!(pb.length(), Some(3));
        pb.set_position(2);
        assert_eq!(pb.position(), 2);
        pb.finish_with_message("done");

        let spinner = create_spinner("Deskewing...");
        assert_eq!(spinner.message(), "Deskewing...");
        spinner.finish_with_message("Complete");
    }
}
