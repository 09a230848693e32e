//! Library-level tests for the preprocessing operations
//!
//! Exercises the public API against fixtures generated at test time.

mod common;

use common::{write_color_page, write_gray_page};
use scanprep::{
    deskew, dewarp, otsu_binarize, rgb_to_gray, sauvola_binarize, DeskewOptions, DewarpOptions,
    GrayOptions, OtsuOptions, Pix, PrepError, SauvolaOptions, GRAYSCALE_DEPTH,
};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_otsu_sweep_values_and_paths() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.png");
    let output = dir.path().join("bin.png");
    write_gray_page(&input);

    let options = OtsuOptions::builder()
        .bins(3)
        .min_thresh(100)
        .max_thresh(160)
        .build();
    let outcome = otsu_binarize(&input, &output, &options).unwrap();

    let values: Vec<i32> = outcome.steps.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![100, 120, 140]);

    for step in &outcome.steps {
        assert!(step.path.is_file(), "missing {}", step.path.display());
        assert_eq!(step.path.parent(), output.parent());
    }
    assert_eq!(
        outcome.steps[0].path.file_name().unwrap(),
        "bin_100.png"
    );
}

#[test]
fn test_otsu_output_is_grayscale_black_and_white() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.png");
    let output = dir.path().join("bin.png");
    write_gray_page(&input);

    let outcome = otsu_binarize(&input, &output, &OtsuOptions::default()).unwrap();

    // Results are widened to 8 bpp before writing
    let written = Pix::read(&outcome.steps[0].path).unwrap();
    assert_eq!(written.depth(), GRAYSCALE_DEPTH);
}

#[test]
fn test_otsu_degenerate_range_single_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.png");
    let output = dir.path().join("bin.png");
    write_gray_page(&input);

    let outcome = otsu_binarize(&input, &output, &OtsuOptions::default()).unwrap();
    assert_eq!(outcome.steps.len(), 1);
    assert_eq!(outcome.steps[0].value, 100);
}

#[test]
fn test_otsu_invalid_range_skips_input_read() {
    let options = OtsuOptions::builder()
        .min_thresh(200)
        .max_thresh(100)
        .build();
    // The input does not exist: validation must fail before any read
    let result = otsu_binarize(
        Path::new("/nonexistent/page.png"),
        Path::new("/tmp/out.png"),
        &options,
    );
    assert!(matches!(result, Err(PrepError::InvalidParameters(_))));
}

#[test]
fn test_otsu_rejects_color_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("color.png");
    write_color_page(&input);

    let result = otsu_binarize(&input, &dir.path().join("out.png"), &OtsuOptions::default());
    assert!(matches!(
        result,
        Err(PrepError::UnsupportedDepth {
            expected: 8,
            actual: 32
        })
    ));
}

#[test]
fn test_sauvola_sweep_window_sizes() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.png");
    let output = dir.path().join("bin.png");
    write_gray_page(&input);

    let options = SauvolaOptions::builder()
        .bins(3)
        .min_window(10)
        .max_window(40)
        .build();
    let outcome = sauvola_binarize(&input, &output, &options).unwrap();

    let values: Vec<i32> = outcome.steps.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![10, 20, 30]);
    for step in &outcome.steps {
        assert!(step.path.is_file());
    }
}

#[test]
fn test_sauvola_rejects_color_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("color.png");
    write_color_page(&input);

    let result = sauvola_binarize(
        &input,
        &dir.path().join("out.png"),
        &SauvolaOptions::default(),
    );
    assert!(matches!(
        result,
        Err(PrepError::UnsupportedDepth {
            expected: 8,
            actual: 32
        })
    ));
}

#[test]
fn test_sauvola_invalid_factor_skips_input_read() {
    let options = SauvolaOptions::builder().factor(1.0).build();
    let result = sauvola_binarize(
        Path::new("/nonexistent/page.png"),
        Path::new("/tmp/out.png"),
        &options,
    );
    assert!(matches!(result, Err(PrepError::InvalidParameters(_))));
}

#[test]
fn test_dewarp_rejects_grayscale_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.png");
    write_gray_page(&input);

    let result = dewarp(
        &input,
        &dir.path().join("out.png"),
        &DewarpOptions::default(),
    );
    assert!(matches!(
        result,
        Err(PrepError::UnsupportedDepth {
            expected: 1,
            actual: 8
        })
    ));
}

#[test]
fn test_rgb_to_gray_produces_8bpp() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("color.png");
    let output = dir.path().join("gray.png");
    write_color_page(&input);

    let written = rgb_to_gray(&input, &output, &GrayOptions::default()).unwrap();
    assert_eq!(written, output);

    let gray = Pix::read(&output).unwrap();
    assert_eq!(gray.depth(), GRAYSCALE_DEPTH);
}

#[test]
fn test_rgb_to_gray_rejects_grayscale_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.png");
    write_gray_page(&input);

    let result = rgb_to_gray(
        &input,
        &dir.path().join("out.png"),
        &GrayOptions::default(),
    );
    assert!(matches!(
        result,
        Err(PrepError::UnsupportedDepth {
            expected: 32,
            actual: 8
        })
    ));
}

#[test]
fn test_deskew_reports_angle_and_writes_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.png");
    let output = dir.path().join("straight.png");
    write_gray_page(&input);

    let result = deskew(&input, &output, &DeskewOptions::default()).unwrap();
    assert!(result.angle.is_finite());
    assert_eq!(result.output_path, output);
    assert!(output.is_file());

    // The fixture bars are axis-aligned: any detected skew is tiny
    assert!(result.angle.abs() < 5.0);
}

#[test]
fn test_deskew_preserves_dimensions() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.png");
    let output = dir.path().join("straight.png");
    write_gray_page(&input);

    deskew(&input, &output, &DeskewOptions::default()).unwrap();

    let src = Pix::read(&input).unwrap();
    let dst = Pix::read(&output).unwrap();
    assert_eq!((src.width(), src.height()), (dst.width(), dst.height()));
}
