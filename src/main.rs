//! scanprep - Document image preprocessing for scanned pages
//!
//! CLI entry point

use clap::Parser;
use scanprep::{
    cli::{DeskewArgs, DewarpArgs, GrayArgs, OtsuArgs, SauvolaArgs},
    create_spinner, create_sweep_progress_bar, deskew, dewarp, leptonica_version,
    otsu_binarize_with, rgb_to_gray, sauvola_binarize_with, Cli, Commands, Config, ExitCode,
    PrepError,
};

fn main() {
    let cli = Cli::parse();
    let config = load_config(&cli);

    let result = match &cli.command {
        Commands::Deskew(args) => run_deskew(args, &config, &cli),
        Commands::Dewarp(args) => run_dewarp(args, &config, &cli),
        Commands::Gray(args) => run_gray(args, &config, &cli),
        Commands::Sauvola(args) => run_sauvola(args, &config, &cli),
        Commands::Otsu(args) => run_otsu(args, &config, &cli),
        Commands::Info => {
            run_info();
            Ok(())
        }
    };

    std::process::exit(match result {
        Ok(()) => ExitCode::Success.code(),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(&e).code()
        }
    });
}

fn load_config(cli: &Cli) -> Config {
    match &cli.config {
        Some(path) => match Config::load_from_path(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {e}");
                Config::default()
            }
        },
        None => Config::load().unwrap_or_default(),
    }
}

// ============ Single-shot commands ============

fn run_deskew(args: &DeskewArgs, config: &Config, cli: &Cli) -> Result<(), PrepError> {
    let options = config.deskew_options(args);
    let spinner = (!cli.quiet).then(|| create_spinner("Deskewing..."));

    let result = deskew(&args.input, &args.output, &options);

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }
    let result = result?;

    if !cli.quiet {
        println!(
            "{} -> {}",
            args.input.display(),
            result.output_path.display()
        );
    }
    if cli.verbose > 0 {
        println!(
            "  angle {:.2} deg, confidence {:.2}",
            result.angle, result.confidence
        );
    }
    Ok(())
}

fn run_dewarp(args: &DewarpArgs, config: &Config, cli: &Cli) -> Result<(), PrepError> {
    let options = config.dewarp_options(args);
    let spinner = (!cli.quiet).then(|| create_spinner("Dewarping..."));

    let result = dewarp(&args.input, &args.output, &options);

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }
    let output_path = result?;

    if !cli.quiet {
        println!("{} -> {}", args.input.display(), output_path.display());
    }
    Ok(())
}

fn run_gray(args: &GrayArgs, config: &Config, cli: &Cli) -> Result<(), PrepError> {
    let options = config.gray_options(args);
    let spinner = (!cli.quiet).then(|| create_spinner("Converting to grayscale..."));

    let result = rgb_to_gray(&args.input, &args.output, &options);

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }
    let output_path = result?;

    if !cli.quiet {
        println!("{} -> {}", args.input.display(), output_path.display());
    }
    Ok(())
}

// ============ Sweep commands ============

fn run_sauvola(args: &SauvolaArgs, config: &Config, cli: &Cli) -> Result<(), PrepError> {
    let options = config.sauvola_options(args);
    let total = options.validate()?.values().len() as u64;
    let bar = (!cli.quiet).then(|| create_sweep_progress_bar(total));
    let verbose = cli.verbose > 0;

    let outcome = sauvola_binarize_with(&args.input, &args.output, &options, |step| {
        report_step(&bar, verbose, "window", step.value, &step.path);
    });

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }
    let outcome = outcome?;

    if !cli.quiet {
        println!(
            "Wrote {} binarization(s) of {}",
            outcome.steps.len(),
            args.input.display()
        );
    }
    Ok(())
}

fn run_otsu(args: &OtsuArgs, config: &Config, cli: &Cli) -> Result<(), PrepError> {
    let options = config.otsu_options(args);
    let total = options.validate()?.values().len() as u64;
    let bar = (!cli.quiet).then(|| create_sweep_progress_bar(total));
    let verbose = cli.verbose > 0;

    let outcome = otsu_binarize_with(&args.input, &args.output, &options, |step| {
        report_step(&bar, verbose, "threshold", step.value, &step.path);
    });

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }
    let outcome = outcome?;

    if !cli.quiet {
        println!(
            "Wrote {} binarization(s) of {}",
            outcome.steps.len(),
            args.input.display()
        );
    }
    Ok(())
}

fn report_step(
    bar: &Option<indicatif::ProgressBar>,
    verbose: bool,
    label: &str,
    value: i32,
    path: &std::path::Path,
) {
    if let Some(bar) = bar {
        if verbose {
            bar.println(format!("  {label} {value:>3} -> {}", path.display()));
        }
        bar.inc(1);
    } else if verbose {
        println!("  {label} {value:>3} -> {}", path.display());
    }
}

// ============ Info command ============

fn run_info() {
    println!("scanprep {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("System Information");
    println!(
        "  Platform: {} ({})",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    println!("  Leptonica: {}", leptonica_version());
}
