// src/main.rs

use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

use tensile_analyzer::config::{load_config, RuntimeConfig, SmoothingStage};
use tensile_analyzer::data_input::csv_parser::parse_sample_file;
use tensile_analyzer::plot_functions::plot_differences::plot_differences;
use tensile_analyzer::plot_functions::plot_force_displacement::plot_force_displacement;
use tensile_analyzer::report::format_report;
use tensile_analyzer::{crate_version, run_analysis};

struct CliArgs {
    input_file: PathBuf,
    config_file: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    window: Option<usize>,
    smooth_raw: bool,
    gate: Option<f64>,
    threshold: Option<f64>,
    tolerance: Option<f64>,
    no_plots: bool,
}

fn print_usage(program: &str) {
    eprintln!("tensile_analyzer {}", crate_version());
    eprintln!("Usage: {program} <input_file.csv> [options]");
    eprintln!("  --window <N>        Moving-average window (smoothing disabled if absent)");
    eprintln!("  --smooth-raw        Smooth raw force before aggregation");
    eprintln!("  --gate <F>          Force gate below which points are ignored (default 0.5)");
    eprintln!("  --threshold <T>     Second-difference linearity threshold (default 1.5)");
    eprintln!("  --tolerance <E>     Displacement spacing tolerance (default 1e-6)");
    eprintln!("  --config <file>     JSON configuration file");
    eprintln!("  --output-dir <dir>  Directory for plot images (default: input file directory)");
    eprintln!("  --no-plots          Skip plot generation");
    eprintln!("  -h, --help          Show this help");
}

fn usage_error(program: &str, message: &str) -> ! {
    eprintln!("Error: {message}");
    print_usage(program);
    std::process::exit(2);
}

fn parse_value<T: std::str::FromStr>(program: &str, flag: &str, value: Option<&String>) -> T {
    match value.map(|v| v.parse::<T>()) {
        Some(Ok(parsed)) => parsed,
        Some(Err(_)) => usage_error(program, &format!("invalid value for {flag}")),
        None => usage_error(program, &format!("{flag} requires a value")),
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("tensile_analyzer");

    let mut input_file: Option<PathBuf> = None;
    let mut cli = CliArgs {
        input_file: PathBuf::new(),
        config_file: None,
        output_dir: None,
        window: None,
        smooth_raw: false,
        gate: None,
        threshold: None,
        tolerance: None,
        no_plots: false,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage(program);
                std::process::exit(0);
            }
            "--window" => cli.window = Some(parse_value(program, arg, iter.next())),
            "--gate" => cli.gate = Some(parse_value(program, arg, iter.next())),
            "--threshold" => cli.threshold = Some(parse_value(program, arg, iter.next())),
            "--tolerance" => cli.tolerance = Some(parse_value(program, arg, iter.next())),
            "--config" => cli.config_file = Some(parse_value(program, arg, iter.next())),
            "--output-dir" => cli.output_dir = Some(parse_value(program, arg, iter.next())),
            "--smooth-raw" => cli.smooth_raw = true,
            "--no-plots" => cli.no_plots = true,
            other if other.starts_with('-') => {
                usage_error(program, &format!("unknown option '{other}'"))
            }
            other => {
                if input_file.is_some() {
                    usage_error(program, "only one input file may be given");
                }
                input_file = Some(PathBuf::from(other));
            }
        }
    }

    match input_file {
        Some(path) => cli.input_file = path,
        None => usage_error(program, "missing input file"),
    }
    cli
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = parse_args();
    let input_path = cli.input_file.as_path();
    let root_name = input_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();

    // --- Configuration: file first, CLI flags override ---
    let mut runtime = match &cli.config_file {
        Some(path) => load_config(path)?,
        None => RuntimeConfig::default(),
    };
    let analysis = &mut runtime.analysis;
    if cli.window.is_some() {
        analysis.smoothing_window = cli.window;
    }
    if cli.smooth_raw {
        analysis.smoothing_stage = SmoothingStage::Raw;
    }
    if let Some(gate) = cli.gate {
        analysis.force_gate = gate;
    }
    if let Some(threshold) = cli.threshold {
        analysis.linearity_threshold = threshold;
    }
    if let Some(tolerance) = cli.tolerance {
        analysis.spacing_tolerance = tolerance;
    }
    runtime.analysis.validate()?;

    // --- Data Reading ---
    println!("Reading {}...", input_path.display());
    let ingested = parse_sample_file(input_path, &runtime.ingest)?;
    println!(
        "Accepted {} rows, skipped {} non-numeric rows.",
        ingested.rows_accepted, ingested.rows_skipped
    );

    // --- Analysis ---
    println!("\n--- Running Analysis ---");
    let result = run_analysis(&ingested.samples, &runtime.analysis)?;
    println!("\n{}", format_report(&result, &root_name));

    // --- Plots ---
    if cli.no_plots {
        return Ok(());
    }
    let output_dir: PathBuf = match &cli.output_dir {
        Some(dir) => dir.clone(),
        None => input_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    std::fs::create_dir_all(&output_dir)?;

    println!("\n--- Generating Force vs Displacement Plot ---");
    plot_force_displacement(&result, &root_name, &output_dir)?;

    println!("\n--- Generating Stacked Differences Plot ---");
    plot_differences(
        &result,
        &root_name,
        &output_dir,
        runtime.analysis.linearity_threshold,
    )?;

    Ok(())
}

// src/main.rs
