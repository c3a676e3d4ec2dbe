//! Chaturbhuj - rectangle finder
//!
//! Loads a JSON point list, finds every axis-aligned rectangle whose four
//! corners are present, reports timing and count, and optionally lists the
//! rectangles and exports them as JSON.
//!
//! Usage:
//!   chaturbhuj data_points_16.json
//!   chaturbhuj points.json --print always --output output/rectangles.json
//!   chaturbhuj -c configs/config.yaml --threads 4

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;

use chaturbhuj::io::{load_points, save_rectangles};
use chaturbhuj::{ChaturbhujConfig, PrintMode, Rectangle, RectangleDetector, Result};

/// Find axis-aligned rectangles in a set of integer points
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with the input points (overrides the config file)
    points: Option<PathBuf>,

    /// Configuration file path (configs/config.yaml is used when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write rectangles as JSON records to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Console listing of rectangles
    #[arg(short, long, value_enum)]
    print: Option<PrintMode>,

    /// Worker threads (0 = one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Run every stage on the main thread
    #[arg(long)]
    sequential: bool,
}

/// Ask a yes/no question on stdin.
fn confirm(question: &str) -> io::Result<bool> {
    print!("{} (y/n): ", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

fn print_rectangles(rectangles: &[Rectangle]) {
    println!("Rectangles found:");
    for (i, rect) in rectangles.iter().enumerate() {
        let [p1, p2, p3, p4] = rect.ordered_points();
        println!(
            "  {}: [({}, {}), ({}, {}), ({}, {}), ({}, {})]",
            i + 1,
            p1.x,
            p1.y,
            p2.x,
            p2.y,
            p3.x,
            p3.y,
            p4.x,
            p4.y
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => ChaturbhujConfig::load(path)?,
        None => ChaturbhujConfig::load_default()?,
    };

    // Command line overrides
    if let Some(points) = &args.points {
        config.input.points_path = points.display().to_string();
    }
    if let Some(output) = &args.output {
        config.output.json_path = Some(output.display().to_string());
    }
    if let Some(print) = args.print {
        config.output.print = print;
    }
    if let Some(threads) = args.threads {
        config.detection.num_threads = threads;
    }
    if args.sequential {
        config.detection.parallel = false;
    }

    let points = load_points(Path::new(&config.input.points_path))?;
    log::info!(
        "Loaded {} points from {}",
        points.len(),
        config.input.points_path
    );

    let detector = RectangleDetector::new(config.detection_config())?;
    log::debug!("Detecting on {} workers", detector.worker_count());

    println!("Starting rectangle calculation...");
    let start = Instant::now();
    let result = detector.detect(&points);
    let duration = start.elapsed();

    println!("----------------------------------------");
    println!("Calculation finished in {:?}", duration);
    println!("Found {} unique rectangles.", result.rectangles.len());
    println!("----------------------------------------");

    log::debug!(
        "Stages (µs): dedup {} | group {} | lines {} | match {} | rect dedup {}",
        result.timing.point_dedup_us,
        result.timing.grouping_us,
        result.timing.line_generation_us,
        result.timing.matching_us,
        result.timing.rect_dedup_us
    );

    if let Some(path) = &config.output.json_path {
        save_rectangles(Path::new(path), &result.rectangles)?;
    }

    if !result.rectangles.is_empty() {
        let show = match config.output.print {
            PrintMode::Always => true,
            PrintMode::Never => false,
            PrintMode::Ask => {
                confirm("Do you want to print the found rectangles to the console?")?
            }
        };
        if show {
            print_rectangles(&result.rectangles);
        }
    }

    Ok(())
}
