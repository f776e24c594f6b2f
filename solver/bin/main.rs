use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use solver::{solve, util::parse_img, SolverConfig};

/// Solve a maze image and mark the path in red.
#[derive(Parser, Debug)]
#[command(name = "mazesolve", version)]
struct Args {
    /// Path to the input maze image
    input: PathBuf,

    /// Path to save the solved maze image
    output: PathBuf,

    /// Optional TOML file overriding threshold, blank_ratio, endpoint_skip or path_color
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the cropped maze as text
    #[arg(long)]
    print: bool,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    log::debug!("{:?}", config);

    if !args.input.exists() {
        bail!("Input file '{}' does not exist.", args.input.display());
    }

    let img = image::open(&args.input)
        .with_context(|| format!("Could not open the image '{}'", args.input.display()))?;
    let map = parse_img(&img, config.threshold);

    let solution = solve(&map, &config)?;

    println!(
        "Cropped maze dimensions: {}x{}",
        solution.maze.rows, solution.maze.columns
    );
    if args.print {
        println!("{}", solution.maze);
    }

    solution
        .image
        .save(&args.output)
        .with_context(|| format!("Could not save the solved maze '{}'", args.output.display()))?;
    println!("Solved maze saved to '{}'.", args.output.display());

    Ok(())
}
