use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;
use std::time::Instant;

use wordprowl::builder::{
    new_puzzle, new_puzzle_lax, new_puzzle_lax_with_rng, new_puzzle_with_rng, FillMode,
    PuzzleOptions,
};
use wordprowl::errors::BuildError;
use wordprowl::orientation::{Orientation, ALL_ORIENTATIONS};
use wordprowl::solver::solve_puzzle;

/// Crate version plus the git commit it was built from.
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Wordprowl word-search puzzle generator
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// The words to hide in the puzzle
    #[arg(required = true)]
    words: Vec<String>,

    /// Initial grid width (default: length of the longest word)
    #[arg(long)]
    width: Option<usize>,

    /// Initial grid height (default: length of the longest word)
    #[arg(long)]
    height: Option<usize>,

    /// Comma-separated orientations to allow (default: all eight),
    /// e.g. "horizontal,vertical,diagonalUp"
    #[arg(short, long, value_delimiter = ',')]
    orientations: Option<Vec<Orientation>>,

    /// Fresh-grid attempts per grid size before growing
    #[arg(long, default_value_t = 3)]
    max_attempts: usize,

    /// How many times the grid may grow by one cell in each dimension
    #[arg(long, default_value_t = 10)]
    max_grid_growth: usize,

    /// Record every compatible placement instead of only maximum-overlap ones
    #[arg(long)]
    no_prefer_overlap: bool,

    /// Leave unused cells blank instead of filling them with random letters
    #[arg(long, conflicts_with = "fill_letters")]
    no_fill: bool,

    /// Fill unused cells from this fixed pool of letters, consumed in order
    #[arg(long)]
    fill_letters: Option<String>,

    /// Number of words that may be dropped when no full arrangement exists
    #[arg(long, default_value_t = 0)]
    allow_missing: usize,

    /// Seed for the random number generator (reproducible puzzles)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the coordinates of every placed word after the grid
    #[arg(short, long)]
    solve: bool,
}

/// Entry point of the wordprowl CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDPROWL_DEBUG").is_ok();
    wordprowl::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a BuildError
        if let Some(build_err) = e.downcast_ref::<BuildError>() {
            eprintln!("Error: {}", build_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordprowl CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Assemble a [`PuzzleOptions`] value from the flags.
/// 3. Build the puzzle (lax when `--allow-missing` is nonzero, seeded when
///    `--seed` is given).
/// 4. Print the grid on stdout, plus the recovered word coordinates when
///    `--solve` was requested.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let words: Vec<&str> = cli.words.iter().map(String::as_str).collect();

    let fill_blanks = if cli.no_fill {
        FillMode::Off
    } else if let Some(pool) = &cli.fill_letters {
        FillMode::Letters(pool.clone())
    } else {
        FillMode::Random
    };

    let options = PuzzleOptions {
        width: cli.width,
        height: cli.height,
        orientations: cli
            .orientations
            .clone()
            .unwrap_or_else(|| ALL_ORIENTATIONS.to_vec()),
        fill_blanks,
        max_attempts: cli.max_attempts,
        max_grid_growth: cli.max_grid_growth,
        prefer_overlap: !cli.no_prefer_overlap,
        allowed_missing_words: cli.allow_missing,
        ..PuzzleOptions::default()
    };

    let t_build = Instant::now();
    let grid = match (cli.seed, cli.allow_missing > 0) {
        (Some(seed), true) => {
            new_puzzle_lax_with_rng(&words, &options, &mut StdRng::seed_from_u64(seed))?
        }
        (Some(seed), false) => {
            new_puzzle_with_rng(&words, &options, &mut StdRng::seed_from_u64(seed))?
        }
        (None, true) => new_puzzle_lax(&words, &options)?,
        (None, false) => new_puzzle(&words, &options)?,
    };
    let build_secs = t_build.elapsed().as_secs_f64();

    println!("{grid}");
    log::info!(
        "built a {}x{} puzzle in {build_secs:.3}s",
        grid.width(),
        grid.height(),
    );

    if cli.solve {
        let solution = solve_puzzle(&grid, &words);

        println!();
        for placement in &solution.found {
            println!(
                "{} at ({}, {}) {}",
                placement.word, placement.x, placement.y, placement.orientation,
            );
        }
        for word in &solution.not_found {
            println!("{word}: not found");
        }
    }

    Ok(())
}
