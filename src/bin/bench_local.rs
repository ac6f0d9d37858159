//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of word lists on *your* machine.
//! - Runs each case several times and reports the median build time.
//! - Uses a fixed seed per repeat so runs are comparable across machines.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print the generated grids:      `cargo run --bin bench_local --release -- -p`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Use the same machine and `--release` for more comparable numbers.
//! - Word lists live in `cases()` below.
//! - I/O (printing) is kept outside the timed section.
//! - One warm-up run per case is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Instant;
use wordprowl::builder::{new_puzzle_with_rng, FillMode, PuzzleOptions};

/// Simple local benchmark runner: time puzzle builds for several word lists.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Print the last generated grid per case
    #[arg(short = 'p', long = "print")]
    print_grids: bool,

    /// Base RNG seed (repeat i uses seed + i)
    #[arg(short, long, default_value_t = 0x77_6f_72_64)]
    seed: u64,
}

/// A benchmark case: a name and the words to place.
struct Case {
    name: &'static str,
    words: &'static [&'static str],
}

/// Edit/add new cases here. The summary displays `name`.
fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "animals (10 short words)",
            words: &[
                "CAT", "DOG", "COW", "FOX", "OWL", "BAT", "RAT", "HEN", "PIG", "ANT",
            ],
        },
        Case {
            name: "colors (crossing-heavy)",
            words: &[
                "CRIMSON", "SCARLET", "MAGENTA", "TURQUOISE", "LAVENDER", "EMERALD",
            ],
        },
        Case {
            name: "long words (growth-prone)",
            words: &[
                "EXTRAORDINARY",
                "CIRCUMNAVIGATE",
                "MISUNDERSTANDING",
                "CHARACTERISTIC",
                "REPRESENTATIVE",
            ],
        },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    // safe: f64 durations are never NaN in this context
    xs.sort_by(|a, b| a.partial_cmp(b).expect("f64 durations should not be NaN"));
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        (xs[n / 2 - 1] + xs[n / 2]) / 2.0
    }
}

fn main() {
    let cli = Cli::parse();

    let options = PuzzleOptions {
        // Blank filling is cheap and noisy to time; leave it off.
        fill_blanks: FillMode::Off,
        ..PuzzleOptions::default()
    };

    println!("repeats per case: {}", cli.num_repeats);
    println!();

    for case in cases() {
        // Warm-up run, not timed.
        let mut rng = StdRng::seed_from_u64(cli.seed);
        let _ = black_box(new_puzzle_with_rng(case.words, &options, &mut rng));

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last = None;

        for repeat in 0..cli.num_repeats {
            let mut rng = StdRng::seed_from_u64(cli.seed + repeat as u64);

            let t = Instant::now();
            let grid = black_box(new_puzzle_with_rng(case.words, &options, &mut rng));
            times.push(t.elapsed().as_secs_f64());

            last = Some(grid);
        }

        let med = median(times);

        match last {
            Some(Ok(grid)) => {
                println!(
                    "{:<28} median {:>9.6}s  ({}x{} grid)",
                    case.name,
                    med,
                    grid.width(),
                    grid.height(),
                );
                if cli.print_grids {
                    println!("{grid}");
                    println!();
                }
            }
            Some(Err(e)) => {
                println!("{:<28} median {:>9.6}s  (failed: {e})", case.name, med);
            }
            None => println!("{:<28} no repeats requested", case.name),
        }
    }
}
