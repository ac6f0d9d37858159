//! Integration tests for the wordprowl puzzle engine.
//!
//! These tests exercise the public API end to end: building puzzles with
//! seeded RNGs, recovering word coordinates with the solver, and checking
//! the failure modes of the attempt/growth and fill-letter budgets. Every
//! assertion holds for any RNG outcome; seeds only make failures
//! reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;

use wordprowl::builder::{
    new_puzzle_lax_with_rng, new_puzzle_with_rng, FillMode, PuzzleOptions,
};
use wordprowl::errors::BuildError;
use wordprowl::grid::Grid;
use wordprowl::orientation::{Orientation, ALL_ORIENTATIONS};
use wordprowl::search::find_best_locations;
use wordprowl::solver::solve_puzzle;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn no_fill_options() -> PuzzleOptions {
    PuzzleOptions {
        fill_blanks: FillMode::Off,
        ..PuzzleOptions::default()
    }
}

#[cfg(test)]
mod building {
    use super::*;

    #[test]
    fn every_placed_word_is_recoverable() {
        let words = ["SNAKE", "HORSE", "MOUSE", "CAMEL", "OTTER"];
        let grid = new_puzzle_with_rng(&words, &no_fill_options(), &mut seeded(1)).unwrap();

        let solution = solve_puzzle(&grid, &words);

        assert_eq!(solution.not_found, Vec::<String>::new());
        assert_eq!(solution.found.len(), words.len());
        for placement in &solution.found {
            assert_eq!(
                placement.overlap,
                placement.len(),
                "\"{}\" should be present along its full length",
                placement.word,
            );
        }
    }

    #[test]
    fn filled_grid_is_rectangular_and_complete() {
        let words = ["PUZZLE", "SEARCH", "LETTER"];
        let grid =
            new_puzzle_with_rng(&words, &PuzzleOptions::default(), &mut seeded(2)).unwrap();

        assert_eq!(grid.blank_count(), 0);

        let rendered = grid.render();
        assert_eq!(rendered.lines().count(), grid.height());
        for row in rendered.lines() {
            assert_eq!(row.chars().count(), grid.width());
        }

        // Filling must not destroy the placed words.
        let solution = solve_puzzle(&grid, &words);
        assert_eq!(solution.not_found, Vec::<String>::new());
    }

    #[test]
    fn empty_word_list_is_a_fatal_input_error() {
        let result = new_puzzle_with_rng(&[], &PuzzleOptions::default(), &mut seeded(3));

        assert_eq!(result, Err(BuildError::EmptyInput));
        assert_eq!(result.unwrap_err().code(), "B001");
    }

    #[test]
    fn initial_grid_is_sized_to_the_longest_word() {
        let grid = new_puzzle_with_rng(
            &["OX", "CAT", "GIRAFFE"],
            &no_fill_options(),
            &mut seeded(4),
        )
        .unwrap();

        assert_eq!((grid.width(), grid.height()), (7, 7));
    }

    #[test]
    fn oversized_word_fails_on_a_fixed_grid() {
        let options = PuzzleOptions {
            width: Some(4),
            height: Some(4),
            max_grid_growth: 0,
            ..no_fill_options()
        };
        let result = new_puzzle_with_rng(&["ELEPHANT"], &options, &mut seeded(5));

        // The error reports the final attempted dimensions.
        assert_eq!(
            result,
            Err(BuildError::GridUnsatisfiable { width: 4, height: 4 }),
        );
    }

    #[test]
    fn grid_growth_reports_the_last_size_attempted() {
        let options = PuzzleOptions {
            width: Some(2),
            height: Some(2),
            max_grid_growth: 3,
            ..no_fill_options()
        };
        let result = new_puzzle_with_rng(&["ALPHABETICAL"], &options, &mut seeded(6));

        // 2x2 grew three times to 5x5, still far too small for 12 letters.
        assert_eq!(
            result,
            Err(BuildError::GridUnsatisfiable { width: 5, height: 5 }),
        );
    }
}

#[cfg(test)]
mod geometry {
    use super::*;

    /// `step` under an orientation composed with `step` under its mirror
    /// returns to the starting cell.
    #[test]
    fn step_and_mirror_are_inverse() {
        let (x, y) = (20, 20);

        for orientation in ALL_ORIENTATIONS {
            for distance in 0..8 {
                let (sx, sy) = orientation.step(x, y, distance);
                assert_eq!(
                    orientation.mirror().step(sx, sy, distance),
                    (x, y),
                    "{orientation}, distance {distance}",
                );
            }
        }
    }

    #[test]
    fn orientation_names_parse_back() {
        for orientation in ALL_ORIENTATIONS {
            let name = orientation.to_string();
            assert_eq!(name.parse::<Orientation>().unwrap(), orientation);
        }
    }
}

#[cfg(test)]
mod scenarios {
    use super::*;

    /// A single horizontal word in a fixed 3x3 grid with filling off:
    /// exactly one row carries the word, the others stay blank.
    #[test]
    fn single_horizontal_word_occupies_one_row() {
        let options = PuzzleOptions {
            width: Some(3),
            height: Some(3),
            orientations: vec![Orientation::Horizontal],
            prefer_overlap: true,
            ..no_fill_options()
        };
        let grid = new_puzzle_with_rng(&["CAT"], &options, &mut seeded(7)).unwrap();

        let rendered = grid.render();
        let mut rows = rendered.lines();
        assert_eq!(rows.clone().filter(|row| *row == "CAT").count(), 1);
        assert_eq!(rows.filter(|row| *row == "   ").count(), 2);
    }

    /// With overlap preference on, a word sharing letters with what is
    /// already on the board is only offered maximum-overlap spots.
    #[test]
    fn overlapping_word_is_offered_only_crossing_spots() {
        let grid: Grid = "CAT\n   \n   ".parse().unwrap();

        let locations = find_best_locations(
            &grid,
            &[Orientation::Horizontal, Orientation::Vertical],
            true,
            "CAR",
        );

        assert!(!locations.is_empty());
        for location in &locations {
            assert!(
                location.overlap >= 1,
                "placement at ({}, {}) {} shares no letter with CAT",
                location.x,
                location.y,
                location.orientation,
            );
        }
    }

    /// Both words share a prefix; the built grid must hold them with at
    /// least one crossing candidate having been available throughout.
    #[test]
    fn crossing_words_build_and_solve() {
        let options = PuzzleOptions {
            orientations: vec![Orientation::Horizontal, Orientation::Vertical],
            prefer_overlap: true,
            ..no_fill_options()
        };
        let grid = new_puzzle_with_rng(&["CAT", "CAR"], &options, &mut seeded(8)).unwrap();

        let solution = solve_puzzle(&grid, &["CAT", "CAR"]);
        assert_eq!(solution.not_found, Vec::<String>::new());
    }

    /// The lax builder drops an impossible word when the budget allows and
    /// propagates the original failure when it does not.
    #[test]
    fn lax_build_respects_the_missing_word_budget() {
        let options = PuzzleOptions {
            width: Some(3),
            height: Some(3),
            max_grid_growth: 0,
            allowed_missing_words: 1,
            ..no_fill_options()
        };
        let words = ["AAAAAAAAAAAAAAAAAAAA", "CAT"];

        let grid = new_puzzle_lax_with_rng(&words, &options, &mut seeded(9)).unwrap();
        let solution = solve_puzzle(&grid, &words);
        assert_eq!(solution.not_found, vec!["AAAAAAAAAAAAAAAAAAAA".to_string()]);
        assert_eq!(solution.found[0].word, "CAT");

        let strict = PuzzleOptions { allowed_missing_words: 0, ..options };
        assert_eq!(
            new_puzzle_lax_with_rng(&words, &strict, &mut seeded(9)),
            Err(BuildError::GridUnsatisfiable { width: 3, height: 3 }),
        );
    }

    /// Looking for a longer word than the grid contains must not count the
    /// partial overlap as a find.
    #[test]
    fn partial_overlap_never_counts_as_found() {
        let grid: Grid = "DOG  \n     \n     \n     \n     ".parse().unwrap();

        let solution = solve_puzzle(&grid, &["DOGMA"]);

        assert!(solution.found.is_empty());
        assert_eq!(solution.not_found, vec!["DOGMA".to_string()]);
    }
}

#[cfg(test)]
mod solving {
    use super::*;

    #[test]
    fn solve_is_idempotent_and_read_only() {
        let grid: Grid = "CAT\nOWL\nWEB".parse().unwrap();
        let words = ["CAT", "OWL", "COW", "MISSING"];

        let before = grid.clone();
        let first = solve_puzzle(&grid, &words);
        let second = solve_puzzle(&grid, &words);

        assert_eq!(first, second);
        assert_eq!(grid, before);
    }

    #[test]
    fn found_words_report_their_full_geometry() {
        let grid: Grid = "CAT\n   \n   ".parse().unwrap();
        let solution = solve_puzzle(&grid, &["CAT"]);

        let placement = &solution.found[0];
        assert_eq!((placement.x, placement.y), (0, 0));
        assert_eq!(placement.end(), (2, 0));
        assert_eq!(placement.cells(), vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(placement.orientation, Orientation::Horizontal);
    }

    #[test]
    fn words_are_reported_in_input_order() {
        let grid: Grid = "CAT\nOWL\nWEB".parse().unwrap();
        let solution = solve_puzzle(&grid, &["OWL", "CAT"]);

        assert_eq!(solution.found[0].word, "OWL");
        assert_eq!(solution.found[1].word, "CAT");
    }
}

#[cfg(test)]
mod filling {
    use super::*;

    #[test]
    fn exact_pool_fills_the_grid_completely() {
        let options = PuzzleOptions {
            width: Some(3),
            height: Some(1),
            orientations: vec![Orientation::Horizontal],
            fill_blanks: FillMode::Letters("Z".to_string()),
            allow_extra_blanks: false,
            ..PuzzleOptions::default()
        };
        let grid = new_puzzle_with_rng(&["AB"], &options, &mut seeded(10)).unwrap();

        assert_eq!(grid.blank_count(), 0);
        assert!(grid.render().contains('Z'));
    }

    #[test]
    fn short_pool_fails_with_the_missing_count() {
        let options = PuzzleOptions {
            width: Some(3),
            height: Some(3),
            orientations: vec![Orientation::Horizontal],
            fill_blanks: FillMode::Letters("AB".to_string()),
            ..PuzzleOptions::default()
        };
        let result = new_puzzle_with_rng(&["CAT"], &options, &mut seeded(11));

        assert_eq!(result, Err(BuildError::InsufficientFillLetters { missing: 4 }));
        assert_eq!(result.unwrap_err().code(), "B003");
    }

    #[test]
    fn leftover_pool_letters_fail_unless_tolerated() {
        let base = PuzzleOptions {
            width: Some(3),
            height: Some(1),
            orientations: vec![Orientation::Horizontal],
            fill_blanks: FillMode::Letters("XYZ".to_string()),
            ..PuzzleOptions::default()
        };

        let strict = PuzzleOptions { allow_extra_blanks: false, ..base.clone() };
        assert_eq!(
            new_puzzle_with_rng(&["AB"], &strict, &mut seeded(12)),
            Err(BuildError::UnusedFillLetters { leftover: 2 }),
        );

        let lenient = PuzzleOptions { allow_extra_blanks: true, ..base };
        let grid = new_puzzle_with_rng(&["AB"], &lenient, &mut seeded(12)).unwrap();
        assert_eq!(grid.blank_count(), 0);
    }

    #[test]
    fn generator_fill_completes_the_grid() {
        let options = PuzzleOptions {
            width: Some(4),
            height: Some(4),
            fill_blanks: FillMode::Generator(|| 'q'),
            ..PuzzleOptions::default()
        };
        let grid = new_puzzle_with_rng(&["TOAD"], &options, &mut seeded(13)).unwrap();

        assert_eq!(grid.blank_count(), 0);
        // 16 cells minus the 4 letters of "TOAD".
        assert_eq!(
            grid.rows().flatten().filter(|cell| **cell == Some('q')).count(),
            12,
        );
    }
}
