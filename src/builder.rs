//! `builder` — turns a word list into a finished puzzle grid.
//!
//! Building is a randomized constructive search: each attempt allocates a
//! fresh grid and places the words one at a time, choosing uniformly at
//! random among the best candidate placements for each word. If any word has
//! nowhere to go the whole attempt is abandoned (no partial credit) and
//! retried; after `max_attempts` failures at one size the grid grows by one
//! cell in both dimensions, up to `max_grid_growth` times, after which the
//! build fails with [`BuildError::GridUnsatisfiable`].
//!
//! All configuration lives in an immutable [`PuzzleOptions`] value; the
//! attempt and growth counters are local to each call, so concurrent builds
//! share no state. The random source is injectable via the `*_with_rng`
//! variants — [`new_puzzle`] is a convenience wrapper over a thread-local
//! RNG.
//!
//! # Examples
//!
//! ```
//! use wordprowl::builder::{new_puzzle, PuzzleOptions};
//!
//! let options = PuzzleOptions::default();
//! let grid = new_puzzle(&["CAT", "DOG", "COW"], &options)?;
//!
//! // Every cell holds a letter: the words plus random filler.
//! println!("{grid}");
//! # Ok::<(), wordprowl::errors::BuildError>(())
//! ```

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::BuildError;
use crate::grid::Grid;
use crate::orientation::{Orientation, ALL_ORIENTATIONS};
use crate::search::find_best_locations;

/// The alphabet random blank filling draws from.
const FILL_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// How the cells no word occupies are filled after a successful build.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FillMode {
    /// Leave unused cells blank.
    Off,

    /// A uniformly random letter from `A..=Z` per blank cell.
    #[default]
    Random,

    /// Consume a fixed pool of letters in order. Fails the build with
    /// [`BuildError::InsufficientFillLetters`] if the pool empties early,
    /// and with [`BuildError::UnusedFillLetters`] if letters are left over
    /// and [`PuzzleOptions::allow_extra_blanks`] is false.
    Letters(String),

    /// One call per blank cell. Stateful pools are better expressed with
    /// [`FillMode::Letters`]; this variant suits derived alphabets.
    Generator(fn() -> char),
}

/// Configuration for one build. Immutable once constructed; every unset
/// dimension defaults to the longest word's length (a square grid sized to
/// the hardest constraint).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleOptions {
    /// Initial grid width. `None` = length of the longest word.
    pub width: Option<usize>,
    /// Initial grid height. `None` = length of the longest word.
    pub height: Option<usize>,
    /// The subset of orientations words may run along.
    pub orientations: Vec<Orientation>,
    /// How to fill cells no word occupies.
    pub fill_blanks: FillMode,
    /// Tolerate leftover letters when `fill_blanks` is a fixed pool.
    pub allow_extra_blanks: bool,
    /// Fresh-grid attempts per grid size before growing.
    pub max_attempts: usize,
    /// How many times the grid may grow by one cell in each dimension.
    pub max_grid_growth: usize,
    /// Keep only maximum-overlap placements when choosing a word's spot.
    pub prefer_overlap: bool,
    /// Lax builds only: how many words may be dropped entirely when no full
    /// arrangement exists. Ignored by [`new_puzzle`].
    pub allowed_missing_words: usize,
}

impl Default for PuzzleOptions {
    fn default() -> PuzzleOptions {
        PuzzleOptions {
            width: None,
            height: None,
            orientations: ALL_ORIENTATIONS.to_vec(),
            fill_blanks: FillMode::Random,
            allow_extra_blanks: true,
            max_attempts: 3,
            max_grid_growth: 10,
            prefer_overlap: true,
            allowed_missing_words: 0,
        }
    }
}

/// Mutable state of one build call: the current grid size and how many times
/// it has grown. Local by construction, so concurrent builds cannot leak
/// state into each other.
struct BuildSession {
    width: usize,
    height: usize,
    growths: usize,
}

/// Builds a puzzle containing every word, using a thread-local RNG.
///
/// See [`new_puzzle_with_rng`] for the full contract; prefer that variant
/// when reproducibility matters (tests, seeded CLI runs).
///
/// # Errors
///
/// Same as [`new_puzzle_with_rng`].
pub fn new_puzzle(words: &[&str], options: &PuzzleOptions) -> Result<Grid, BuildError> {
    new_puzzle_with_rng(words, options, &mut rand::thread_rng())
}

/// Builds a puzzle containing every word.
///
/// Words are committed longest-first (ties broken alphabetically): the
/// longest words are the tightest constraint and placing them into an empty
/// grid first gives the search the best odds. Placement order is a
/// heuristic, not a correctness requirement.
///
/// # Errors
///
/// - [`BuildError::EmptyInput`] if `words` is empty.
/// - [`BuildError::GridUnsatisfiable`] if no arrangement was found within
///   the attempt and growth budgets; carries the final attempted dimensions.
/// - [`BuildError::InsufficientFillLetters`] / [`BuildError::UnusedFillLetters`]
///   if a fixed fill-letter pool mismatched the grid's blank count.
pub fn new_puzzle_with_rng<R: Rng>(
    words: &[&str],
    options: &PuzzleOptions,
    rng: &mut R,
) -> Result<Grid, BuildError> {
    if words.is_empty() {
        return Err(BuildError::EmptyInput);
    }

    let mut word_list: Vec<&str> = words.to_vec();
    word_list.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    // word_list[0] is the longest after the sort above.
    let max_word_len = word_list[0].chars().count();

    let mut session = BuildSession {
        width: options.width.unwrap_or(max_word_len),
        height: options.height.unwrap_or(max_word_len),
        growths: 0,
    };

    let mut grid = loop {
        let mut completed = None;

        for attempt in 1..=options.max_attempts {
            if let Some(grid) =
                fill_puzzle(&word_list, session.width, session.height, options, rng)
            {
                debug!(
                    "placed all {} words on attempt {attempt} at {}x{}",
                    word_list.len(),
                    session.width,
                    session.height,
                );
                completed = Some(grid);
                break;
            }
        }

        if let Some(grid) = completed {
            break grid;
        }

        if session.growths >= options.max_grid_growth {
            return Err(BuildError::GridUnsatisfiable {
                width: session.width,
                height: session.height,
            });
        }

        debug!(
            "no valid {}x{} grid found after {} attempts, trying with a bigger grid",
            session.width, session.height, options.max_attempts,
        );
        session.growths += 1;
        session.width += 1;
        session.height += 1;
    };

    fill_blanks(&mut grid, options, rng)?;

    Ok(grid)
}

/// Builds a puzzle, tolerating up to `allowed_missing_words` dropped words,
/// using a thread-local RNG. See [`new_puzzle_lax_with_rng`].
///
/// # Errors
///
/// Same as [`new_puzzle_lax_with_rng`].
pub fn new_puzzle_lax(words: &[&str], options: &PuzzleOptions) -> Result<Grid, BuildError> {
    new_puzzle_lax_with_rng(words, options, &mut rand::thread_rng())
}

/// Builds a puzzle, dropping words when no full arrangement exists.
///
/// First attempts a strict build with the full list. On failure, if the
/// missing-word budget is not exhausted, retries once per word with that
/// single word removed, recursing so that deeper attempts may drop further
/// words as the budget decrements. The first sub-attempt that succeeds wins;
/// if none does, the original failure propagates unchanged.
///
/// # Errors
///
/// Same set as [`new_puzzle_with_rng`], after exhausting removal attempts.
pub fn new_puzzle_lax_with_rng<R: Rng>(
    words: &[&str],
    options: &PuzzleOptions,
    rng: &mut R,
) -> Result<Grid, BuildError> {
    lax_attempt(words, options, options.allowed_missing_words, rng)
}

fn lax_attempt<R: Rng>(
    words: &[&str],
    options: &PuzzleOptions,
    missing_budget: usize,
    rng: &mut R,
) -> Result<Grid, BuildError> {
    let err = match new_puzzle_with_rng(words, options, rng) {
        Ok(grid) => return Ok(grid),
        Err(err) => err,
    };

    if missing_budget == 0 {
        return Err(err);
    }

    for skip in 0..words.len() {
        let mut shorter = words.to_vec();
        let dropped = shorter.remove(skip);

        if let Ok(grid) = lax_attempt(&shorter, options, missing_budget - 1, rng) {
            debug!("solution found without word \"{dropped}\"");
            return Ok(grid);
        }
    }

    Err(err)
}

/// One full pass: fresh grid, every word placed in order. Returns `None` as
/// soon as any word has no candidate placement.
fn fill_puzzle<R: Rng>(
    word_list: &[&str],
    width: usize,
    height: usize,
    options: &PuzzleOptions,
    rng: &mut R,
) -> Option<Grid> {
    let mut grid = Grid::new(width, height);

    for word in word_list {
        if !place_word(&mut grid, word, options, rng) {
            return None;
        }
    }

    Some(grid)
}

/// Finds the best locations for `word` and commits one of them, chosen
/// uniformly at random. Returns false if the word fits nowhere.
fn place_word<R: Rng>(
    grid: &mut Grid,
    word: &str,
    options: &PuzzleOptions,
    rng: &mut R,
) -> bool {
    let locations =
        find_best_locations(grid, &options.orientations, options.prefer_overlap, word);

    let Some(placement) = locations.choose(rng) else {
        return false;
    };

    for (i, letter) in word.chars().enumerate() {
        let (x, y) = placement.orientation.step(placement.x, placement.y, i);
        grid.set(x, y, letter);
    }

    true
}

/// Fills every blank cell per the configured [`FillMode`].
fn fill_blanks<R: Rng>(
    grid: &mut Grid,
    options: &PuzzleOptions,
    rng: &mut R,
) -> Result<(), BuildError> {
    let filled = match &options.fill_blanks {
        FillMode::Off => return Ok(()),

        FillMode::Random => grid.fill_blank_cells(|| {
            Some(FILL_LETTERS[rng.gen_range(0..FILL_LETTERS.len())] as char)
        }),

        FillMode::Letters(pool) => {
            let mut letters = pool.chars();
            let mut missing = 0;

            let filled = grid.fill_blank_cells(|| {
                let next = letters.next();
                if next.is_none() {
                    missing += 1;
                }
                next
            });

            if missing > 0 {
                return Err(BuildError::InsufficientFillLetters { missing });
            }

            let leftover = letters.count();
            if leftover > 0 && !options.allow_extra_blanks {
                return Err(BuildError::UnusedFillLetters { leftover });
            }

            filled
        }

        FillMode::Generator(generator) => grid.fill_blank_cells(|| Some(generator())),
    };

    let total = grid.width() * grid.height();
    let word_letter_percent = 100.0 * (1.0 - filled as f64 / total as f64);
    debug!("blanks filled with {filled} letters - final grid is {word_letter_percent:.0}% word letters");

    Ok(())
}
