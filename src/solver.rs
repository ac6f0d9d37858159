//! `solver` — recovers the coordinates of known words from a finished grid.
//!
//! The solver reuses the placement search in overlap-maximizing mode: a word
//! is present exactly when some placement overlaps the existing letters along
//! its entire length. It never mutates the grid and is safe to call
//! repeatedly.
//!
//! Presence is detected purely by overlap equivalence, not by what the
//! builder actually placed: a coincidental full-overlap occurrence (letters
//! of other words happening to spell a query word) is indistinguishable from
//! an intended one. This is a documented ambiguity, not a defect.
//!
//! # Examples
//!
//! ```
//! use wordprowl::grid::Grid;
//! use wordprowl::solver::solve_puzzle;
//!
//! let grid: Grid = "DOG\n   \n   ".parse()?;
//! let solution = solve_puzzle(&grid, &["DOG", "DOGMA"]);
//!
//! assert_eq!(solution.found.len(), 1);
//! assert_eq!(solution.not_found, vec!["DOGMA".to_string()]);
//! # Ok::<(), wordprowl::grid::GridParseError>(())
//! ```

use crate::grid::Grid;
use crate::orientation::ALL_ORIENTATIONS;
use crate::search::{find_best_locations, Placement};

/// The partition of a word list by whether each word was located in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Words located with full overlap, with their coordinates and
    /// orientation. Order follows the input word list.
    pub found: Vec<Placement>,
    /// Words with no full-overlap placement anywhere in the grid.
    pub not_found: Vec<String>,
}

/// Locates each of `words` in a finished grid.
///
/// Words are processed in input order (not sorted). For each, the placement
/// search runs read-only over all eight orientations with overlap preference
/// on; the word counts as found iff the first surviving placement overlaps
/// existing letters along the word's entire length. A partial overlap —
/// e.g. looking for "DOGMA" in a grid that only contains "DOG" — is never
/// mistaken for a find.
///
/// Calling this twice on the same grid and word list yields identical
/// partitions: the scan order is deterministic and nothing is mutated.
#[must_use]
pub fn solve_puzzle(grid: &Grid, words: &[&str]) -> Solution {
    let mut found = Vec::new();
    let mut not_found = Vec::new();

    for &word in words {
        let locations = find_best_locations(grid, &ALL_ORIENTATIONS, true, word);

        match locations.first() {
            Some(location) if location.overlap == location.len() => {
                found.push(location.clone());
            }
            _ => not_found.push(word.to_string()),
        }
    }

    Solution { found, not_found }
}
