//! `search` — the placement search at the heart of both building and solving.
//!
//! [`find_best_locations`] enumerates every origin × allowed orientation for
//! one word, scores each candidate by how many letters it shares with what is
//! already on the board, and returns the surviving candidate set. The builder
//! then commits one candidate chosen at random; the solver runs the same scan
//! read-only against a finished grid and looks for a full-length overlap.
//!
//! The scan is pruned with the per-orientation `fits`/`skip` rules from
//! [`crate::orientation`], which lets it leap over whole infeasible ranges
//! instead of re-checking every cell.

use crate::grid::Grid;
use crate::orientation::Orientation;

/// One way of fitting one word into the grid.
///
/// Produced by [`find_best_locations`] and returned to callers of the solver
/// inside [`crate::solver::Solution::found`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The word being placed.
    pub word: String,
    /// X coordinate of the word's first letter.
    pub x: usize,
    /// Y coordinate of the word's first letter.
    pub y: usize,
    /// The orientation the word runs along.
    pub orientation: Orientation,
    /// Number of cells whose letter already matched the grid.
    pub overlap: usize,
}

impl Placement {
    fn new(word: &str, x: usize, y: usize, orientation: Orientation, overlap: usize) -> Placement {
        Placement {
            word: word.to_string(),
            x,
            y,
            orientation,
            overlap,
        }
    }

    /// Number of letters in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// True for the (unused in practice) empty word.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// The cells the word occupies, in letter order.
    #[must_use]
    pub fn cells(&self) -> Vec<(usize, usize)> {
        (0..self.len())
            .map(|i| self.orientation.step(self.x, self.y, i))
            .collect()
    }

    /// The cell of the word's last letter.
    #[must_use]
    pub fn end(&self) -> (usize, usize) {
        self.orientation.step(self.x, self.y, self.len().saturating_sub(1))
    }
}

/// Walks `word`'s cells from `(x, y)` along `orientation` and reports how
/// compatible the placement is with the current grid.
///
/// Returns `Some(n)` where `n` counts the cells whose letter already matched
/// (a blank cell is compatible but does not count), or `None` as soon as any
/// cell holds a different letter.
///
/// A full-length overlap (`n == word length`) is reported, not rejected: the
/// builder accepts it (only an exact duplicate word can produce one) and the
/// solver's presence test depends on it.
///
/// The caller must have verified `fits` for this origin; every stepped cell
/// is assumed to be in bounds.
#[must_use]
pub fn calc_overlap(
    letters: &[char],
    grid: &Grid,
    x: usize,
    y: usize,
    orientation: Orientation,
) -> Option<usize> {
    let mut overlap = 0;

    for (i, &letter) in letters.iter().enumerate() {
        let (cx, cy) = orientation.step(x, y, i);

        match grid.get(cx, cy) {
            Some(existing) if existing == letter => overlap += 1,
            Some(_) => return None,
            None => {}
        }
    }

    Some(overlap)
}

/// Finds every acceptable placement for `word` in the current grid.
///
/// For each allowed orientation the grid is scanned in raster order from
/// `(0, 0)`. Infeasible origins are leapt over with the orientation's `skip`
/// rule; feasible ones are scored with [`calc_overlap`].
///
/// Recording policy (ties are retained, not just the most recent):
/// - `prefer_overlap` true: a candidate is recorded when its overlap is at
///   least the running maximum, and the final list is pruned to candidates
///   at the global maximum.
/// - `prefer_overlap` false: every letter-compatible candidate is recorded
///   and the list is returned unpruned.
///
/// The caller picks one placement from the result — uniformly at random in
/// the builder, first-in-scan-order in the solver.
#[must_use]
pub fn find_best_locations(
    grid: &Grid,
    orientations: &[Orientation],
    prefer_overlap: bool,
    word: &str,
) -> Vec<Placement> {
    let letters: Vec<char> = word.chars().collect();
    let len = letters.len();
    let (width, height) = (grid.width(), grid.height());

    let mut locations = Vec::new();
    // We start looking at overlap = 0, so zero-overlap placements are
    // candidates until something better shows up.
    let mut max_overlap = 0;

    for &orientation in orientations {
        let (mut x, mut y) = (0, 0);

        while y < height {
            if !orientation.fits(x, y, width, height, len) {
                // Skip the whole range of origins this failure rules out.
                let (next_x, next_y) = orientation.skip(x, y, len);
                x = next_x;
                y = next_y;
                continue;
            }

            if let Some(overlap) = calc_overlap(&letters, grid, x, y, orientation) {
                if overlap >= max_overlap || !prefer_overlap {
                    max_overlap = max_overlap.max(overlap);
                    locations.push(Placement::new(word, x, y, orientation, overlap));
                }
            }

            x += 1;
            if x >= width {
                x = 0;
                y += 1;
            }
        }
    }

    if prefer_overlap {
        // Earlier candidates may have been recorded before the maximum was
        // known; keep only the ones that tie it.
        locations.retain(|location| location.overlap >= max_overlap);
    }

    locations
}
