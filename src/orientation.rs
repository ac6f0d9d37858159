//! `orientation` — the eight directions a word may run through the grid.
//!
//! Each orientation knows three pure functions:
//! - [`Orientation::step`]: where the letter `i` positions from the origin lands.
//! - [`Orientation::fits`]: whether a word of a given length stays in bounds.
//! - [`Orientation::skip`]: where the raster scan should jump after `fits`
//!   fails, bypassing the whole contiguous infeasible range for that
//!   orientation.
//!
//! The scan in [`crate::search`] only calls `step` on origins that passed
//! `fits`, so the backwards/upwards variants can subtract coordinates without
//! underflow checks.

use std::fmt;
use std::str::FromStr;

/// One of the eight fixed stepping patterns a word may follow.
///
/// Names mirror the conventional word-search vocabulary: `Back` runs
/// right-to-left, `Up` runs bottom-to-top, and the diagonals combine the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Right to left.
    HorizontalBack,
    /// Top to bottom.
    Vertical,
    /// Bottom to top.
    VerticalUp,
    /// Down and to the right.
    Diagonal,
    /// Down and to the left.
    DiagonalBack,
    /// Up and to the right.
    DiagonalUp,
    /// Up and to the left.
    DiagonalUpBack,
}

/// Every orientation, in the order the placement scan tries them.
pub const ALL_ORIENTATIONS: [Orientation; 8] = [
    Orientation::Horizontal,
    Orientation::HorizontalBack,
    Orientation::Vertical,
    Orientation::VerticalUp,
    Orientation::Diagonal,
    Orientation::DiagonalBack,
    Orientation::DiagonalUp,
    Orientation::DiagonalUpBack,
];

impl Orientation {
    /// Returns the cell `i` positions away from `(x, y)` along this
    /// orientation.
    ///
    /// Callers must have checked [`Orientation::fits`] for the whole word
    /// first; the `Back`/`Up` variants subtract and would underflow on an
    /// unchecked origin.
    #[must_use]
    pub fn step(self, x: usize, y: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (x + i, y),
            Orientation::HorizontalBack => (x - i, y),
            Orientation::Vertical => (x, y + i),
            Orientation::VerticalUp => (x, y - i),
            Orientation::Diagonal => (x + i, y + i),
            Orientation::DiagonalBack => (x - i, y + i),
            Orientation::DiagonalUp => (x + i, y - i),
            Orientation::DiagonalUpBack => (x - i, y - i),
        }
    }

    /// Returns true if a word of length `len` starting at `(x, y)` stays
    /// within `[0, width) × [0, height)` when walked along this orientation.
    ///
    /// The origin itself is also bounds-checked: the raster scan can land on
    /// `x >= width` immediately after a [`Orientation::skip`], and that
    /// origin must be rejected here rather than read out of range later.
    #[must_use]
    pub fn fits(self, x: usize, y: usize, width: usize, height: usize, len: usize) -> bool {
        if x >= width || y >= height {
            return false;
        }

        match self {
            Orientation::Horizontal => width >= x + len,
            Orientation::HorizontalBack => x + 1 >= len,
            Orientation::Vertical => height >= y + len,
            Orientation::VerticalUp => y + 1 >= len,
            Orientation::Diagonal => width >= x + len && height >= y + len,
            Orientation::DiagonalBack => x + 1 >= len && height >= y + len,
            Orientation::DiagonalUp => width >= x + len && y + 1 >= len,
            Orientation::DiagonalUpBack => x + 1 >= len && y + 1 >= len,
        }
    }

    /// Returns the next origin the raster scan should probe after
    /// [`Orientation::fits`] failed at `(x, y)` for a word of length `len`.
    ///
    /// A failed check rules out a whole contiguous range of origins — e.g. a
    /// horizontal word that does not fit at some `x` fits nowhere further
    /// right in the same row — so the scan can leap instead of advancing one
    /// cell at a time. Every skip strictly advances in raster order, even in
    /// the degenerate case where `len` exceeds a grid axis, so the scan
    /// always terminates.
    #[must_use]
    pub fn skip(self, x: usize, y: usize, len: usize) -> (usize, usize) {
        debug_assert!(len > 0, "words must be non-empty");

        match self {
            // The rest of the row is just as infeasible.
            Orientation::Horizontal => (0, y + 1),
            // Nothing left of x = len - 1 can hold the word. If we are
            // already there (the word is wider than the grid), move on a row
            // so the scan keeps advancing.
            Orientation::HorizontalBack => {
                if x + 1 >= len {
                    (len - 1, y + 1)
                } else {
                    (len - 1, y)
                }
            }
            // Failure depends only on y, so no later row fits either; leap a
            // word length ahead to end the scan quickly.
            Orientation::Vertical => (0, y + len),
            // Every row above len - 1 fails regardless of x.
            Orientation::VerticalUp => (0, len - 1),
            Orientation::Diagonal => (0, y + 1),
            Orientation::DiagonalBack => {
                if x + 1 >= len {
                    (len - 1, y + 1)
                } else {
                    (len - 1, y)
                }
            }
            Orientation::DiagonalUp => {
                if y + 1 >= len {
                    (0, y + 1)
                } else {
                    (0, len - 1)
                }
            }
            Orientation::DiagonalUpBack => {
                if x + 1 >= len {
                    (len - 1, y + 1)
                } else {
                    (len - 1, y)
                }
            }
        }
    }

    /// Returns the opposite orientation.
    ///
    /// Stepping `i` positions along an orientation and then `i` positions
    /// along its mirror returns to the starting cell.
    #[must_use]
    pub fn mirror(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::HorizontalBack,
            Orientation::HorizontalBack => Orientation::Horizontal,
            Orientation::Vertical => Orientation::VerticalUp,
            Orientation::VerticalUp => Orientation::Vertical,
            Orientation::Diagonal => Orientation::DiagonalUpBack,
            Orientation::DiagonalBack => Orientation::DiagonalUp,
            Orientation::DiagonalUp => Orientation::DiagonalBack,
            Orientation::DiagonalUpBack => Orientation::Diagonal,
        }
    }

    /// The conventional lowerCamelCase tag for this orientation, as accepted
    /// by [`Orientation::from_str`] and printed by `Display`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::HorizontalBack => "horizontalBack",
            Orientation::Vertical => "vertical",
            Orientation::VerticalUp => "verticalUp",
            Orientation::Diagonal => "diagonal",
            Orientation::DiagonalBack => "diagonalBack",
            Orientation::DiagonalUp => "diagonalUp",
            Orientation::DiagonalUpBack => "diagonalUpBack",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized orientation name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown orientation \"{0}\" (expected one of: horizontal, horizontalBack, vertical, verticalUp, diagonal, diagonalBack, diagonalUp, diagonalUpBack)")]
pub struct UnknownOrientation(pub String);

impl FromStr for Orientation {
    type Err = UnknownOrientation;

    fn from_str(s: &str) -> Result<Orientation, UnknownOrientation> {
        ALL_ORIENTATIONS
            .iter()
            .find(|o| o.name() == s)
            .copied()
            .ok_or_else(|| UnknownOrientation(s.to_string()))
    }
}
