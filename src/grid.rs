//! `grid` — the rectangular letter board puzzles are built on.
//!
//! A [`Grid`] maps `(x, y)` to either a letter or a blank. It starts empty,
//! is mutated in place as the builder commits words, and is discarded
//! wholesale when a build attempt fails (there is no incremental undo).
//!
//! The textual form produced by [`Grid::render`] — rows joined by newlines,
//! blanks rendered as spaces — is parseable back via `FromStr`, which the
//! tests and the solver path use to load known boards.

use std::fmt;
use std::str::FromStr;

/// A `width × height` board of optional letters.
///
/// Cells are addressed as `(x, y)` with `(0, 0)` in the top-left corner,
/// `x` growing rightwards and `y` growing downwards. The grid is always
/// rectangular; dimensions change only when the builder grows the board
/// between attempts, which allocates a fresh grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates an empty grid of the given dimensions.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Width of the grid in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the letter at `(x, y)`, or `None` for a blank cell.
    ///
    /// # Panics
    /// Panics if `(x, y)` is out of bounds. The placement scan guards every
    /// lookup with [`crate::orientation::Orientation::fits`] first.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.cells[y * self.width + x]
    }

    /// Writes `letter` into `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, letter: char) {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.cells[y * self.width + x] = Some(letter);
    }

    /// Number of cells still blank.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.width)
    }

    /// Visits every cell in raster order, replacing blanks with the letter
    /// produced by `fill`. Returns the number of cells that were filled.
    ///
    /// `fill` may decline (return `None`) when it has run out of letters;
    /// the cell is then left blank and counted separately by the caller.
    pub(crate) fn fill_blank_cells<F>(&mut self, mut fill: F) -> usize
    where
        F: FnMut() -> Option<char>,
    {
        let mut filled = 0;

        for cell in &mut self.cells {
            if cell.is_none() {
                if let Some(letter) = fill() {
                    *cell = Some(letter);
                    filled += 1;
                }
            }
        }

        filled
    }

    /// Formats the grid as one string: rows joined by newlines, blank cells
    /// rendered as spaces. Intended for diagnostic display; the inverse is
    /// `str::parse::<Grid>()`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.unwrap_or(' '))?;
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a malformed grid string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    /// The input contained no lines at all.
    #[error("empty grid")]
    Empty,

    /// A row's length disagreed with the first row's.
    #[error("line {line}: expected {expected} cells, found {found}")]
    NotRectangular {
        /// 1-based line number of the offending row.
        line: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of the offending row.
        found: usize,
    },
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses the format produced by [`Grid::render`]: one line per row,
    /// spaces for blank cells. Every line must have the same length.
    fn from_str(s: &str) -> Result<Grid, GridParseError> {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;

        for (i, line) in s.lines().enumerate() {
            let row: Vec<Option<char>> = line
                .chars()
                .map(|ch| if ch == ' ' { None } else { Some(ch) })
                .collect();

            match width {
                None => width = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(GridParseError::NotRectangular {
                        line: i + 1,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }

            cells.extend(row);
            height += 1;
        }

        let Some(width) = width else {
            return Err(GridParseError::Empty);
        };

        Ok(Grid { width, height, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_blank() {
        let grid = Grid::new(4, 3);

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.blank_count(), 12);
        assert_eq!(grid.get(3, 2), None);
    }

    #[test]
    fn set_then_get() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 2, 'Q');

        assert_eq!(grid.get(1, 2), Some('Q'));
        assert_eq!(grid.blank_count(), 8);
    }

    #[test]
    fn render_blanks_as_spaces() {
        let mut grid = Grid::new(3, 2);
        grid.set(0, 0, 'C');
        grid.set(1, 0, 'A');
        grid.set(2, 0, 'T');

        assert_eq!(grid.render(), "CAT\n   ");
    }

    #[test]
    fn parse_round_trip() {
        let source = "CAT\nO  \nW Z";
        let grid: Grid = source.parse().unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(0, 1), Some('O'));
        assert_eq!(grid.get(1, 1), None);
        assert_eq!(grid.render(), source);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert_eq!(
            "ABC\nAB".parse::<Grid>(),
            Err(GridParseError::NotRectangular { line: 2, expected: 3, found: 2 }),
        );
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!("".parse::<Grid>(), Err(GridParseError::Empty));
    }

    #[test]
    fn fill_blank_cells_only_touches_blanks() {
        let mut grid: Grid = "A \n B".parse().unwrap();
        let filled = grid.fill_blank_cells(|| Some('x'));

        assert_eq!(filled, 2);
        assert_eq!(grid.render(), "Ax\nxB");
    }
}
