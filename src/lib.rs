// Reusable library API — the CLI and the auxiliary bins build on this
pub mod builder;
pub mod errors;
pub mod grid;
pub mod log;
pub mod orientation;
pub mod search;
pub mod solver;

pub use builder::{new_puzzle, new_puzzle_lax, PuzzleOptions};
pub use errors::BuildError;
pub use grid::Grid;
pub use orientation::{Orientation, ALL_ORIENTATIONS};
pub use search::Placement;
pub use solver::{solve_puzzle, Solution};
