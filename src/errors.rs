//! Error types for puzzle building with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (B001-B004) for documentation lookup:
//!
//! - B001: `EmptyInput` (No words provided)
//! - B002: `GridUnsatisfiable` (No arrangement found within the attempt/growth budgets)
//! - B003: `InsufficientFillLetters` (Fixed fill-letter pool emptied before the grid was full)
//! - B004: `UnusedFillLetters` (Fixed fill-letter pool had letters left over)
//!
//! # Examples
//!
//! ```
//! use wordprowl::builder::{new_puzzle, PuzzleOptions};
//!
//! let options = PuzzleOptions::default();
//! match new_puzzle(&[], &options) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

/// Unified error type for the puzzle builder.
///
/// This consolidates the failure modes of the build pipeline — input
/// validation, the attempt/growth search budgets, and blank filling — so
/// that callers only need to handle a single `Result<_, BuildError>`.
/// All failures are synchronous and reported to the immediate caller; only
/// the lax builder catches and converts them into alternative attempts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// No words were given. Fatal: retrying with the same input cannot
    /// succeed.
    #[error("no words provided")]
    EmptyInput,

    /// No arrangement was found within the attempt and growth budgets.
    /// Carries the final attempted dimensions. Recoverable by the caller
    /// choosing a smaller or different word set.
    #[error("no valid {width}x{height} grid found and not allowed to grow more")]
    GridUnsatisfiable {
        /// Width of the last grid size attempted.
        width: usize,
        /// Height of the last grid size attempted.
        height: usize,
    },

    /// The fixed fill-letter pool ran out before every blank was filled.
    #[error("{missing} fill letters were missing to complete the grid")]
    InsufficientFillLetters {
        /// Number of blank cells left without a letter.
        missing: usize,
    },

    /// The fixed fill-letter pool had letters left over after the grid was
    /// full, and `allow_extra_blanks` was false.
    #[error("{leftover} fill letters were provided but not used")]
    UnusedFillLetters {
        /// Number of pool letters that were never consumed.
        leftover: usize,
    },
}

impl BuildError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BuildError::EmptyInput => "B001",
            BuildError::GridUnsatisfiable { .. } => "B002",
            BuildError::InsufficientFillLetters { .. } => "B003",
            BuildError::UnusedFillLetters { .. } => "B004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            BuildError::EmptyInput => "No words provided",
            BuildError::GridUnsatisfiable { .. } => {
                "No arrangement found within the attempt/growth budgets"
            }
            BuildError::InsufficientFillLetters { .. } => {
                "Fixed fill-letter pool emptied before the grid was full"
            }
            BuildError::UnusedFillLetters { .. } => {
                "Fixed fill-letter pool had letters left over"
            }
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            BuildError::EmptyInput => {
                "The word list was empty, so there is nothing to place. This is a caller \
                 error: retrying without changing the input cannot succeed."
            }
            BuildError::GridUnsatisfiable { .. } => {
                "Every build attempt at every permitted grid size failed to place all of \
                 the words. The error carries the dimensions of the last size attempted. \
                 The strict builder has no partial success mode: either every word is \
                 placed or the call fails."
            }
            BuildError::InsufficientFillLetters { .. } => {
                "Blank filling was configured with a fixed pool of letters and the pool \
                 emptied before every blank cell received one. The pool must contain at \
                 least as many letters as the finished grid has blanks."
            }
            BuildError::UnusedFillLetters { .. } => {
                "Blank filling was configured with a fixed pool of letters, the grid \
                 filled up before the pool emptied, and allow_extra_blanks was false."
            }
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BuildError::EmptyInput => Some("Provide at least one word to place"),
            BuildError::GridUnsatisfiable { .. } => Some(
                "Allow more growth (max_grid_growth), start from a larger grid, or drop \
                 words via the lax builder (allowed_missing_words)",
            ),
            BuildError::InsufficientFillLetters { .. } => {
                Some("Provide a larger fill-letter pool or switch to random filling")
            }
            BuildError::UnusedFillLetters { .. } => Some(
                "Set allow_extra_blanks to true to tolerate leftover letters, or size \
                 the pool to the grid's blank count",
            ),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
