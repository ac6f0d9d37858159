//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `BuildError` implementation via its
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordprowl::errors::BuildError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            let code = error.code();
            let description = error.description();
            let details = error.details();
            let help = error.help();

            println!("### {}: {}\n", code, description);
            println!("**Details:** {}\n", details);

            if let Some(help_text) = help {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// Helper to create all `BuildError` variants for documentation
fn all_build_errors() -> Vec<BuildError> {
    vec![
        BuildError::EmptyInput,
        BuildError::GridUnsatisfiable { width: 12, height: 12 },
        BuildError::InsufficientFillLetters { missing: 4 },
        BuildError::UnusedFillLetters { leftover: 2 },
    ]
}

fn main() {
    println!("# Wordprowl Error Codes\n");
    println!(
        "This document is generated from the error enum itself; do not edit by hand.\n"
    );

    println!("## Build Errors (B001-B004)\n");
    generate_error_docs!(all_build_errors());
}
