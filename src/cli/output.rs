//! Handles user-facing output for the CLI.
//!
//! Errors go through `diagnostics::print_error`; this module covers the
//! success path.

use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Prints the post-generation summary line.
pub fn print_summary(test_count: usize, output_path: &Path) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    let plural = if test_count == 1 { "" } else { "s" };
    println!(
        "Generated {} test{} in {}",
        test_count,
        plural,
        output_path.display()
    );
    let _ = stdout.reset();
}
