//! Defines the command-line surface of the generator.
//!
//! This module uses the `clap` crate with its "derive" feature. The
//! generator takes no options: both the manifest and the output location are
//! fixed relative paths, so the parser's job is to reject stray arguments
//! and provide `--help`/`--version`.

use clap::Parser;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "testgen",
    version,
    about = "Generates tests/test-runner.c from the tests/test.json manifest."
)]
pub struct TestgenArgs {}
