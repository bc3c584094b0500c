//! The testgen command-line interface.
//!
//! This module is the entry point for the binary and orchestrates the core
//! library functions: load the manifest, generate the runner source, write
//! it out.

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::args::TestgenArgs;
use crate::diagnostics::{print_error, TestgenError};
use crate::emit::{self, RUNNER_PATH};
use crate::manifest::{TestSuite, MANIFEST_PATH};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let _args = TestgenArgs::parse();

    match generate_runner() {
        Ok(test_count) => output::print_summary(test_count, Path::new(RUNNER_PATH)),
        Err(e) => {
            let code = e.exit_code();
            print_error(e);
            process::exit(code);
        }
    }
}

/// The whole pipeline, strictly sequential: load, generate, write. Returns
/// the number of tests on success.
fn generate_runner() -> Result<usize, TestgenError> {
    let suite = TestSuite::load(MANIFEST_PATH)?;
    let runner = emit::generate(&suite)?;
    emit::write_runner(RUNNER_PATH, &runner)?;
    Ok(suite.len())
}
