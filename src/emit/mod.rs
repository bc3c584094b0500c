//! Emission of the generated test-runner source.
//!
//! Each emitter produces one textual region of the runner; [`generate`]
//! substitutes them all into the master template. The emitters derive
//! function names through [`crate::ident::mangle`] with identical inputs, so
//! the function bodies and the dispatch table agree in count, order, and
//! naming with no synchronization of their own.

use std::path::Path;

use crate::diagnostics::{ErrorContext, TestgenError};
use crate::ident;
use crate::manifest::{TestDescriptor, TestSuite};

pub mod escape;
pub mod template;

/// Fixed relative path of the generated runner.
pub const RUNNER_PATH: &str = "tests/test-runner.c";

// ============================================================================
// FRAGMENT EMITTERS
// ============================================================================

fn emit_function(index: usize, test: &TestDescriptor) -> Result<String, TestgenError> {
    let name = ident::mangle(index, &test.description);
    let args = test
        .command
        .iter()
        .map(|arg| escape::render_argument(arg, index, &test.description))
        .collect::<Result<Vec<_>, _>>()?
        .join(", ");
    Ok(template::render(
        template::FUNCTION_TEMPLATE,
        &[("test_name", name.as_str()), ("test_args", args.as_str())],
    ))
}

/// One function definition per descriptor, in manifest order.
pub fn emit_functions(suite: &TestSuite) -> Result<String, TestgenError> {
    let mut out = String::new();
    for (index, test) in suite.descriptors().iter().enumerate() {
        out.push_str(&emit_function(index, test)?);
    }
    Ok(out)
}

/// The `test_func_table[]` array literal. Slot `k` holds the function for
/// descriptor index `k`; this is the generated program's only lookup path.
pub fn emit_dispatch_table(suite: &TestSuite) -> String {
    let rows = suite
        .descriptors()
        .iter()
        .enumerate()
        .map(|(index, test)| format!("    {},", ident::mangle(index, &test.description)))
        .collect::<Vec<_>>()
        .join("\n");
    template::render(template::TABLE_TEMPLATE, &[("test_functions", rows.as_str())])
}

/// One `puts(...)` line per descriptor: the 1-based index right-aligned to
/// width 7, a colon, and the raw description. Quote-escaped, never
/// placeholder-resolved.
pub fn emit_usage(suite: &TestSuite) -> String {
    let mut out = String::new();
    for (index, test) in suite.descriptors().iter().enumerate() {
        let line = format!("{:>7}: {}", index + 1, test.description);
        out.push_str(&format!("    puts(\"{}\");\n", escape::escape_quotes(&line)));
    }
    out
}

// ============================================================================
// ASSEMBLY AND OUTPUT
// ============================================================================

/// Produces the complete runner source for `suite`.
///
/// Fails without producing any text if a command element has an unsupported
/// type; nothing is written to disk by this function.
pub fn generate(suite: &TestSuite) -> Result<String, TestgenError> {
    let functions = emit_functions(suite)?;
    let table = emit_dispatch_table(suite);
    let usage = emit_usage(suite);
    let count = suite.len().to_string();
    Ok(template::render(
        template::RUNNER_TEMPLATE,
        &[
            ("test_funcs", functions.as_str()),
            ("test_funcs_table", table.as_str()),
            ("usage_tests", usage.as_str()),
            ("max_tests", count.as_str()),
        ],
    ))
}

/// Writes the assembled runner to `path`, overwriting existing content.
/// The only file-write side effect in the program.
pub fn write_runner(path: impl AsRef<Path>, contents: &str) -> Result<(), TestgenError> {
    let path = path.as_ref();
    std::fs::write(path, contents).map_err(|e| TestgenError::Io {
        message: format!("failed to write '{}'", path.display()),
        ctx: ErrorContext::with_help(
            "the runner is written to tests/test-runner.c, relative to the working directory",
        ),
        source: Some(Box::new(e)),
    })
}
