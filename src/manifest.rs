//! Loading of the declarative test manifest.
//!
//! The manifest is a JSON array of test descriptors, read from a fixed
//! relative path. Order is significant: a descriptor's position determines
//! its generated function name, its placeholder substitution value, and its
//! slot in the dispatch table.

use std::path::Path;
use std::sync::Arc;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use serde_json::Value;

use crate::diagnostics::{ErrorContext, TestgenError};

/// Fixed relative path of the test manifest.
pub const MANIFEST_PATH: &str = "tests/test.json";

/// One entry of the test manifest.
///
/// `command` elements are kept as raw JSON values; the emitter converts them
/// to C arguments and rejects anything that is not a string or an integer,
/// naming the offending value verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct TestDescriptor {
    pub description: String,
    pub command: Vec<Value>,
}

/// The ordered sequence of all test descriptors, as loaded.
#[derive(Debug, Clone)]
pub struct TestSuite {
    descriptors: Vec<TestDescriptor>,
}

impl TestSuite {
    /// Reads and parses the manifest at `path`.
    ///
    /// An unreadable file and malformed JSON are the same failure kind: the
    /// run aborts with a manifest error and no suite is produced.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TestgenError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| TestgenError::Manifest {
            message: format!("failed to read '{}'", path.display()),
            ctx: ErrorContext::with_help(
                "the test manifest is expected at tests/test.json, relative to the working directory",
            ),
            source: Some(Box::new(e)),
        })?;
        Self::from_json(&path.display().to_string(), &text)
    }

    /// Parses manifest text. `name` labels the source in diagnostics.
    pub fn from_json(name: &str, text: &str) -> Result<Self, TestgenError> {
        const HELP: &str =
            "the manifest must be a JSON array of objects with \"description\" and \"command\" fields";
        let descriptors: Vec<TestDescriptor> = serde_json::from_str(text).map_err(|e| {
            let ctx = match span_at(text, e.line(), e.column()) {
                Some(span) => ErrorContext::with_all(
                    Arc::new(NamedSource::new(name, text.to_string())),
                    span,
                    HELP.to_string(),
                ),
                None => ErrorContext::with_help(HELP),
            };
            TestgenError::Manifest {
                message: format!("'{name}' is not a valid test manifest"),
                ctx,
                source: Some(Box::new(e)),
            }
        })?;
        Ok(Self { descriptors })
    }

    /// The descriptors in manifest order.
    pub fn descriptors(&self) -> &[TestDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Converts a 1-based line/column position into a one-character span, for
/// labeling parse errors in the manifest text. Returns `None` when the parser
/// reported no position (line 0).
fn span_at(text: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    let mut current = 1;
    for l in text.split_inclusive('\n') {
        if current == line {
            offset += column.saturating_sub(1).min(l.len());
            break;
        }
        offset += l.len();
        current += 1;
    }
    let start = offset.min(text.len());
    let end = (start + 1).min(text.len());
    Some(SourceSpan::from(start..end))
}
