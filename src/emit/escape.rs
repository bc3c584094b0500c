//! String-literal escaping and command-argument rendering.

use serde_json::Value;

use crate::diagnostics::{ErrorContext, TestgenError};

/// Marker in string arguments replaced by the 1-based test number.
pub const INDEX_PLACEHOLDER: char = '#';

/// Escapes text for embedding in a C double-quoted string literal.
///
/// Only `"` is escaped. Backslashes and control characters already present in
/// the input pass through unchanged; callers own their acceptability.
pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}

/// Replaces every [`INDEX_PLACEHOLDER`] in `text` with the decimal 1-based
/// number of the descriptor at 0-based position `index`.
pub fn resolve_placeholders(text: &str, index: usize) -> String {
    text.replace(INDEX_PLACEHOLDER, &(index + 1).to_string())
}

/// Renders one `command` element as C argument text.
///
/// Strings are placeholder-resolved, then quote-escaped, then quoted.
/// Integers render as plain decimal. Anything else (float, list, object,
/// bool, null) aborts the run with an unsupported-argument error naming the
/// offending value and the descriptor it belongs to.
pub fn render_argument(
    arg: &Value,
    index: usize,
    description: &str,
) -> Result<String, TestgenError> {
    match arg {
        Value::String(text) => {
            let resolved = resolve_placeholders(text, index);
            Ok(format!("\"{}\"", escape_quotes(&resolved)))
        }
        Value::Number(n) if !n.is_f64() => Ok(n.to_string()),
        other => Err(TestgenError::UnsupportedArgument {
            message: format!(
                "{} in the command of test {} ('{}')",
                other,
                index + 1,
                description
            ),
            ctx: ErrorContext::with_help("command elements must be JSON strings or integers"),
        }),
    }
}
