//! Function-name mangling for generated tests.

/// Substituted for every character that is not an ASCII letter or digit.
const PLACEHOLDER: char = '_';

/// Derives the C function name for the descriptor at 0-based position
/// `index` with the given description.
///
/// The name is `test_{index + 1}_` followed by the description with ASCII
/// letters lowercased, ASCII digits kept, and everything else (Unicode,
/// punctuation, whitespace) replaced by `_`. Identical descriptions still
/// yield distinct names because the 1-based index is embedded in the prefix.
///
/// This is the single source of function names: the function emitter and the
/// dispatch-table emitter both call it with the same inputs, so the two can
/// never disagree.
///
/// # Examples
///
/// ```rust
/// use testgen::ident::mangle;
/// assert_eq!(mangle(0, "Foo Bar! 42"), "test_1_foo_bar__42");
/// ```
pub fn mangle(index: usize, description: &str) -> String {
    let mut name = format!("test_{}_", index + 1);
    for c in description.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(PLACEHOLDER);
        }
    }
    name
}
