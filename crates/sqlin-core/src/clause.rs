//! SQL `IN` clause formatting

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

const OPEN: &str = "IN ('";
const SEPARATOR: &str = "','";
const CLOSE: &str = "')";

/// Clause formatting options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseOptions {
    /// Double any single quote inside a name (`o'brien` -> `o''brien`).
    /// Off by default: names are emitted verbatim.
    #[serde(default)]
    pub escape_quotes: bool,
}

/// Escape a value for use inside a single-quoted SQL literal
pub fn escape_literal(value: &str) -> Cow<'_, str> {
    if value.contains('\'') {
        Cow::Owned(value.replace('\'', "''"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Format names as `IN ('a','b','c')`.
///
/// No names gives `IN ('')`.
pub fn format_in_clause<S: AsRef<str>>(names: &[S], options: &ClauseOptions) -> String {
    let mut output = String::from(OPEN);

    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            output.push_str(SEPARATOR);
        }
        let name = name.as_ref();
        if options.escape_quotes {
            output.push_str(&escape_literal(name));
        } else {
            output.push_str(name);
        }
    }

    output.push_str(CLOSE);
    output
}
