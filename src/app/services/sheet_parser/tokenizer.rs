//! Line tokenization for the CSV export
//!
//! A field is either a double-quoted run (which may contain commas) or a run
//! of non-comma characters. Each field ends at the next comma or at the end of
//! the line, with any whitespace before the comma ignored. Empty cells yield
//! empty tokens so token positions always line up with sheet columns.

use std::sync::LazyLock;

use regex::Regex;

/// One field anchored at the start of the remaining input
///
/// Group 1 is a quoted field including its quotes, group 2 an unquoted field.
static FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\A\s*(?:(".*?")|([^,]*?))\s*(?:,|\z)"#).expect("field pattern is valid")
});

/// Split a line into cleaned tokens
///
/// Returns an empty vector when the line carries no field at all: blank
/// lines, or lines made only of separators. A quoted field counts even when
/// it is empty.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut tokens = Vec::new();
    let mut any_quoted = false;
    let mut rest = line;

    loop {
        let Some(captures) = FIELD_PATTERN.captures(rest) else {
            break;
        };
        let whole = captures.get(0).map_or("", |m| m.as_str());
        let raw = match captures.get(1) {
            Some(quoted) => {
                any_quoted = true;
                quoted.as_str()
            }
            None => captures.get(2).map_or("", |m| m.as_str()),
        };
        tokens.push(clean_token(raw));

        rest = &rest[whole.len()..];
        if !whole.ends_with(',') {
            break;
        }
    }

    if !any_quoted && tokens.iter().all(|token| token.is_empty()) {
        tokens.clear();
    }
    tokens
}

/// Strip one surrounding double quote from each end, then trim whitespace
pub fn clean_token(raw: &str) -> String {
    let value = raw.strip_prefix('"').unwrap_or(raw);
    let value = value.strip_suffix('"').unwrap_or(value);
    value.trim().to_string()
}
