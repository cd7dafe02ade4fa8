//! Whitespace normalization for extracted code blocks
//!
//! Code blocks are usually indented to sit nicely inside the surrounding
//! markup, and the opening/closing tags tend to leave a stray newline on each
//! end. `clean` trims those artifacts and removes the common indentation so
//! the block renders flush left:
//!
//! 1. Leading newlines and trailing newline-plus-whitespace runs are cut.
//! 2. The leading whitespace run of the trimmed text, if any, is taken as the
//!    common indent and removed from every line that is not blank and not
//!    all-whitespace.
//! 3. If there was no leading whitespace run, the trimmed text is returned
//!    as-is.
//! 4. When dedenting did happen, a single newline is put back at the front so
//!    callers keep the visual start-of-block gap (line numbering relies on
//!    this).
//!
//! The indent is removed as a plain substring replacement of its first
//! occurrence per line, not a minimum-common-indent computation. A line with
//! less indentation than the first significant line simply doesn't start with
//! the run and is left alone (unless the run happens to appear later in the
//! line). That asymmetry is intentional and kept as-is.

use once_cell::sync::Lazy;
use regex::Regex;

/// Strips leading newlines and trailing newline-plus-whitespace sequences.
/// Note a lone trailing newline survives: the trailing alternative requires
/// whitespace after the newline run.
static EDGE_TRIM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\n+|\n+\s+$").unwrap());

/// Matches the leading whitespace run used as the common indent.
static LEADING_INDENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+").unwrap());

/// Trim tag artifacts off both ends and dedent the block.
pub fn clean(text: &str) -> String {
    let trimmed = EDGE_TRIM_REGEX.replace_all(text, "");

    let indent = LEADING_INDENT_REGEX
        .find(&trimmed)
        .map(|found| found.as_str().to_string());
    let indent = match indent {
        Some(indent) => indent,
        None => return trimmed.into_owned(),
    };

    let dedented = trimmed
        .split('\n')
        .map(|line| {
            if line.is_empty() || line.chars().all(char::is_whitespace) {
                line.to_string()
            } else {
                line.replacen(&indent, "", 1)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("\n{}", dedented)
}
