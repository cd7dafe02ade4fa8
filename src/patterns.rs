//! Pattern rule model
//!
//! A pattern rule names one token class and describes how to recognize and
//! wrap it. Rules are grouped into ordered pattern sets; order is priority,
//! the first rule that matches at the front of the remaining input wins.
//!
//! ## Anchoring contract
//!
//! Every matcher regex must be written to match only at the start of its
//! input (an explicit `^` anchor). The tokenizer consumes the whole match
//! length from the front of the remaining input and ignores any match that
//! starts later, so an unanchored rule yields missing wraps rather than an
//! error. This is a caller contract, not a runtime-checked invariant.

use regex::Regex;

/// How a pattern rule recognizes and wraps text.
///
/// `Wrapped` carries literal prefix/suffix strings that are emitted
/// immediately outside the `<span>` markup. They are not part of the wrapped
/// capture and are never re-scanned. An empty prefix or suffix is treated as
/// absent.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// A start-anchored regex whose first capture group is the text to wrap.
    Bare(Regex),
    /// A start-anchored regex plus literal strings placed outside the span.
    Wrapped {
        regex: Regex,
        prefix: String,
        suffix: String,
    },
}

/// A named matcher for one token class.
///
/// `name` is a whitespace-separated set of CSS-like class tokens (for example
/// `"comment linecomment"`). It must be non-empty and is emitted verbatim as
/// the span's class attribute.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub name: String,
    pub matcher: Matcher,
}

impl PatternRule {
    /// A rule that wraps its first capture group, nothing else.
    pub fn bare(name: impl Into<String>, regex: Regex) -> Self {
        Self {
            name: name.into(),
            matcher: Matcher::Bare(regex),
        }
    }

    /// A rule that also emits literal prefix/suffix text outside the span.
    pub fn wrapped(
        name: impl Into<String>,
        regex: Regex,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            matcher: Matcher::Wrapped {
                regex,
                prefix: prefix.into(),
                suffix: suffix.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_rule_carries_its_regex() {
        let rule = PatternRule::bare("number", Regex::new(r"^(\d+)").unwrap());
        assert_eq!(rule.name, "number");
        match &rule.matcher {
            Matcher::Bare(regex) => assert!(regex.is_match("42")),
            Matcher::Wrapped { .. } => panic!("expected a bare matcher"),
        }
    }

    #[test]
    fn wrapped_rule_keeps_prefix_and_suffix() {
        let rule = PatternRule::wrapped(
            "objectkey",
            Regex::new(r"^([^\s:]+):").unwrap(),
            "",
            ":",
        );
        match &rule.matcher {
            Matcher::Wrapped { prefix, suffix, .. } => {
                assert_eq!(prefix, "");
                assert_eq!(suffix, ":");
            }
            Matcher::Bare(_) => panic!("expected a wrapped matcher"),
        }
    }
}
