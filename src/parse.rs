//! Priority-ordered pattern tokenizer
//!
//! `parse` walks the input left to right. At each position it tries every
//! pattern rule in list order; the first rule whose regex matches wins, ties
//! included (this is priority order, not longest-match). A winning rule's
//! capture is wrapped in a `<span>` and the whole match is consumed. When no
//! rule matches, exactly one character passes through verbatim.
//!
//! ## Termination
//!
//! The remaining input shrinks by at least one character on every step: a
//! match consumes its full length, and the no-match path consumes one
//! character. A zero-length match is demoted to the no-match path so even a
//! degenerate rule set cannot stall the loop. The original formulation was
//! recursive; it is an explicit loop here so long inputs can't exhaust the
//! call stack.

use crate::patterns::{Matcher, PatternRule};

/// One winning rule application: how much of the input it consumed and the
/// markup it produced.
struct Painted {
    consumed: usize,
    markup: String,
}

/// Try every rule in priority order against the front of `rest`.
fn first_match(patterns: &[PatternRule], rest: &str) -> Option<Painted> {
    for rule in patterns {
        let (regex, prefix, suffix) = match &rule.matcher {
            Matcher::Bare(regex) => (regex, "", ""),
            Matcher::Wrapped {
                regex,
                prefix,
                suffix,
            } => (regex, prefix.as_str(), suffix.as_str()),
        };

        let Some(captures) = regex.captures(rest) else {
            continue;
        };
        let Some(whole) = captures.get(0) else {
            continue;
        };
        // A rule that matches past the front, or matches nothing, can't be
        // consumed monotonically; it is treated as a non-match.
        if whole.start() != 0 || whole.is_empty() {
            continue;
        }

        // A rule without a first capture group degrades to an empty wrap;
        // that's the caller contract, not an error.
        let captured = captures.get(1).map(|m| m.as_str()).unwrap_or("");

        let mut markup = String::new();
        if !prefix.is_empty() {
            markup.push_str(prefix);
        }
        markup.push_str("<span class=\"");
        markup.push_str(&rule.name);
        markup.push_str("\">");
        markup.push_str(captured);
        markup.push_str("</span>");
        if !suffix.is_empty() {
            markup.push_str(suffix);
        }

        return Some(Painted {
            consumed: whole.len(),
            markup,
        });
    }
    None
}

/// Tokenize `input` against `patterns`, producing the final markup string.
///
/// Output is the exact in-order concatenation of literal passthrough
/// characters and wrapped matches; every input character is accounted for by
/// exactly one step. An empty pattern set reproduces the input unchanged.
pub fn parse(patterns: &[PatternRule], input: &str) -> String {
    let mut rest = input;
    let mut output = String::with_capacity(input.len());

    while !rest.is_empty() {
        match first_match(patterns, rest) {
            Some(painted) => {
                output.push_str(&painted.markup);
                rest = &rest[painted.consumed..];
            }
            None => {
                // Collect one character and move on.
                let ch = rest.chars().next().expect("rest is non-empty");
                output.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    output
}
