//! Property-based tests for the tokenizer
//!
//! These pin down the guarantees the tokenizer makes for any input: it always
//! terminates, an empty pattern set is a pure passthrough, and every input
//! character is accounted for exactly once in the output.

use proptest::prelude::*;
use regex::Regex;
use spanlight::{langs, parse, PatternRule};

/// Helper: strip the digit-rule markup back out of an output string.
fn strip_number_spans(output: &str) -> String {
    output
        .replace("<span class=\"n\">", "")
        .replace("</span>", "")
}

proptest! {
    #[test]
    fn empty_pattern_set_is_identity(input in ".{0,200}") {
        prop_assert_eq!(parse(&[], &input), input);
    }

    #[test]
    fn javascript_set_never_panics(input in ".{0,200}") {
        // Termination and no-panic over arbitrary text, including inputs
        // that match no rule at all.
        let _ = parse(langs::javascript(), &input);
    }

    #[test]
    fn every_character_is_accounted_for(input in "[a-z0-9 ]{0,80}") {
        // With a single digit rule and markup-free input, removing the
        // emitted markup must reconstruct the input exactly: nothing
        // dropped, nothing duplicated.
        let rules = [PatternRule::bare("n", Regex::new(r"^(\d+)").unwrap())];
        let output = parse(&rules, &input);
        prop_assert_eq!(strip_number_spans(&output), input);
    }

    #[test]
    fn unmatched_characters_pass_through_in_order(input in "[a-zA-Z .,;!?]{0,80}") {
        // No digits means the digit rule never fires.
        let rules = [PatternRule::bare("n", Regex::new(r"^(\d+)").unwrap())];
        prop_assert_eq!(parse(&rules, &input), input);
    }

    #[test]
    fn degenerate_zero_length_rule_still_terminates(input in ".{0,100}") {
        // `a*` can match the empty string anywhere; the tokenizer must not
        // stall on it.
        let rules = [PatternRule::bare("x", Regex::new(r"^(a*)").unwrap())];
        let _ = parse(&rules, &input);
    }
}
