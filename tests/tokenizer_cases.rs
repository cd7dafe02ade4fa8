//! Table-driven tokenizer and dedent cases
//!
//! Each case pins one documented behavior: priority order, prefix/suffix
//! emission, whole-match consumption, and the dedent normalizer's exact
//! trimming rules.

use regex::Regex;
use rstest::rstest;
use spanlight::{clean, parse, PatternRule};

fn digits() -> PatternRule {
    PatternRule::bare("n", Regex::new(r"^(\d+)").unwrap())
}

fn object_key() -> PatternRule {
    PatternRule::wrapped("k", Regex::new(r"^([^\s:]+):").unwrap(), "", ":")
}

#[rstest]
#[case("12ab", "<span class=\"n\">12</span>ab")]
#[case("ab12", "ab<span class=\"n\">12</span>")]
#[case("1a2", "<span class=\"n\">1</span>a<span class=\"n\">2</span>")]
#[case("", "")]
#[case("abc", "abc")]
fn digit_rule_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse(&[digits()], input), expected);
}

#[rstest]
#[case("foo:bar", "<span class=\"k\">foo</span>:bar")]
#[case("a:b:c", "<span class=\"k\">a</span>:<span class=\"k\">b</span>:c")]
#[case("no key here", "no key here")]
fn prefix_suffix_rule_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse(&[object_key()], input), expected);
}

#[test]
fn priority_beats_match_length() {
    let rules = [
        PatternRule::bare("first", Regex::new(r"^(a)").unwrap()),
        PatternRule::bare("second", Regex::new(r"^(abc)").unwrap()),
    ];
    assert_eq!(parse(&rules, "abc"), "<span class=\"first\">a</span>bc");
}

#[test]
fn rule_order_decides_between_equal_matches() {
    let winner_first = [
        PatternRule::bare("one", Regex::new(r"^(x)").unwrap()),
        PatternRule::bare("two", Regex::new(r"^(x)").unwrap()),
    ];
    assert_eq!(parse(&winner_first, "x"), "<span class=\"one\">x</span>");

    let winner_swapped = [
        PatternRule::bare("two", Regex::new(r"^(x)").unwrap()),
        PatternRule::bare("one", Regex::new(r"^(x)").unwrap()),
    ];
    assert_eq!(parse(&winner_swapped, "x"), "<span class=\"two\">x</span>");
}

#[rstest]
#[case("abc\ndef", "abc\ndef")]
#[case("\n\nabc", "abc")]
#[case("abc\n   ", "abc")]
#[case("  a\n  b", "\na\nb")]
#[case("    a\n  b", "\na\n  b")]
fn dedent_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(clean(input), expected);
}

#[test]
fn dedent_is_idempotent_without_indentation() {
    let text = "fn main() {}\nfn other() {}";
    let once = clean(text);
    assert_eq!(clean(&once), once);
}
