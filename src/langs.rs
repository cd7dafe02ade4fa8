//! Built-in pattern sets
//!
//! Ships one ready-made ordered set for JavaScript-flavoured code. Order is
//! load-bearing: comments and strings sit first so their bodies are never
//! re-scanned by later rules, and the module-rename rule outranks the plain
//! module-name rule because its match is a superset.
//!
//! The set is compiled once behind a `Lazy` and handed out as a shared slice;
//! rules are read-only, so sharing across passes is safe.

use crate::patterns::PatternRule;
use once_cell::sync::Lazy;
use regex::Regex;

static JAVASCRIPT: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    let bare = |name: &str, pattern: &str| PatternRule::bare(name, Regex::new(pattern).unwrap());
    let wrapped = |name: &str, pattern: &str, prefix: &str, suffix: &str| {
        PatternRule::wrapped(name, Regex::new(pattern).unwrap(), prefix, suffix)
    };

    vec![
        bare("comment linecomment", r"^(//[^/\n]*)"),
        bare("comment blockcomment", r"^(/\*.*\*/)"),
        bare("singlequote", r"^('[^'\n]*')"),
        bare("doublequote", r#"^("[^"\n]*")"#),
        bare("backquote", r"^(`[^`]*`)"),
        bare("symbol", r"^(=>|=|\+|::|-|\*)"),
        bare(
            "keyword",
            r"^(var|let|const|function|return|switch|case|for|if|else|default)\b",
        ),
        wrapped("modulerename", r"^as\s+(\S+)\s+from", "as ", " from"),
        wrapped("modulename", r"^([A-Za-z_]+)\s+from\b", "", " from"),
        bare("boolean", r"^(true|false)"),
        bare("number", r"^(\d+)"),
        wrapped("htmlopen", r"^<([A-Za-z][A-Za-z0-9_-]*)", "&lt;", ""),
        wrapped("htmlclose", r"^</([A-Za-z][A-Za-z0-9_-]*)", "&lt;/", ""),
        wrapped("destructure", r"^\{([^:\}\n]+)\}", "{", "}"),
        wrapped("objectkey", r"^([^\s:]+):", "", ":"),
    ]
});

/// The JavaScript-flavoured pattern set, in priority order.
pub fn javascript() -> &'static [PatternRule] {
    &JAVASCRIPT
}
