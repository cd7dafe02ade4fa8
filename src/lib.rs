//! # spanlight
//!
//! A small pattern-painting syntax highlighter. Given an ordered list of
//! pattern rules and a raw text block, it produces a string where recognized
//! substrings are wrapped in `<span class="...">` tags and everything else
//! passes through unchanged.
//!
//! The pipeline per block is dedent ([`clean`]) -> tokenize ([`parse`]) ->
//! optional line numbering, driven by [`highlight`] over a batch of
//! [`CodeBlock`]s. Pattern sets can be built programmatically
//! ([`PatternRule`]), loaded from JSON ([`defs`]), or taken off the shelf
//! ([`langs`]).
//!
//! This is a best-effort, order-sensitive pattern painter, not a parser: it
//! builds no AST, validates no syntax, and makes no unambiguous-tokenization
//! guarantee.

pub mod clean;
pub mod defs;
pub mod highlight;
pub mod langs;
pub mod parse;
pub mod patterns;

pub use clean::clean;
pub use defs::{DefError, PatternDef};
pub use highlight::{highlight, CodeBlock, Config, PatternResolver, Patterns, TextTransform};
pub use parse::parse;
pub use patterns::{Matcher, PatternRule};
