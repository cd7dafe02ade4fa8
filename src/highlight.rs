//! Highlight orchestrator
//!
//! Ties the pipeline together for a batch of code blocks:
//! dedent -> pre-process -> tokenize -> post-process -> line numbers,
//! with the result written back into the block.
//!
//! The block surface stands in for document traversal: a [`CodeBlock`]
//! carries the selector path it was found under, its identifying metadata
//! (typically the declared language), and its text. [`highlight`] mutates
//! each matching block in order; block N is fully rewritten before block N+1
//! is touched. There is no per-block failure isolation: if a resolver or
//! transform panics, the remaining blocks are left as they were.

use crate::clean::clean;
use crate::parse::parse;
use crate::patterns::PatternRule;

/// A text transform applied around tokenization. Identity when absent.
pub type TextTransform = Box<dyn Fn(&str) -> String>;

/// Resolves a pattern set per block from the block's metadata.
/// `None` resolves to the empty set: the block is still processed and every
/// character passes through literally.
pub type PatternResolver = Box<dyn Fn(&CodeBlock) -> Option<Vec<PatternRule>>>;

/// Where a block's pattern set comes from.
pub enum Patterns {
    /// One ordered set shared by every block.
    Fixed(Vec<PatternRule>),
    /// A set computed per block, dispatched once per block.
    Resolver(PatternResolver),
}

/// One external text block: the unit the orchestrator reads and rewrites.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    /// Selector path the block lives under, e.g. `"pre code"`.
    pub selector: String,
    /// Identifying metadata, e.g. the block's declared language or class.
    pub info: String,
    /// Raw text going in; rendered markup coming out.
    pub text: String,
}

impl CodeBlock {
    pub fn new(
        selector: impl Into<String>,
        info: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            selector: selector.into(),
            info: info.into(),
            text: text.into(),
        }
    }
}

/// Configuration for one highlighting pass.
pub struct Config {
    pub patterns: Patterns,
    pub linenums: bool,
    pub selector: String,
    pub pre_process: Option<TextTransform>,
    pub post_process: Option<TextTransform>,
}

impl Config {
    /// A pass over `"pre code"` blocks with no line numbers and identity
    /// transforms.
    pub fn new(patterns: Patterns) -> Self {
        Self {
            patterns,
            linenums: false,
            selector: "pre code".to_string(),
            pre_process: None,
            post_process: None,
        }
    }

    pub fn with_linenums(mut self, linenums: bool) -> Self {
        self.linenums = linenums;
        self
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_pre_process(mut self, transform: TextTransform) -> Self {
        self.pre_process = Some(transform);
        self
    }

    pub fn with_post_process(mut self, transform: TextTransform) -> Self {
        self.post_process = Some(transform);
        self
    }
}

/// Prefix every line after the first with a zero-padded line-number span.
///
/// Split-index 0 is left unchanged and numbering starts at `00` on the second
/// split segment; the dedent pass re-prepends a newline in front of dedented
/// text, so that first segment is the empty string before the code and the
/// first visible code line gets `00`. The `index - 1` arithmetic is the
/// long-standing behavior and is kept as-is.
fn number_lines(text: &str) -> String {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| {
            if index == 0 {
                line.to_string()
            } else {
                format!("<span class=\"linenum\">{:02}</span> {}", index - 1, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run one highlighting pass over every block matching the configured
/// selector, rewriting each block's text in place.
pub fn highlight(config: &Config, blocks: &mut [CodeBlock]) {
    for block in blocks
        .iter_mut()
        .filter(|block| block.selector == config.selector)
    {
        let resolved;
        let patterns: &[PatternRule] = match &config.patterns {
            Patterns::Fixed(rules) => rules,
            Patterns::Resolver(resolve) => {
                resolved = resolve(block).unwrap_or_default();
                &resolved
            }
        };

        let cleaned = clean(&block.text);
        let prepared = match &config.pre_process {
            Some(transform) => transform(&cleaned),
            None => cleaned,
        };
        let tokenized = parse(patterns, &prepared);
        let mut rendered = match &config.post_process {
            Some(transform) => transform(&tokenized),
            None => tokenized,
        };

        if config.linenums {
            rendered = number_lines(&rendered);
        }

        block.text = rendered;
    }
}
