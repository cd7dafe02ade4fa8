//! Declarative pattern definitions
//!
//! Pattern sets are data, not code: a set can be written out as plain
//! `{name, regex, prefix?, suffix?}` records, kept in JSON next to the pages
//! that use it, and compiled into [`PatternRule`]s at load time. Compilation
//! is the one place in the crate where construction can fail, so it is the
//! one place with an error type.

use crate::patterns::PatternRule;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One pattern rule in declarative form.
///
/// `regex` must carry its own `^` anchor, exactly as a programmatic rule
/// would. Absent or empty `prefix`/`suffix` mean a bare rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternDef {
    pub name: String,
    pub regex: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

/// Error type for pattern definition loading
#[derive(Debug)]
pub enum DefError {
    /// The named definition's regex failed to compile
    InvalidRegex { name: String, message: String },
    /// The definition document wasn't valid JSON
    Json(serde_json::Error),
}

impl fmt::Display for DefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefError::InvalidRegex { name, message } => {
                write!(f, "invalid regex in pattern '{}': {}", name, message)
            }
            DefError::Json(err) => write!(f, "invalid pattern definition document: {}", err),
        }
    }
}

impl std::error::Error for DefError {}

impl From<serde_json::Error> for DefError {
    fn from(err: serde_json::Error) -> Self {
        DefError::Json(err)
    }
}

/// Compile declarative definitions into pattern rules, preserving order.
pub fn compile(defs: &[PatternDef]) -> Result<Vec<PatternRule>, DefError> {
    defs.iter()
        .map(|def| {
            let regex = Regex::new(&def.regex).map_err(|err| DefError::InvalidRegex {
                name: def.name.clone(),
                message: err.to_string(),
            })?;
            let prefix = def.prefix.clone().unwrap_or_default();
            let suffix = def.suffix.clone().unwrap_or_default();
            Ok(if prefix.is_empty() && suffix.is_empty() {
                PatternRule::bare(def.name.clone(), regex)
            } else {
                PatternRule::wrapped(def.name.clone(), regex, prefix, suffix)
            })
        })
        .collect()
}

/// Parse a JSON array of pattern definitions and compile it.
pub fn from_json(document: &str) -> Result<Vec<PatternRule>, DefError> {
    let defs: Vec<PatternDef> = serde_json::from_str(document)?;
    compile(&defs)
}
