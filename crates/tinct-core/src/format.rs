//! Semantic formats attached to emitted tokens.

use serde::Serialize;
use std::fmt;

/// Classification handed to the sink alongside each token's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "depth", rename_all = "lowercase")]
pub enum Format {
    /// Backtick runs and fence lines
    Markdown,
    /// Prose words and whitespace
    Body,
    Number,
    /// A word inside a code region
    Identifier,
    Keyword,
    /// An identifier directly followed by `(`
    Function,
    Punctuation,
    /// A bracket tagged with its nesting depth. Unbalanced closes can make
    /// the depth zero or negative; the value is passed through untouched.
    Bracket(i32),
}

impl Format {
    pub fn name(&self) -> &'static str {
        match self {
            Format::Markdown => "markdown",
            Format::Body => "body",
            Format::Number => "number",
            Format::Identifier => "identifier",
            Format::Keyword => "keyword",
            Format::Function => "function",
            Format::Punctuation => "punctuation",
            Format::Bracket(_) => "bracket",
        }
    }

    pub fn is_bracket(&self) -> bool {
        matches!(self, Format::Bracket(_))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Bracket(depth) => write!(f, "bracket@{}", depth),
            other => f.write_str(other.name()),
        }
    }
}

/// A classified token as it was handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub format: Format,
}

impl Token {
    pub fn new(text: impl Into<String>, format: Format) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }
}
