//! Nested markdown regions entered and left by triple-backtick fences.

use tracing::debug;

const PYTHON_KEYWORDS: &[&str] = &[
    "and", "as", "assert", "break", "class", "def", "for", "if", "import", "in", "is", "lambda",
    "not", "or", "return", "while",
];

/// Fence lines that open a Python region, compared after trimming.
const PYTHON_FENCES: &[&str] = &["```python", "``` python", "```py", "``` py"];

/// Interpretation mode governing how words are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Text,
    /// A fenced block in a language we have no keyword table for
    Code,
    PythonCode,
}

impl Context {
    /// Both code kinds count as a code region when deciding whether a fence closes.
    pub fn is_code_region(self) -> bool {
        matches!(self, Context::Code | Context::PythonCode)
    }

    /// Keyword table for languages we recognise.
    pub fn keywords(self) -> Option<&'static [&'static str]> {
        match self {
            Context::PythonCode => Some(PYTHON_KEYWORDS),
            Context::Text | Context::Code => None,
        }
    }

    /// Pick the region kind a trimmed opening fence line introduces.
    pub fn from_fence(trimmed: &str) -> Context {
        if PYTHON_FENCES.contains(&trimmed) {
            Context::PythonCode
        } else {
            Context::Code
        }
    }
}

/// Stack of active contexts. Never empty: `Text` sits at the bottom for the
/// lifetime of the stack.
#[derive(Debug, Clone)]
pub struct ContextStack {
    stack: Vec<Context>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self {
            stack: vec![Context::Text],
        }
    }

    pub fn enter(&mut self, context: Context) {
        debug!(?context, depth = self.stack.len(), "entering region");
        self.stack.push(context);
    }

    /// Leave the innermost region.
    ///
    /// # Panics
    ///
    /// Panics when only the bottom `Text` entry remains. Fence handling only
    /// exits while inside a code region, so reaching this is a bug.
    pub fn exit(&mut self) -> Context {
        assert!(
            self.stack.len() > 1,
            "attempted to exit the bottom text context"
        );
        let left = self.stack.pop().unwrap_or(Context::Text);
        debug!(context = ?left, depth = self.stack.len(), "leaving region");
        left
    }

    pub fn current(&self) -> Context {
        self.stack.last().copied().unwrap_or(Context::Text)
    }

    /// Number of entries including the bottom `Text`.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}
