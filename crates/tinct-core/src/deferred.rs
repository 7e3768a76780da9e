//! Holds back trailing identifier runs until we know whether they name a call.
//!
//! A word inside code can only be recognised as a function once the next
//! token turns out to be `(`. Identifiers and `.` tokens are parked here; any
//! other token flushes them, upgrading the last identifier to
//! [`Format::Function`] first when that token is an opening parenthesis.

use crate::format::{Format, Token};
use crate::sink::Sink;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Empty,
    Holding(Vec<Token>),
}

#[derive(Debug, Clone)]
pub struct DeferredWriter {
    pending: Pending,
}

impl DeferredWriter {
    pub fn new() -> Self {
        Self {
            pending: Pending::Empty,
        }
    }

    pub fn submit<S: Sink>(&mut self, text: &str, format: Format, sink: &mut S) {
        if format == Format::Identifier || text == "." {
            self.hold(Token::new(text, format));
            return;
        }

        if text == "(" && format.is_bracket() {
            self.promote_last_identifier();
        }
        self.flush(sink);
        sink.render(text, format);
    }

    /// Emit every held token in arrival order.
    pub fn flush<S: Sink>(&mut self, sink: &mut S) {
        if let Pending::Holding(tokens) = std::mem::replace(&mut self.pending, Pending::Empty) {
            for token in &tokens {
                sink.render(&token.text, token.format);
            }
        }
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.pending == Pending::Empty
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        match &self.pending {
            Pending::Empty => 0,
            Pending::Holding(tokens) => tokens.len(),
        }
    }

    fn hold(&mut self, token: Token) {
        match &mut self.pending {
            Pending::Holding(tokens) => tokens.push(token),
            Pending::Empty => self.pending = Pending::Holding(vec![token]),
        }
    }

    fn promote_last_identifier(&mut self) {
        if let Pending::Holding(tokens) = &mut self.pending {
            if let Some(last) = tokens.last_mut().filter(|t| t.format == Format::Identifier) {
                trace!(name = %last.text, "identifier followed by '(' rendered as function");
                last.format = Format::Function;
            }
        }
    }
}

impl Default for DeferredWriter {
    fn default() -> Self {
        Self::new()
    }
}
