//! The incremental highlighter.
//!
//! Text can arrive in chunks of any size, split anywhere. All tokenizer state
//! lives in the [`Highlighter`], so feeding a string in pieces produces the
//! same token stream as feeding it whole.

use crate::classify::classify;
use crate::context::{Context, ContextStack};
use crate::deferred::DeferredWriter;
use crate::format::{Format, Token};
use crate::lexer::{transition, LexState, Transition};
use crate::sink::Sink;
use tracing::{debug, trace};

pub struct Highlighter<S: Sink> {
    sink: S,
    state: LexState,
    /// Text of the token being accumulated
    token: String,
    contexts: ContextStack,
    /// Shared by all bracket kinds; unbalanced closes drive it negative
    bracket_depth: i32,
    writer: DeferredWriter,
}

impl<S: Sink> Highlighter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            state: LexState::Idle,
            token: String::new(),
            contexts: ContextStack::new(),
            bracket_depth: 0,
            writer: DeferredWriter::new(),
        }
    }

    /// Feed the next chunk of the stream. Does nothing once finished.
    pub fn append(&mut self, text: &str) {
        for ch in text.chars() {
            while !self.advance(ch) {}
        }
    }

    /// End the stream: emit the partial token and everything still held back.
    /// Calling it again is a no-op.
    pub fn finish(&mut self) {
        if self.state == LexState::Finished {
            return;
        }
        if self.state != LexState::Idle {
            self.end_token();
        }
        self.writer.flush(&mut self.sink);
        self.state = LexState::Finished;
        debug!(
            bracket_depth = self.bracket_depth,
            open_regions = self.contexts.depth() - 1,
            "stream finished"
        );
    }

    pub fn is_finished(&self) -> bool {
        self.state == LexState::Finished
    }

    pub fn context(&self) -> Context {
        self.contexts.current()
    }

    pub fn bracket_depth(&self) -> i32 {
        self.bracket_depth
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Give back the sink. Tokens still pending are dropped unless
    /// [`finish`](Self::finish) was called first.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Offer one character; returns whether it was consumed.
    fn advance(&mut self, ch: char) -> bool {
        let step = transition(self.state, ch);
        match step {
            Transition::Accumulate(next) => {
                self.token.push(ch);
                self.state = next;
            }
            Transition::End => self.end_token(),
            Transition::Close => {
                self.token.push(ch);
                self.end_token();
            }
            Transition::Punctuation => {
                self.emit_char(ch, Format::Punctuation);
            }
            Transition::OpenBracket => {
                self.bracket_depth += 1;
                self.emit_char(ch, Format::Bracket(self.bracket_depth));
            }
            Transition::CloseBracket => {
                self.emit_char(ch, Format::Bracket(self.bracket_depth));
                self.bracket_depth -= 1;
            }
            Transition::Absorb => {}
        }
        step.consumed()
    }

    fn emit_char(&mut self, ch: char, format: Format) {
        let mut buf = [0u8; 4];
        self.writer
            .submit(ch.encode_utf8(&mut buf), format, &mut self.sink);
    }

    fn end_token(&mut self) {
        let state = std::mem::replace(&mut self.state, LexState::Idle);
        let text = std::mem::take(&mut self.token);

        if state == LexState::Fence && text.ends_with('\n') {
            self.toggle_region(text.trim());
        }

        let format = classify(state, &text, self.contexts.current());
        trace!(?state, %format, text = %text.escape_debug(), "token");
        self.writer.submit(&text, format, &mut self.sink);
    }

    fn toggle_region(&mut self, fence: &str) {
        if self.contexts.current().is_code_region() {
            self.contexts.exit();
        } else {
            self.contexts.enter(Context::from_fence(fence));
        }
    }
}

/// Highlight a complete string in one go.
pub fn highlight(text: &str) -> Vec<Token> {
    let mut highlighter = Highlighter::new(Vec::new());
    highlighter.append(text);
    highlighter.finish();
    highlighter.into_sink()
}
