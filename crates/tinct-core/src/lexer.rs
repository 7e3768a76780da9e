//! Per-character state machine.
//!
//! [`transition`] is a pure function of the current accumulation state and
//! the offered character. The engine applies the result and, when the
//! character was not consumed, offers the same character again against the
//! reset state. That retry is the only lookahead the tokenizer needs.

/// What the token currently being accumulated looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    /// No token in progress
    Idle,
    Whitespace,
    /// Letters, digits and underscores (or any other unclassified start char)
    Word,
    Digits,
    Backtick1,
    Backtick2,
    /// Three or more backticks; runs to the end of the line
    Fence,
    /// End of input reached; everything is absorbed
    Finished,
}

/// Outcome of offering one character to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Append the character to the current token and move to the given state
    Accumulate(LexState),
    /// The current token ended before this character; offer it again
    End,
    /// Append the character, then end the current token
    Close,
    /// Emit the character on its own as punctuation
    Punctuation,
    /// Emit the character as an opening bracket one level deeper
    OpenBracket,
    /// Emit the character as a closing bracket at the current level
    CloseBracket,
    /// Swallow the character without effect
    Absorb,
}

impl Transition {
    pub fn consumed(self) -> bool {
        !matches!(self, Transition::End)
    }
}

pub fn is_punctuation(ch: char) -> bool {
    matches!(ch, '.' | ',' | ';' | ':' | '!' | '?')
}

pub fn is_open_bracket(ch: char) -> bool {
    matches!(ch, '(' | '[' | '{')
}

pub fn is_close_bracket(ch: char) -> bool {
    matches!(ch, ')' | ']' | '}')
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

pub fn transition(state: LexState, ch: char) -> Transition {
    use LexState::*;

    match state {
        Idle => {
            if ch.is_whitespace() {
                Transition::Accumulate(Whitespace)
            } else if ch.is_ascii_digit() {
                Transition::Accumulate(Digits)
            } else if is_punctuation(ch) {
                Transition::Punctuation
            } else if is_open_bracket(ch) {
                Transition::OpenBracket
            } else if is_close_bracket(ch) {
                Transition::CloseBracket
            } else if ch == '`' {
                Transition::Accumulate(Backtick1)
            } else {
                Transition::Accumulate(Word)
            }
        }
        Whitespace => continue_while(ch.is_whitespace(), Whitespace),
        Word => continue_while(is_word_char(ch), Word),
        Digits => continue_while(ch.is_ascii_digit(), Digits),
        Backtick1 => continue_while(ch == '`', Backtick2),
        Backtick2 => continue_while(ch == '`', Fence),
        Fence => {
            if ch == '\n' {
                Transition::Close
            } else {
                Transition::Accumulate(Fence)
            }
        }
        Finished => Transition::Absorb,
    }
}

fn continue_while(keep: bool, next: LexState) -> Transition {
    if keep {
        Transition::Accumulate(next)
    } else {
        Transition::End
    }
}
