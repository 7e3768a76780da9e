use crate::context::Context;
use crate::format::Format;
use crate::lexer::LexState;

/// Assign a format to a token that ended in `state`.
///
/// Punctuation and brackets never reach this function; they are classified
/// at the moment they are emitted.
///
/// # Panics
///
/// Panics for `Idle` and `Finished`, which never hold a token.
pub fn classify(state: LexState, text: &str, context: Context) -> Format {
    match state {
        LexState::Whitespace => Format::Body,
        LexState::Word => classify_word(text, context),
        LexState::Digits => Format::Number,
        LexState::Backtick1 | LexState::Backtick2 | LexState::Fence => Format::Markdown,
        LexState::Idle | LexState::Finished => {
            unreachable!("no token can end in state {:?}", state)
        }
    }
}

fn classify_word(text: &str, context: Context) -> Format {
    match context {
        Context::Text => Format::Body,
        _ if is_keyword(text, context) => Format::Keyword,
        Context::Code | Context::PythonCode => Format::Identifier,
    }
}

/// Keyword lookup is done on the lowercased word.
pub fn is_keyword(word: &str, context: Context) -> bool {
    context
        .keywords()
        .is_some_and(|keywords| keywords.contains(&word.to_lowercase().as_str()))
}
