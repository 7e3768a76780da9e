use crate::format::{Format, Token};

/// Destination for classified tokens.
///
/// Rendering is infallible from the engine's point of view. Sinks that write
/// to a device keep track of their own failures.
pub trait Sink {
    fn render(&mut self, text: &str, format: Format);
}

/// Adapts a closure into a [`Sink`].
pub struct FnSink<F>(pub F);

impl<F> Sink for FnSink<F>
where
    F: FnMut(&str, Format),
{
    fn render(&mut self, text: &str, format: Format) {
        (self.0)(text, format)
    }
}

/// Records every token, in order.
impl Sink for Vec<Token> {
    fn render(&mut self, text: &str, format: Format) {
        self.push(Token::new(text, format));
    }
}
