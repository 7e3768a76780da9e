//! ANSI terminal rendering of classified tokens.

use crossterm::style::{Color, ResetColor, SetForegroundColor};
use std::io::{self, Write};
use tinct_config::{ColorSpec, NamedColor, ResolvedPalette};
use tinct_core::{Format, Sink};
use tracing::warn;

use crate::StreamSink;

/// Writes tokens to `out`, colored by format.
///
/// `render` cannot fail, so the first write error is kept and reported by
/// [`flush_output`](StreamSink::flush_output). Nothing is written after an error.
pub struct TerminalSink<W: Write> {
    out: W,
    palette: ResolvedPalette,
    color: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, palette: ResolvedPalette) -> Self {
        Self {
            out,
            palette,
            color: true,
            error: None,
        }
    }

    pub fn plain(out: W, palette: ResolvedPalette) -> Self {
        Self {
            color: false,
            ..Self::new(out, palette)
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Color for a format. Bracket depths cycle through the bracket palette;
    /// zero and negative depths wrap around instead of indexing out of range.
    pub fn color_for(&self, format: Format) -> Color {
        let spec = match format {
            Format::Markdown => self.palette.markdown,
            Format::Body => self.palette.body,
            Format::Number => self.palette.number,
            Format::Identifier => self.palette.identifier,
            Format::Keyword => self.palette.keyword,
            Format::Function => self.palette.function,
            Format::Punctuation => self.palette.punctuation,
            Format::Bracket(depth) => bracket_color(&self.palette.brackets, depth)
                .unwrap_or(self.palette.punctuation),
        };
        to_crossterm(spec)
    }

    fn write_token(&mut self, text: &str, format: Format) -> io::Result<()> {
        if self.color {
            let color = self.color_for(format);
            write!(self.out, "{}{}{}", SetForegroundColor(color), text, ResetColor)
        } else {
            self.out.write_all(text.as_bytes())
        }
    }
}

fn bracket_color(brackets: &[ColorSpec], depth: i32) -> Option<ColorSpec> {
    let len = i64::try_from(brackets.len()).ok().filter(|len| *len > 0)?;
    let index = (i64::from(depth) - 1).rem_euclid(len) as usize;
    brackets.get(index).copied()
}

pub fn to_crossterm(spec: ColorSpec) -> Color {
    match spec {
        ColorSpec::Rgb { r, g, b } => Color::Rgb { r, g, b },
        ColorSpec::Ansi(value) => Color::AnsiValue(value),
        ColorSpec::Named(named) => match named {
            NamedColor::Reset => Color::Reset,
            NamedColor::Black => Color::Black,
            NamedColor::DarkGrey => Color::DarkGrey,
            NamedColor::Red => Color::Red,
            NamedColor::DarkRed => Color::DarkRed,
            NamedColor::Green => Color::Green,
            NamedColor::DarkGreen => Color::DarkGreen,
            NamedColor::Yellow => Color::Yellow,
            NamedColor::DarkYellow => Color::DarkYellow,
            NamedColor::Blue => Color::Blue,
            NamedColor::DarkBlue => Color::DarkBlue,
            NamedColor::Magenta => Color::Magenta,
            NamedColor::DarkMagenta => Color::DarkMagenta,
            NamedColor::Cyan => Color::Cyan,
            NamedColor::DarkCyan => Color::DarkCyan,
            NamedColor::White => Color::White,
            NamedColor::Grey => Color::Grey,
        },
    }
}

impl<W: Write> Sink for TerminalSink<W> {
    fn render(&mut self, text: &str, format: Format) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_token(text, format) {
            warn!("terminal write failed: {}", e);
            self.error = Some(e);
        }
    }
}

impl<W: Write> StreamSink for TerminalSink<W> {
    fn flush_output(&mut self) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()
    }
}
