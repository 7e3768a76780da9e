//! JSON-lines token dump, one object per emitted token.

use serde::Serialize;
use std::io::{self, Write};
use tinct_core::{Format, Sink};
use tracing::warn;

use crate::StreamSink;

#[derive(Serialize)]
struct TokenRecord<'a> {
    text: &'a str,
    format: Format,
}

pub struct DumpSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> DumpSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, text: &str, format: Format) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &TokenRecord { text, format })?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> Sink for DumpSink<W> {
    fn render(&mut self, text: &str, format: Format) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_record(text, format) {
            warn!("token dump write failed: {}", e);
            self.error = Some(e);
        }
    }
}

impl<W: Write> StreamSink for DumpSink<W> {
    fn flush_output(&mut self) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()
    }
}
