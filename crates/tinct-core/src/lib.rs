//! Tinct core - incremental tokenizing and classification of streamed text.
//!
//! Markdown prose with embedded fenced code is split into tokens one
//! character at a time and every token is handed to a [`Sink`] together with
//! a [`Format`]. Input may be split at any point between `append` calls.

pub mod classify;
pub mod context;
pub mod deferred;
pub mod engine;
pub mod format;
pub mod lexer;
pub mod sink;

pub use context::{Context, ContextStack};
pub use engine::{highlight, Highlighter};
pub use format::{Format, Token};
pub use sink::{FnSink, Sink};
