//! Tinct CLI - streams a file or stdin through the highlighter.

pub mod decoder;
pub mod dump_sink;
pub mod terminal_sink;

mod cli_args;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use tinct_config::{Config, StreamConfig};
use tinct_core::{Highlighter, Sink};

pub use cli_args::Cli;
use clap::Parser;

use decoder::ChunkDecoder;
use dump_sink::DumpSink;
use terminal_sink::TerminalSink;

/// A sink backed by an output device that can be flushed between chunks.
pub trait StreamSink: Sink {
    /// Flush buffered output, surfacing any write error recorded while rendering.
    fn flush_output(&mut self) -> io::Result<()>;
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli);

    if let Some(target) = &cli.write_default_config {
        let path = default_config_target(target.as_deref())?;
        let path = path.to_string_lossy();
        Config::default().save(&path)?;
        println!("Wrote default configuration to: {}", path);
        return Ok(());
    }

    let config = Config::load_with_overrides(cli.config.as_deref(), cli.chunk_size, cli.delay_ms)?;
    debug!(stream = ?config.stream, "configuration loaded");

    let input: Box<dyn Read> = match cli.input_path() {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };
    let stdout = BufWriter::new(io::stdout().lock());

    if cli.dump_tokens {
        return stream(input, DumpSink::new(stdout), &config.stream);
    }

    let palette = config.palette.resolve()?;
    let plain = cli.no_color || std::env::var_os("NO_COLOR").is_some();
    let sink = if plain {
        TerminalSink::plain(stdout, palette)
    } else {
        TerminalSink::new(stdout, palette)
    };
    stream(input, sink, &config.stream)
}

/// Pump `input` through a highlighter chunk by chunk, flushing the sink after
/// every chunk so output appears as it arrives.
pub fn stream<R: Read, S: StreamSink>(mut input: R, sink: S, options: &StreamConfig) -> Result<()> {
    let mut highlighter = Highlighter::new(sink);
    let mut decoder = ChunkDecoder::new();
    let mut buf = vec![0u8; options.chunk_size.max(1)];
    let delay = Duration::from_millis(options.delay_ms);
    let mut total = 0usize;

    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("failed to read input"),
        };
        total += n;

        let text = decoder.decode(&buf[..n]);
        highlighter.append(&text);
        highlighter
            .sink_mut()
            .flush_output()
            .context("failed to write output")?;

        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    highlighter.append(&decoder.finish());
    highlighter.finish();
    highlighter
        .sink_mut()
        .flush_output()
        .context("failed to write output")?;

    info!(bytes = total, "stream complete");
    Ok(())
}

/// Where `--write-default-config` writes when no PATH is given.
fn default_config_target(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::default_user_path()
            .context("could not determine the home directory; pass a PATH to --write-default-config"),
    }
}

/// Filter used when RUST_LOG is unset. Stdout carries the rendered stream,
/// so only warnings are logged unless `--verbose` is given.
fn default_log_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!(
        "tinct={level},tinct_cli={level},tinct_core={level},tinct_config={level}",
        level = level
    )
}

fn initialize_logging(cli: &Cli) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directives(cli.verbose)));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}
