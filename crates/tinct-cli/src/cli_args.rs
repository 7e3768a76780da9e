//! CLI argument parsing for tinct.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(name = "tinct")]
#[command(about = "Colorize streamed markdown and code as it arrives")]
#[command(version)]
pub struct Cli {
    /// File to highlight (reads stdin when omitted or '-')
    pub input: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Bytes read per chunk (overrides stream.chunk_size)
    #[arg(long, value_name = "BYTES")]
    pub chunk_size: Option<usize>,

    /// Pause between chunks in milliseconds (overrides stream.delay_ms)
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Print one JSON object per token instead of colored text
    #[arg(long)]
    pub dump_tokens: bool,

    /// Write plain text without color codes (also honours NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the default configuration to PATH (default ~/.config/tinct/config.toml) and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub write_default_config: Option<Option<PathBuf>>,
}

impl Cli {
    /// Input path, treating `-` as stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
