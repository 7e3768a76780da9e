mod color;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

pub use color::{ColorSpec, NamedColor};

/// Locations searched, in order, when no explicit config path is given.
const DEFAULT_PATHS: [&str; 3] = ["./tinct.toml", "~/.config/tinct/config.toml", "~/.tinct.toml"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid color '{0}': expected a color name, '#rrggbb' or 'ansi:<0-255>'")]
    InvalidColor(String),
    #[error("palette.brackets must list at least one color")]
    EmptyBracketPalette,
    #[error("stream.chunk_size must be greater than zero")]
    ZeroChunkSize,
    #[error("config file not found: {0}")]
    NotFound(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: PaletteConfig,
    pub stream: StreamConfig,
}

/// One color per token format. Brackets cycle through `brackets` by depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub markdown: String,
    pub body: String,
    pub number: String,
    pub identifier: String,
    pub keyword: String,
    pub function: String,
    pub punctuation: String,
    pub brackets: Vec<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            markdown: "dark_grey".to_string(),
            body: "reset".to_string(),
            number: "#d8b172".to_string(),
            identifier: "white".to_string(),
            keyword: "magenta".to_string(),
            function: "cyan".to_string(),
            punctuation: "grey".to_string(),
            brackets: vec![
                "yellow".to_string(),
                "magenta".to_string(),
                "blue".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Bytes read from the input per highlighter append
    pub chunk_size: usize,
    /// Pause between chunks, to mimic a live response
    pub delay_ms: u64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            chunk_size: 64,
            delay_ms: 0,
        }
    }
}

/// Palette with every color string already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPalette {
    pub markdown: ColorSpec,
    pub body: ColorSpec,
    pub number: ColorSpec,
    pub identifier: ColorSpec,
    pub keyword: ColorSpec,
    pub function: ColorSpec,
    pub punctuation: ColorSpec,
    pub brackets: Vec<ColorSpec>,
}

impl PaletteConfig {
    pub fn resolve(&self) -> Result<ResolvedPalette, ConfigError> {
        if self.brackets.is_empty() {
            return Err(ConfigError::EmptyBracketPalette);
        }
        Ok(ResolvedPalette {
            markdown: ColorSpec::parse(&self.markdown)?,
            body: ColorSpec::parse(&self.body)?,
            number: ColorSpec::parse(&self.number)?,
            identifier: ColorSpec::parse(&self.identifier)?,
            keyword: ColorSpec::parse(&self.keyword)?,
            function: ColorSpec::parse(&self.function)?,
            punctuation: ColorSpec::parse(&self.punctuation)?,
            brackets: self
                .brackets
                .iter()
                .map(|c| ColorSpec::parse(c))
                .collect::<Result<_, _>>()?,
        })
    }
}

impl Config {
    /// Load from `config_path`, or the first default location that exists.
    /// Falls back to the built-in defaults when nothing is found.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let path_to_load = match config_path {
            Some(path) => {
                let expanded = shellexpand::tilde(path).to_string();
                if !Path::new(&expanded).exists() {
                    return Err(ConfigError::NotFound(path.to_string()).into());
                }
                Some(expanded)
            }
            None => DEFAULT_PATHS.iter().find_map(|path| {
                let expanded_path = shellexpand::tilde(path);
                if Path::new(expanded_path.as_ref()).exists() {
                    Some(expanded_path.to_string())
                } else {
                    None
                }
            }),
        };

        let Some(path) = path_to_load else {
            debug!("no config file found, using defaults");
            return Ok(Self::default());
        };

        debug!(%path, "loading config");
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_with_overrides(
        config_path: Option<&str>,
        chunk_size_override: Option<usize>,
        delay_ms_override: Option<u64>,
    ) -> Result<Self> {
        let mut config = Self::load(config_path)?;

        if let Some(chunk_size) = chunk_size_override {
            config.stream.chunk_size = chunk_size;
        }
        if let Some(delay_ms) = delay_ms_override {
            config.stream.delay_ms = delay_ms;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stream.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        self.palette.resolve()?;
        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)?;
        if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// `~/.config/tinct/config.toml`, when a home directory is known.
    pub fn default_user_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("tinct");
            path.push("config.toml");
            path
        })
    }
}
