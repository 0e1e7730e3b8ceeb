//! Configuration loader.
//!
//! `defaults/quickmm.default.toml` is embedded into the crate so the defaults
//! documented there are the ones in effect. Applications layer their own
//! files and overrides on top via [`Loader`] before deserializing into
//! [`QuickConfig`].

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/quickmm.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuickConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

/// Knobs that change how markup is parsed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParserConfig {
    /// Upper bound on open scopes, nested sub-parses and pre-process expansion.
    pub max_depth: usize,
    /// Shadow alpha used when a `<shadow>` tag gives none.
    pub default_shadow_alpha: f32,
}

impl ParserConfig {
    pub const DEFAULT: ParserConfig = ParserConfig {
        max_depth: 256,
        default_shadow_alpha: 0.25,
    };
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig::DEFAULT
    }
}

/// Controls how the `qmm` binary prints parsed trees.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_styles: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Treeviz,
    Json,
    Plain,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Treeviz,
        OutputFormat::Json,
        OutputFormat::Plain,
    ];

    /// Name of the formatter registered for this format.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Json => "json",
            OutputFormat::Plain => "plain",
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<QuickConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QuickConfig, ConfigError> {
    Loader::new().build()
}
