//! Configuration loading
//!
//! `defaults/bru.default.toml` is embedded into the crate so the documented
//! defaults and the runtime behavior stay in sync. Callers layer user files
//! and single-key overrides on top with [`Loader`] before deserializing into
//! [`BruConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::bru::formats::OutputFormat;

const DEFAULT_TOML: &str = include_str!("../../defaults/bru.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct BruConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

/// Knobs that change how a document is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// Leading whitespace removed from every line of a text block or
    /// multiline value
    pub indent_width: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// How the command line tool renders a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

/// Layers user overrides over the built-in defaults
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. A missing file is an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file if it exists
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set a single key, e.g. `output.format` from a command line flag
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<BruConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<BruConfig, ConfigError> {
    Loader::new().build()
}
