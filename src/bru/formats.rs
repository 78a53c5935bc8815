//! Rendering a parsed document
//!
//! A document is plain serde data, so every output format is a serializer.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::bru::ast::Document;
use crate::bru::config::OutputConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Json,
    JsonCompact,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Json,
        OutputFormat::JsonCompact,
        OutputFormat::Yaml,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::JsonCompact => "json-compact",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown output format `{0}` (expected json, json-compact or yaml)")]
    UnknownFormat(String),
    #[error("failed to render json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to render yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Render a document. `pretty` only affects the `json` format.
pub fn render(doc: &Document, output: &OutputConfig) -> Result<String, FormatError> {
    let rendered = match output.format {
        OutputFormat::Json if output.pretty => serde_json::to_string_pretty(doc)?,
        OutputFormat::Json | OutputFormat::JsonCompact => serde_json::to_string(doc)?,
        OutputFormat::Yaml => serde_yaml::to_string(doc)?,
    };
    Ok(rendered)
}
