//! Front-end configuration.
//!
//! Loaded from an optional JSON file; command-line flags override it.
//!
//! ```json
//! { "strict": true, "format": "json-pretty" }
//! ```

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CodecError, Result};
use crate::policy::DecodePolicy;

/// How results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Labelled lines, one per stage.
    #[default]
    Human,
    /// Single-line JSON envelope.
    Json,
    /// Indented JSON envelope.
    JsonPretty,
}

/// Front-end settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Reject empty or noisy decode input instead of filtering it.
    pub strict: bool,
    /// Output format.
    pub format: OutputFormat,
}

impl Config {
    /// Parse configuration from JSON text. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CodecError::Config(e.to_string()))
    }

    /// Read configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Apply command-line overrides on top of file values.
    ///
    /// # Arguments
    /// * `format` - Output format flag, if given
    /// * `strict` - `Some(true)` for `--strict`, `Some(false)` for
    ///   `--no-strict`, `None` to keep the file value
    pub fn with_overrides(&mut self, format: Option<OutputFormat>, strict: Option<bool>) {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(strict) = strict {
            self.strict = strict;
        }
    }

    /// Decode policy implied by these settings.
    pub fn decode_policy(&self) -> DecodePolicy {
        if self.strict {
            DecodePolicy::strict()
        } else {
            DecodePolicy::lenient()
        }
    }
}
