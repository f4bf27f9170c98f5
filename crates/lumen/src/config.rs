//! Configuration file loading for lumen.
//!
//! Reads `lumen.config.json` from the current working directory, or the file
//! given with `--config`. Also provides the JSON Schema for editor
//! autocompletion.

use lumen_patina::{ConfigError, LintConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "lumen.config.json";

/// Top-level lumen configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LumenConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Lint configuration.
    #[serde(default)]
    pub lint: LintConfig,
}

impl LumenConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Load the configuration.
///
/// An explicit `path` must exist. Without one, `lumen.config.json` in the
/// current directory is used when present, and defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<LumenConfig, ConfigError> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let base = std::env::current_dir().unwrap_or_default();
            let candidate = base.join(CONFIG_FILE_NAME);
            if !candidate.exists() {
                tracing::debug!("no {CONFIG_FILE_NAME} found, using defaults");
                return Ok(LumenConfig::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
        path: config_path.clone(),
        source,
    })?;
    tracing::debug!(path = %config_path.display(), "loaded configuration");
    LumenConfig::from_json(&content)
}

/// JSON Schema for `lumen.config.json`.
pub const LUMEN_CONFIG_SCHEMA: &str = r##"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Lumen Configuration",
  "description": "Configuration file for lumen - accessible-content linting for JSX documents",
  "type": "object",
  "definitions": {
    "level": {
      "type": "string",
      "enum": ["off", "warn", "error"]
    },
    "hasContentOptions": {
      "type": "object",
      "properties": {
        "components": {
          "type": "array",
          "description": "Custom components checked like the built-in tags",
          "items": { "type": "string" },
          "uniqueItems": true
        },
        "attributes": {
          "type": "array",
          "description": "Props whose non-empty string value counts as accessible content",
          "items": { "type": "string" }
        }
      },
      "additionalProperties": false
    },
    "hasContentSetting": {
      "oneOf": [
        { "$ref": "#/definitions/level" },
        {
          "type": "array",
          "items": [
            { "$ref": "#/definitions/level" },
            { "$ref": "#/definitions/hasContentOptions" }
          ],
          "minItems": 2,
          "maxItems": 2
        }
      ]
    }
  },
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "lint": {
      "type": "object",
      "description": "Lint configuration",
      "properties": {
        "locale": {
          "type": "string",
          "description": "Message locale",
          "enum": ["en", "ja", "zh"]
        },
        "rules": {
          "type": "object",
          "properties": {
            "jsx-a11y/anchor-has-content": { "$ref": "#/definitions/hasContentSetting" },
            "jsx-a11y/heading-has-content": { "$ref": "#/definitions/hasContentSetting" }
          },
          "additionalProperties": false
        }
      },
      "additionalProperties": false
    }
  },
  "additionalProperties": false
}"##;

/// Write the JSON Schema to `node_modules/.lumen/lumen.config.schema.json`.
pub fn write_schema(dir: &Path) -> std::io::Result<PathBuf> {
    let schema_dir = dir.join("node_modules/.lumen");
    std::fs::create_dir_all(&schema_dir)?;
    let schema_path = schema_dir.join("lumen.config.schema.json");
    std::fs::write(&schema_path, LUMEN_CONFIG_SCHEMA)?;
    Ok(schema_path)
}
