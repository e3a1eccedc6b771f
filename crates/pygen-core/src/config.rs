//! Generator configuration.
//!
//! The binding list and module preamble are configuration, not code:
//! they are loaded from a TOML file and drive one generation pass.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level generator configuration, loaded from `pygen.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    /// Go package every emitted module belongs to.
    pub package: String,

    /// Prefix for class names exposed to the scripting runtime
    /// ("sublime" yields "sublime.Region").
    pub namespace: String,

    /// Import block of every emitted module.
    #[serde(default)]
    pub imports: Vec<String>,

    /// `var (_ = ...)` declarations keeping imports referenced even
    /// when every member of a type ends up skipped.
    #[serde(default)]
    pub anchors: Vec<String>,

    /// External formatter command; the output path is appended as the
    /// final argument. Absent means the rendered text is final.
    #[serde(default)]
    pub formatter: Option<Vec<String>>,

    /// Ordered list of types to bind. Order is generation order.
    #[serde(default)]
    pub bindings: Vec<BindingEntry>,
}

/// One entry of the binding list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingEntry {
    /// Registered name of the type to wrap.
    #[serde(rename = "type")]
    pub type_name: String,

    /// Path the generated module is written to.
    pub output: PathBuf,

    /// Emit a constructor bridge.
    #[serde(default)]
    pub creatable: bool,

    /// Wrap through a pointer.
    #[serde(default)]
    pub pointer: bool,

    /// Member names to leave out of generation.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl GenConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown type in bindings list: {0}")]
    UnknownType(String),
}
