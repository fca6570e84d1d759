//! Centralized rig options with TOML preset support.
//!
//! All tweakable settings (animation behavior, shell/spike styling, debug
//! toggles) are consolidated here. Options serialize to/from TOML for
//! presets, and the UI-exposed subset can be described as a JSON Schema.

mod animation;
mod debug;
mod style;

use std::path::Path;

pub use animation::AnimationOptions;
pub use debug::DebugOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use style::StyleOptions;

use crate::error::ShellRigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[style]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Shell stack layout and lag behavior.
    pub animation: AnimationOptions,
    /// Shell and spike styling parameters.
    pub style: StyleOptions,
    /// Development-time toggles.
    pub debug: DebugOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ShellRigError> {
        let content =
            std::fs::read_to_string(path).map_err(ShellRigError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ShellRigError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ShellRigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShellRigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ShellRigError::Io)?;
        }
        std::fs::write(path, content).map_err(ShellRigError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
