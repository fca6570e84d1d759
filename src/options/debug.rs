use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Development-time toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Re-push static style parameters every tick for interactive tuning.
    /// Do not enable in shipped builds.
    #[schemars(title = "Live Restyle")]
    pub live_restyle: bool,
    /// Whether the shell stack is visible at all.
    #[schemars(title = "View Shells")]
    pub view_shells: bool,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            live_restyle: false,
            view_shells: true,
        }
    }
}
