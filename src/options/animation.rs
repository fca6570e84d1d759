use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shell stack layout and lag behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Number of shell copies rendered over the base mesh.
    #[schemars(title = "Shell Count", range(min = 1, max = 256))]
    pub shell_count: usize,
    /// Number of animation layers the stack is partitioned into. Must not
    /// exceed the shell count.
    #[schemars(title = "Layer Count", range(min = 1, max = 256))]
    pub layer_count: usize,
    /// How quickly shell positions chase their reference; higher snaps
    /// faster.
    #[schemars(title = "Position Responsiveness", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub position_responsiveness: f32,
    /// How quickly shell rotations chase their reference.
    #[schemars(title = "Rotation Responsiveness", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub rotation_responsiveness: f32,
    /// Base speed of the animation phase clock.
    #[schemars(title = "Animation Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub animation_speed: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            shell_count: 16,
            layer_count: 10,
            position_responsiveness: 30.0,
            rotation_responsiveness: 30.0,
            animation_speed: 1.0,
        }
    }
}
