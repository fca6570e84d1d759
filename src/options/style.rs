use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shell and spike styling parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Style", inline)]
#[serde(default)]
pub struct StyleOptions {
    /// Extrusion distance of the outermost shell.
    #[schemars(title = "Shell Length", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub shell_length: f32,
    /// Downward sag applied to extruded shells.
    #[schemars(title = "Shell Droop", range(min = 0.0, max = 0.1), extend("step" = 0.005))]
    pub shell_droop: f32,
    /// Spike field density across the surface.
    #[schemars(title = "Spike Density", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub spike_density: f32,
    /// Higher value = skinnier spike base.
    #[schemars(title = "Spike Cutoff Min", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub spike_cutoff_min: f32,
    /// Higher value = skinnier spike tip.
    #[schemars(title = "Spike Cutoff Max", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub spike_cutoff_max: f32,
    /// Higher value = puffier spikes.
    #[schemars(title = "Spike Shape", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub spike_shape_factor: f32,
    /// Higher value = bendable spikes.
    #[schemars(title = "Spike Droop", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub spike_droop_factor: f32,
    /// Higher value = smoother lighting on spikes.
    #[schemars(title = "Shadow Smoothness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub shadow_smoothness: f32,
    /// Specular highlight sharpness.
    #[schemars(title = "Specular Sharpness", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub specular_sharpness: f32,
    /// Specular highlight strength.
    #[schemars(title = "Specular Amount", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub specular_amount: f32,
    /// Emissive glow strength.
    #[schemars(title = "Glow Intensity", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub glow_intensity: f32,
    /// RGBA color at spike tips.
    #[schemars(skip)]
    pub tip_color: [f32; 4],
    /// RGBA base body color.
    #[schemars(skip)]
    pub body_color: [f32; 4],
    /// Asset reference for the spike height map.
    #[schemars(skip)]
    pub height_map: Option<String>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            shell_length: 0.15,
            shell_droop: 0.03,
            spike_density: 10.0,
            spike_cutoff_min: 0.2,
            spike_cutoff_max: 0.6,
            spike_shape_factor: 1.0,
            spike_droop_factor: 1.0,
            shadow_smoothness: 0.5,
            specular_sharpness: 16.0,
            specular_amount: 1.0,
            glow_intensity: 2.0,
            tip_color: [1.0, 0.95, 0.8, 1.0],
            body_color: [0.35, 0.3, 0.6, 1.0],
            height_map: None,
        }
    }
}
