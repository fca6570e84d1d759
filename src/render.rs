//! Interface boundary to the rendering collaborator.
//!
//! The host owns N renderable shell instances sharing one mesh and one
//! material template. The rig only produces values: updated transforms,
//! per-shell visibility, the per-shell style block and the per-tick
//! animation phase. Formatting and binding those values to a graphics API
//! is entirely the collaborator's concern.

use glam::{Quat, Vec3};

use crate::options::StyleOptions;

/// Host-side sink for the rig's per-shell outputs.
pub trait ShellRenderer {
    /// Update the transform of shell `index`.
    fn set_transform(
        &mut self,
        index: usize,
        position: Vec3,
        rotation: Quat,
        scale: Vec3,
    );

    /// Toggle visibility of shell `index`.
    fn set_visible(&mut self, index: usize, visible: bool);

    /// Apply the full style block to shell `index`'s material instance.
    fn apply_style(&mut self, index: usize, style: &ShellStyle);

    /// Push the current animation phase (shared by all shells).
    fn set_phase(&mut self, phase: f32);
}

/// Resolved per-shell style values.
///
/// One flat struct per shell instead of a keyed property bag; the only
/// fields that vary across shells are `shell_index` and `shell_count`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellStyle {
    /// Total number of shells in the stack.
    pub shell_count: u32,
    /// This shell's index within the stack.
    pub shell_index: u32,
    /// Extrusion distance of the outermost shell.
    pub shell_length: f32,
    /// Downward sag applied to extruded shells.
    pub shell_droop: f32,
    /// Spike field density across the surface.
    pub spike_density: f32,
    /// Base-width cutoff; higher means skinnier spike bases.
    pub spike_cutoff_min: f32,
    /// Tip-width cutoff; higher means skinnier spike tips.
    pub spike_cutoff_max: f32,
    /// Spike silhouette factor; higher means puffier spikes.
    pub spike_shape_factor: f32,
    /// Spike bend factor; higher means more bendable spikes.
    pub spike_droop_factor: f32,
    /// Lighting smoothness across spike geometry.
    pub shadow_smoothness: f32,
    /// Specular highlight sharpness.
    pub specular_sharpness: f32,
    /// Specular highlight strength.
    pub specular_amount: f32,
    /// Emissive glow strength.
    pub glow_intensity: f32,
    /// RGBA color at spike tips.
    pub tip_color: [f32; 4],
    /// RGBA base body color.
    pub body_color: [f32; 4],
    /// Asset reference for the spike height map, if any.
    pub height_map: Option<String>,
}

impl ShellStyle {
    /// Resolve the style block for shell `index` of `shell_count`.
    #[must_use]
    pub fn for_shell(
        index: usize,
        shell_count: usize,
        options: &StyleOptions,
    ) -> Self {
        Self {
            shell_count: shell_count as u32,
            shell_index: index as u32,
            shell_length: options.shell_length,
            shell_droop: options.shell_droop,
            spike_density: options.spike_density,
            spike_cutoff_min: options.spike_cutoff_min,
            spike_cutoff_max: options.spike_cutoff_max,
            spike_shape_factor: options.spike_shape_factor,
            spike_droop_factor: options.spike_droop_factor,
            shadow_smoothness: options.shadow_smoothness,
            specular_sharpness: options.specular_sharpness,
            specular_amount: options.specular_amount,
            glow_intensity: options.glow_intensity,
            tip_color: options.tip_color,
            body_color: options.body_color,
            height_map: options.height_map.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_shell_threads_index_and_count() {
        let options = StyleOptions::default();
        let style = ShellStyle::for_shell(3, 16, &options);
        assert_eq!(style.shell_index, 3);
        assert_eq!(style.shell_count, 16);
        assert_eq!(style.shell_length, options.shell_length);
        assert_eq!(style.body_color, options.body_color);
        assert_eq!(style.height_map, options.height_map);
    }
}
