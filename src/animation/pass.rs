//! The animation pass: blend every shell toward its layer reference.

use glam::Vec3;
use rayon::prelude::{
    IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator,
};

use super::layers::LayerMap;
use super::snapshot::SnapshotBuffer;
use super::PARALLEL_MIN_SHELLS;
use crate::transform::Pose;

/// Per-tick interpolation weights, recomputed from responsiveness settings
/// and elapsed time so the lag rate is frame-rate independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingFactors {
    /// Position lerp weight in `[0, 1]`.
    pub position: f32,
    /// Rotation slerp weight in `[0, 1]`.
    pub rotation: f32,
}

impl SmoothingFactors {
    /// Derive this tick's weights from responsiveness settings and the
    /// elapsed frame time (exponential-decay approximation).
    ///
    /// A weight of 0 leaves a shell at its previous snapshot value; 1 snaps
    /// it to its reference's value.
    #[must_use]
    pub fn from_responsiveness(
        position_responsiveness: f32,
        rotation_responsiveness: f32,
        delta_time: f32,
    ) -> Self {
        Self {
            position: (position_responsiveness * delta_time).clamp(0.0, 1.0),
            rotation: (rotation_responsiveness * delta_time).clamp(0.0, 1.0),
        }
    }
}

/// The animation pass: advance every shell pose toward its layer
/// reference's snapshotted value and reapply the anchor scale.
///
/// Reads only the snapshot (fully written by this tick's sync pass) and the
/// layer map; each index writes only its own pose, so the fan-out is free
/// of cross-index writes.
///
/// # Panics
///
/// Panics if `poses`, `snapshot` and `layers` disagree on shell count; the
/// driver allocates all three from the same configuration.
pub fn advance(
    poses: &mut [Pose],
    snapshot: &SnapshotBuffer,
    layers: &LayerMap,
    factors: SmoothingFactors,
    anchor_scale: Vec3,
) {
    assert_eq!(poses.len(), snapshot.len());
    assert_eq!(poses.len(), layers.len());

    let blend_shell = |(i, pose): (usize, &mut Pose)| {
        let r = layers.reference(i);
        pose.position = snapshot
            .position(i)
            .lerp(snapshot.position(r), factors.position);
        pose.rotation = snapshot
            .rotation(i)
            .slerp(snapshot.rotation(r), factors.rotation);
        pose.scale = anchor_scale;
    };

    if poses.len() >= PARALLEL_MIN_SHELLS {
        poses.par_iter_mut().enumerate().for_each(blend_shell);
    } else {
        poses.iter_mut().enumerate().for_each(blend_shell);
    }
}
