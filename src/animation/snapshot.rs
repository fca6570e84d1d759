//! Snapshot buffer and the per-tick sync pass.

use glam::{Quat, Vec3};
use rayon::prelude::{
    IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator,
};

use super::PARALLEL_MIN_SHELLS;
use crate::transform::Pose;

/// Double-buffered "last known" transform values consumed by the animation
/// pass.
///
/// Two parallel arrays indexed by shell slot. After a sync, slot 0 mirrors
/// the live anchor and slot `k` (k > 0) mirrors the pose shell `k-1` held
/// before this tick's animation pass — a one-slot-rotated copy of the chain
/// with the anchor substituted at the wrap boundary.
#[derive(Debug, Clone)]
pub struct SnapshotBuffer {
    positions: Vec<Vec3>,
    rotations: Vec<Quat>,
}

impl SnapshotBuffer {
    /// Allocate a buffer for `shell_count` slots, every slot seeded from
    /// the anchor so the first tick blends from a defined state.
    #[must_use]
    pub fn seeded(shell_count: usize, anchor: &Pose) -> Self {
        Self {
            positions: vec![anchor.position; shell_count],
            rotations: vec![anchor.rotation; shell_count],
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the buffer has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Snapshotted position in slot `i`.
    #[must_use]
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        self.positions[i]
    }

    /// Snapshotted rotation in slot `i`.
    #[must_use]
    #[inline]
    pub fn rotation(&self, i: usize) -> Quat {
        self.rotations[i]
    }

    /// The sync pass: capture the current shell chain plus the anchor.
    ///
    /// Each destination slot is written exactly once (slot 0 from the
    /// anchor, slot `k` from `poses[k-1]`), so the parallel form has no
    /// cross-slot writes. The caller sequences this strictly before the
    /// animation pass of the same tick.
    ///
    /// # Panics
    ///
    /// Panics if `poses.len()` differs from the buffer length; the driver
    /// allocates both from the same shell count.
    pub fn sync(&mut self, poses: &[Pose], anchor: &Pose) {
        assert_eq!(poses.len(), self.positions.len());

        let write_slot = |(dst, (pos, rot)): (usize, (&mut Vec3, &mut Quat))| {
            if dst == 0 {
                *pos = anchor.position;
                *rot = anchor.rotation;
            } else {
                let src = &poses[dst - 1];
                *pos = src.position;
                *rot = src.rotation;
            }
        };

        if poses.len() >= PARALLEL_MIN_SHELLS {
            self.positions
                .par_iter_mut()
                .zip(self.rotations.par_iter_mut())
                .enumerate()
                .for_each(write_slot);
        } else {
            self.positions
                .iter_mut()
                .zip(self.rotations.iter_mut())
                .enumerate()
                .for_each(write_slot);
        }
    }
}
