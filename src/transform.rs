//! Shell and anchor pose representation.

use glam::{Quat, Vec3};

/// Spatial state of one shell (or of the anchor body): position, rotation
/// and scale.
///
/// Shell poses are owned by [`crate::driver::ShellRig`] and mutated
/// exclusively by the animation pass; the anchor pose is sampled by the
/// host and passed in by value each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// World-space rotation (unit quaternion).
    pub rotation: Quat,
    /// Local scale, reapplied from the anchor every tick.
    pub scale: Vec3,
}

impl Pose {
    /// Identity pose at the origin with unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Pose from explicit components.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_default() {
        assert_eq!(Pose::default(), Pose::IDENTITY);
        assert_eq!(Pose::IDENTITY.position, Vec3::ZERO);
        assert_eq!(Pose::IDENTITY.rotation, Quat::IDENTITY);
        assert_eq!(Pose::IDENTITY.scale, Vec3::ONE);
    }
}
