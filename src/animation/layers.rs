//! Layer reference map construction.
//!
//! Shells are partitioned into `layer_count` contiguous layers of
//! `L = shell_count / layer_count` shells each (integer division). Every
//! shell animates toward a reference shell at an equal-or-earlier index:
//! a layer's first shell references the previous layer's first shell
//! (clamped at 0), and the rest of a layer references its own first shell.
//! Chained through the snapshot buffer's rotated write, this yields the
//! cascading lag that makes the stack trail the anchor.

use crate::error::ShellRigError;

/// Precomputed per-shell animation reference indices.
///
/// Immutable after construction; rebuilt only when shell or layer count
/// changes (see [`crate::driver::ShellRig::reconfigure`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerMap {
    refs: Vec<usize>,
}

impl LayerMap {
    /// Build the reference map for `shell_count` shells in `layer_count`
    /// layers.
    ///
    /// # Errors
    ///
    /// Returns [`ShellRigError::Config`] if either count is zero or if
    /// `layer_count > shell_count` (layer size would be zero).
    pub fn build(
        shell_count: usize,
        layer_count: usize,
    ) -> Result<Self, ShellRigError> {
        if shell_count == 0 {
            return Err(ShellRigError::Config(
                "shell count must be positive".into(),
            ));
        }
        if layer_count == 0 {
            return Err(ShellRigError::Config(
                "layer count must be positive".into(),
            ));
        }
        let layer_size = shell_count / layer_count;
        if layer_size == 0 {
            return Err(ShellRigError::Config(format!(
                "layer count {layer_count} exceeds shell count {shell_count}"
            )));
        }

        let refs = (0..shell_count)
            .map(|i| {
                let excess = i % layer_size;
                if excess == 0 {
                    i.saturating_sub(layer_size)
                } else {
                    i - excess
                }
            })
            .collect();

        Ok(Self { refs })
    }

    /// Number of shells covered by the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Whether the map is empty (never true for a built map).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Reference index for shell `i`.
    #[must_use]
    #[inline]
    pub fn reference(&self, i: usize) -> usize {
        self.refs[i]
    }

    /// The full reference array.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.refs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_shell_layers_chain_backwards() {
        // 16 shells in 10 layers -> integer layer size 1, so every shell
        // references its immediate predecessor.
        let map = LayerMap::build(16, 10).unwrap();
        for i in 0..16 {
            assert_eq!(map.reference(i), i.saturating_sub(1), "shell {i}");
        }
    }

    #[test]
    fn four_layers_of_four() {
        let map = LayerMap::build(16, 4).unwrap();
        let expected: &[usize] =
            &[0, 0, 0, 0, 0, 4, 4, 4, 4, 8, 8, 8, 8, 12, 12, 12];
        assert_eq!(map.as_slice(), expected);
    }

    #[test]
    fn uneven_division_truncates_layer_size() {
        // 10 / 3 -> layer size 3; the tail shell falls into a fourth block.
        let map = LayerMap::build(10, 3).unwrap();
        let expected: &[usize] = &[0, 0, 0, 0, 3, 3, 3, 6, 6, 6];
        assert_eq!(map.as_slice(), expected);
    }

    #[test]
    fn references_never_point_forward() {
        for shell_count in [1, 2, 7, 16, 64, 256] {
            for layer_count in 1..=shell_count {
                let map = LayerMap::build(shell_count, layer_count).unwrap();
                for i in 0..shell_count {
                    assert!(
                        map.reference(i) <= i,
                        "forward reference at shell {i} \
                         (N={shell_count}, C={layer_count})"
                    );
                }
            }
        }
    }

    #[test]
    fn layer_interiors_share_their_layer_start() {
        let map = LayerMap::build(32, 4).unwrap();
        let layer_size = 8;
        for i in 0..32 {
            if i % layer_size != 0 {
                assert_eq!(map.reference(i), i - i % layer_size);
            }
        }
    }

    #[test]
    fn zero_shell_count_is_rejected() {
        assert!(matches!(
            LayerMap::build(0, 1),
            Err(ShellRigError::Config(_))
        ));
    }

    #[test]
    fn zero_layer_count_is_rejected() {
        assert!(matches!(
            LayerMap::build(16, 0),
            Err(ShellRigError::Config(_))
        ));
    }

    #[test]
    fn more_layers_than_shells_is_rejected() {
        assert!(matches!(
            LayerMap::build(4, 5),
            Err(ShellRigError::Config(_))
        ));
    }
}
