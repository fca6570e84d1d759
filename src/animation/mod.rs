//! The dual-pass shell animation pipeline.
//!
//! Each tick the driver runs the sync pass ([`snapshot::SnapshotBuffer::sync`])
//! and then the animation pass ([`pass::advance`]) over the shell stack. Both
//! passes are data-parallel: every index writes only its own output slot, and
//! the strict sync-then-advance sequencing inside the driver's tick is the
//! only ordering the pipeline needs.

pub mod clock;
pub mod layers;
pub mod pass;
pub mod snapshot;

/// Shell counts below this run the passes as plain serial loops; rayon
/// fan-out only pays for itself on stacks far larger than the typical
/// 16-256 shells.
pub(crate) const PARALLEL_MIN_SHELLS: usize = 512;
