// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math compares against 0.0 / 1.0 and casts are intentional
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::suboptimal_flops)]

//! Per-frame transform animation core for shell-textured fur/spike
//! rendering.
//!
//! A shell-textured surface is a base mesh rendered N times at increasing
//! offsets; this crate animates the N shell transforms so they lag behind
//! and smoothly converge toward an anchor transform (the driven body),
//! producing springy trailing motion without per-shell simulation.
//!
//! # Key entry points
//!
//! - [`driver::ShellRig`] - the tick-driven animation driver
//! - [`render::ShellRenderer`] - the trait the host's renderer implements
//! - [`options::Options`] - runtime configuration (animation, style, debug)
//!
//! # Architecture
//!
//! Each tick runs two strictly ordered data-parallel passes over the shell
//! stack: a sync pass that snapshots current poses (anchor injected at the
//! wrap slot) into a position/rotation buffer, then an animation pass that
//! blends every pose toward its layer-reference snapshot slot with
//! frame-rate-independent smoothing factors. The updated poses are handed
//! to the host's [`render::ShellRenderer`] for drawing.

pub mod animation;
pub mod driver;
pub mod error;
pub mod options;
pub mod render;
pub mod transform;
