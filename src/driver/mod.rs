//! Tick-driven shell animation driver.
//!
//! [`ShellRig`] owns the transform store, snapshot buffer and layer map,
//! and walks the Uninitialized → Active → Disposed lifecycle. The host
//! calls [`ShellRig::init`] once, [`ShellRig::tick`] every frame with the
//! sampled anchor pose, and [`ShellRig::shutdown`] on teardown; call
//! timing and frequency are entirely the host's concern.

mod style_sync;

use crate::animation::clock::AnimationClock;
use crate::animation::layers::LayerMap;
use crate::animation::pass::{self, SmoothingFactors};
use crate::animation::snapshot::SnapshotBuffer;
use crate::error::ShellRigError;
use crate::options::Options;
use crate::render::ShellRenderer;
use crate::transform::Pose;

// ---------------------------------------------------------------------------
// ShellRig
// ---------------------------------------------------------------------------

/// The shell animation driver.
///
/// Steady-state ticks are infallible: every failure mode is a
/// configuration error surfaced by [`ShellRig::init`] or
/// [`ShellRig::reconfigure`] before the rig enters its Active state.
#[derive(Debug)]
pub struct ShellRig {
    options: Options,
    state: RigState,
}

#[derive(Debug)]
enum RigState {
    Uninitialized,
    Active(ActiveRig),
    Disposed,
}

/// Storage owned by an Active rig, released on shutdown.
#[derive(Debug)]
struct ActiveRig {
    poses: Vec<Pose>,
    snapshot: SnapshotBuffer,
    layers: LayerMap,
    clock: AnimationClock,
}

impl ShellRig {
    /// A rig holding `options`, not yet initialized.
    #[must_use]
    pub const fn new(options: Options) -> Self {
        Self {
            options,
            state: RigState::Uninitialized,
        }
    }

    /// Current options.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Whether the rig is in its Active state.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, RigState::Active(_))
    }

    /// Current animation phase, or 0 when the rig is not active.
    #[must_use]
    pub const fn phase(&self) -> f32 {
        match &self.state {
            RigState::Active(active) => active.clock.phase(),
            _ => 0.0,
        }
    }

    /// Current shell poses (empty when the rig is not active).
    #[must_use]
    pub fn poses(&self) -> &[Pose] {
        match &self.state {
            RigState::Active(active) => &active.poses,
            _ => &[],
        }
    }

    /// Transition Uninitialized → Active: allocate the transform store
    /// (every shell starts at the anchor's current pose), seed the
    /// snapshot buffer, build the layer map and push the full static
    /// style set to the renderer.
    ///
    /// # Errors
    ///
    /// [`ShellRigError::Config`] for an invalid shell/layer configuration;
    /// [`ShellRigError::Lifecycle`] if the rig is already active or
    /// disposed. On error the rig does not enter the Active state.
    pub fn init<R: ShellRenderer>(
        &mut self,
        anchor: &Pose,
        renderer: &mut R,
    ) -> Result<(), ShellRigError> {
        match self.state {
            RigState::Uninitialized => {}
            RigState::Active(_) => {
                return Err(ShellRigError::Lifecycle(
                    "rig is already initialized".into(),
                ));
            }
            RigState::Disposed => {
                return Err(ShellRigError::Lifecycle(
                    "rig has been disposed".into(),
                ));
            }
        }

        let layers = LayerMap::build(
            self.options.animation.shell_count,
            self.options.animation.layer_count,
        )?;
        let shell_count = layers.len();

        self.state = RigState::Active(ActiveRig {
            poses: vec![*anchor; shell_count],
            snapshot: SnapshotBuffer::seeded(shell_count, anchor),
            layers,
            clock: AnimationClock::new(),
        });

        style_sync::push_full_style(&self.options, renderer);

        log::debug!(
            "shell rig active: {} shells in {} layers",
            shell_count,
            self.options.animation.layer_count
        );
        Ok(())
    }

    /// One Active-state iteration: advance the animation clock, compute
    /// this tick's smoothing factors, run the sync pass then the animation
    /// pass (strictly ordered, both complete before this method returns),
    /// and hand the updated poses, visibility and phase to the renderer.
    ///
    /// A no-op unless the rig is active.
    pub fn tick<R: ShellRenderer>(
        &mut self,
        delta_time: f32,
        anchor: &Pose,
        renderer: &mut R,
    ) {
        let RigState::Active(active) = &mut self.state else {
            log::debug!("tick ignored: rig not active");
            return;
        };

        if self.options.debug.live_restyle {
            style_sync::push_full_style(&self.options, renderer);
        }

        let phase = active
            .clock
            .advance(delta_time, self.options.animation.animation_speed);
        let factors = SmoothingFactors::from_responsiveness(
            self.options.animation.position_responsiveness,
            self.options.animation.rotation_responsiveness,
            delta_time,
        );

        active.snapshot.sync(&active.poses, anchor);
        pass::advance(
            &mut active.poses,
            &active.snapshot,
            &active.layers,
            factors,
            anchor.scale,
        );

        for (index, pose) in active.poses.iter().enumerate() {
            renderer.set_transform(
                index,
                pose.position,
                pose.rotation,
                pose.scale,
            );
            renderer.set_visible(index, self.options.debug.view_shells);
        }
        renderer.set_phase(phase);
    }

    /// Transition Active → Disposed, releasing the snapshot buffer and
    /// layer map. Idempotent: repeated calls are no-ops. Shell renderables
    /// are owned by the rendering collaborator and are not destroyed here.
    pub fn shutdown(&mut self) {
        match self.state {
            RigState::Disposed => {}
            RigState::Uninitialized | RigState::Active(_) => {
                self.state = RigState::Disposed;
                log::debug!("shell rig disposed");
            }
        }
    }

    /// Apply new options, rebuilding the layer map and buffers when the
    /// rig is active (shells restart at the anchor's current pose) and
    /// re-pushing the full static style set.
    ///
    /// Shell and layer counts are live-editable only through this entry
    /// point; editing options between ticks without it would leave the
    /// layer map stale.
    ///
    /// # Errors
    ///
    /// [`ShellRigError::Config`] for an invalid shell/layer configuration
    /// (the rig keeps its previous configuration);
    /// [`ShellRigError::Lifecycle`] if the rig has been disposed.
    pub fn reconfigure<R: ShellRenderer>(
        &mut self,
        options: Options,
        anchor: &Pose,
        renderer: &mut R,
    ) -> Result<(), ShellRigError> {
        let layers = LayerMap::build(
            options.animation.shell_count,
            options.animation.layer_count,
        )?;

        match &mut self.state {
            RigState::Disposed => Err(ShellRigError::Lifecycle(
                "cannot reconfigure a disposed rig".into(),
            )),
            RigState::Uninitialized => {
                self.options = options;
                Ok(())
            }
            RigState::Active(active) => {
                let shell_count = layers.len();
                active.poses = vec![*anchor; shell_count];
                active.snapshot =
                    SnapshotBuffer::seeded(shell_count, anchor);
                active.layers = layers;
                self.options = options;

                style_sync::push_full_style(&self.options, renderer);

                log::debug!(
                    "shell rig reconfigured: {} shells in {} layers",
                    shell_count,
                    self.options.animation.layer_count
                );
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::options::AnimationOptions;
    use crate::render::ShellStyle;

    /// Test double capturing everything the rig pushes to the host.
    struct RecordingRenderer {
        transforms: Vec<(Vec3, Quat, Vec3)>,
        visible: Vec<bool>,
        styles: Vec<Option<ShellStyle>>,
        style_pushes: usize,
        phase_pushes: usize,
        phase: f32,
    }

    impl RecordingRenderer {
        fn new(capacity: usize) -> Self {
            Self {
                transforms: vec![
                    (Vec3::ZERO, Quat::IDENTITY, Vec3::ONE);
                    capacity
                ],
                visible: vec![false; capacity],
                styles: vec![None; capacity],
                style_pushes: 0,
                phase_pushes: 0,
                phase: -1.0,
            }
        }
    }

    impl ShellRenderer for RecordingRenderer {
        fn set_transform(
            &mut self,
            index: usize,
            position: Vec3,
            rotation: Quat,
            scale: Vec3,
        ) {
            self.transforms[index] = (position, rotation, scale);
        }

        fn set_visible(&mut self, index: usize, visible: bool) {
            self.visible[index] = visible;
        }

        fn apply_style(&mut self, index: usize, style: &ShellStyle) {
            self.styles[index] = Some(style.clone());
            self.style_pushes += 1;
        }

        fn set_phase(&mut self, phase: f32) {
            self.phase = phase;
            self.phase_pushes += 1;
        }
    }

    fn anchor_at(x: f32) -> Pose {
        Pose::new(
            Vec3::new(x, 2.0, 0.0),
            Quat::from_rotation_y(0.3),
            Vec3::splat(1.5),
        )
    }

    fn small_rig_options(shells: usize, layers: usize) -> Options {
        Options {
            animation: AnimationOptions {
                shell_count: shells,
                layer_count: layers,
                ..AnimationOptions::default()
            },
            ..Options::default()
        }
    }

    #[test]
    fn init_pushes_style_to_every_shell() {
        let mut rig = ShellRig::new(Options::default());
        let mut renderer = RecordingRenderer::new(16);

        rig.init(&Pose::IDENTITY, &mut renderer).unwrap();

        assert!(rig.is_active());
        assert_eq!(renderer.style_pushes, 16);
        for (i, style) in renderer.styles.iter().enumerate() {
            let style = style.as_ref().unwrap();
            assert_eq!(style.shell_index, i as u32);
            assert_eq!(style.shell_count, 16);
        }
    }

    #[test]
    fn init_seeds_every_shell_at_the_anchor() {
        let anchor = anchor_at(5.0);
        let mut rig = ShellRig::new(small_rig_options(8, 4));
        let mut renderer = RecordingRenderer::new(8);

        rig.init(&anchor, &mut renderer).unwrap();

        assert_eq!(rig.poses().len(), 8);
        for pose in rig.poses() {
            assert_eq!(*pose, anchor);
        }
    }

    #[test]
    fn init_rejects_layer_count_above_shell_count() {
        let mut rig = ShellRig::new(small_rig_options(4, 9));
        let mut renderer = RecordingRenderer::new(4);

        let err = rig.init(&Pose::IDENTITY, &mut renderer).unwrap_err();
        assert!(matches!(err, ShellRigError::Config(_)));
        assert!(!rig.is_active());
        assert_eq!(renderer.style_pushes, 0);
    }

    #[test]
    fn double_init_is_a_lifecycle_error() {
        let mut rig = ShellRig::new(small_rig_options(4, 2));
        let mut renderer = RecordingRenderer::new(4);

        rig.init(&Pose::IDENTITY, &mut renderer).unwrap();
        let err = rig.init(&Pose::IDENTITY, &mut renderer).unwrap_err();
        assert!(matches!(err, ShellRigError::Lifecycle(_)));
    }

    #[test]
    fn tick_pushes_transforms_visibility_and_phase() {
        let mut rig = ShellRig::new(small_rig_options(8, 4));
        let mut renderer = RecordingRenderer::new(8);
        rig.init(&Pose::IDENTITY, &mut renderer).unwrap();

        let anchor = anchor_at(3.0);
        rig.tick(1.0 / 60.0, &anchor, &mut renderer);

        assert_eq!(renderer.phase_pushes, 1);
        assert!(renderer.phase > 0.0);
        for i in 0..8 {
            assert!(renderer.visible[i]);
            // Scale is reapplied from the anchor every tick.
            assert_eq!(renderer.transforms[i].2, anchor.scale);
        }
    }

    #[test]
    fn tick_before_init_is_a_noop() {
        let mut rig = ShellRig::new(Options::default());
        let mut renderer = RecordingRenderer::new(16);

        rig.tick(1.0 / 60.0, &Pose::IDENTITY, &mut renderer);

        assert_eq!(renderer.phase_pushes, 0);
        assert_eq!(renderer.style_pushes, 0);
    }

    #[test]
    fn view_shells_off_hides_every_shell() {
        let mut options = small_rig_options(4, 2);
        options.debug.view_shells = false;
        let mut rig = ShellRig::new(options);
        let mut renderer = RecordingRenderer::new(4);
        rig.init(&Pose::IDENTITY, &mut renderer).unwrap();

        rig.tick(1.0 / 60.0, &Pose::IDENTITY, &mut renderer);

        assert!(renderer.visible.iter().all(|v| !v));
    }

    #[test]
    fn live_restyle_repushes_style_every_tick() {
        let mut options = small_rig_options(4, 2);
        options.debug.live_restyle = true;
        let mut rig = ShellRig::new(options);
        let mut renderer = RecordingRenderer::new(4);
        rig.init(&Pose::IDENTITY, &mut renderer).unwrap();
        assert_eq!(renderer.style_pushes, 4);

        rig.tick(1.0 / 60.0, &Pose::IDENTITY, &mut renderer);
        rig.tick(1.0 / 60.0, &Pose::IDENTITY, &mut renderer);

        assert_eq!(renderer.style_pushes, 12);
    }

    #[test]
    fn stack_converges_to_a_static_anchor_within_n_ticks() {
        // Responsiveness 100 at dt 0.1 clamps both factors to 1, so each
        // tick fully propagates poses one reference step down the chain.
        let shells = 8;
        let mut options = small_rig_options(shells, 4);
        options.animation.position_responsiveness = 100.0;
        options.animation.rotation_responsiveness = 100.0;
        let mut rig = ShellRig::new(options);
        let mut renderer = RecordingRenderer::new(shells);

        rig.init(&Pose::IDENTITY, &mut renderer).unwrap();

        let anchor = anchor_at(10.0);
        for _ in 0..shells {
            rig.tick(0.1, &anchor, &mut renderer);
        }

        for (i, pose) in rig.poses().iter().enumerate() {
            assert!(
                (pose.position - anchor.position).length() < 1e-4,
                "shell {i} position {:?}",
                pose.position
            );
            assert!(
                pose.rotation.dot(anchor.rotation).abs() > 1.0 - 1e-5,
                "shell {i} rotation"
            );
            assert_eq!(pose.scale, anchor.scale, "shell {i} scale");
        }
    }

    #[test]
    fn zero_responsiveness_leaves_the_stack_behind() {
        let mut options = small_rig_options(4, 2);
        options.animation.position_responsiveness = 0.0;
        options.animation.rotation_responsiveness = 0.0;
        let mut rig = ShellRig::new(options);
        let mut renderer = RecordingRenderer::new(4);

        rig.init(&Pose::IDENTITY, &mut renderer).unwrap();

        let anchor = anchor_at(10.0);
        rig.tick(1.0 / 60.0, &anchor, &mut renderer);

        // Shell 0 blends from the anchor's own snapshot slot, so it tracks
        // the anchor even at factor 0; the rest of the stack stays put.
        // Scale follows the moved anchor everywhere.
        assert_eq!(rig.poses()[0].position, anchor.position);
        for pose in &rig.poses()[1..] {
            assert_eq!(pose.position, Vec3::ZERO);
        }
        for pose in rig.poses() {
            assert_eq!(pose.scale, anchor.scale);
        }
    }

    #[test]
    fn shutdown_is_idempotent_and_tick_becomes_a_noop() {
        let mut rig = ShellRig::new(small_rig_options(4, 2));
        let mut renderer = RecordingRenderer::new(4);
        rig.init(&Pose::IDENTITY, &mut renderer).unwrap();
        rig.tick(1.0 / 60.0, &Pose::IDENTITY, &mut renderer);

        rig.shutdown();
        assert!(!rig.is_active());
        rig.shutdown(); // second call must be a no-op

        let pushes_before = renderer.phase_pushes;
        rig.tick(1.0 / 60.0, &Pose::IDENTITY, &mut renderer);
        assert_eq!(renderer.phase_pushes, pushes_before);
        assert!(rig.poses().is_empty());
    }

    #[test]
    fn init_after_shutdown_is_rejected() {
        let mut rig = ShellRig::new(small_rig_options(4, 2));
        let mut renderer = RecordingRenderer::new(4);
        rig.shutdown();

        let err = rig.init(&Pose::IDENTITY, &mut renderer).unwrap_err();
        assert!(matches!(err, ShellRigError::Lifecycle(_)));
    }

    #[test]
    fn reconfigure_rebuilds_the_stack_live() {
        let mut rig = ShellRig::new(small_rig_options(8, 4));
        let mut renderer = RecordingRenderer::new(32);
        rig.init(&Pose::IDENTITY, &mut renderer).unwrap();
        assert_eq!(renderer.style_pushes, 8);

        let anchor = anchor_at(1.0);
        rig.reconfigure(small_rig_options(32, 8), &anchor, &mut renderer)
            .unwrap();

        assert_eq!(rig.poses().len(), 32);
        assert_eq!(renderer.style_pushes, 8 + 32);
        for pose in rig.poses() {
            assert_eq!(*pose, anchor);
        }
    }

    #[test]
    fn invalid_reconfigure_keeps_the_previous_configuration() {
        let mut rig = ShellRig::new(small_rig_options(8, 4));
        let mut renderer = RecordingRenderer::new(8);
        rig.init(&Pose::IDENTITY, &mut renderer).unwrap();

        let err = rig
            .reconfigure(
                small_rig_options(4, 9),
                &Pose::IDENTITY,
                &mut renderer,
            )
            .unwrap_err();

        assert!(matches!(err, ShellRigError::Config(_)));
        assert!(rig.is_active());
        assert_eq!(rig.poses().len(), 8);
        assert_eq!(rig.options().animation.shell_count, 8);
    }
}
