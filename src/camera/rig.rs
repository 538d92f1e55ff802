use glam::{Vec2, Vec3};

use super::constraints::{admit_zoom, ZoomAdmission};
use super::gizmo::{self, GizmoLine};
use super::interpolator::Interpolator;
use super::mode::{CameraMode, InteractionState};
use super::pose::Pose;
use super::solver::{self, OrbitPivot};
use crate::command::RigCommand;
use crate::error::RigError;
use crate::input::{FrameInput, InputResolver};
use crate::options::{ControlOptions, LimitOptions, RigOptions};

/// What a zoom request did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ZoomOutcome {
    /// Scroll was at or below the threshold.
    #[default]
    Ignored,
    /// The camera moved.
    Applied {
        /// Distance to the fixed pivot after the move, if one exists.
        distance_to_pivot: Option<f32>,
    },
    /// The move would have left the radius bounds; nothing changed.
    Blocked {
        /// Distance the rejected move would have produced.
        attempted: f32,
        /// Unchanged distance to the pivot.
        distance_to_pivot: f32,
    },
}

/// Summary of one [`CameraRig::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    /// Interaction resolved this tick.
    pub state: InteractionState,
    /// Result of this tick's scroll.
    pub zoom: ZoomOutcome,
    /// Whether the rendered pose was eased toward the target.
    pub eased: bool,
}

/// Pointer-driven camera with a smoothed rendered pose.
///
/// Input is resolved into pan/orbit/zoom moves on the *target* pose; the
/// *rendered* pose (what the host displays) eases toward it every tick.
/// Everything runs on the host's frame thread; nothing blocks.
///
/// # Usage
///
/// ```
/// use camrig::camera::CameraRig;
/// use camrig::input::FrameInput;
/// use camrig::options::RigOptions;
///
/// let mut rig = CameraRig::new(&RigOptions::default())?;
/// let frame = FrameInput::at(glam::Vec2::ZERO, 1.0 / 60.0).with_scroll(0.5);
/// let report = rig.tick(&frame);
/// let view = rig.rendered().view_matrix();
/// # let _ = (report, view);
/// # Ok::<(), camrig::error::RigError>(())
/// ```
#[derive(Debug)]
pub struct CameraRig {
    mode: CameraMode,
    default_pose: Pose,
    pivot: Option<Vec3>,

    /// Authoritative pose written by input.
    target: Pose,
    /// Displayed pose, eased toward `target`.
    rendered: Pose,

    resolver: InputResolver,
    interpolator: Interpolator,
    controls: ControlOptions,
    limits: LimitOptions,

    last_diagnostic: Option<RigError>,
    attached: bool,
}

impl CameraRig {
    /// Validate `options` and create a rig sitting at the default pose.
    pub fn new(options: &RigOptions) -> Result<Self, RigError> {
        options.validate()?;

        let default_pose = options.pose.default_pose();
        let pan = &options.limits.pan;
        log::info!(
            "Pan limits set: X({} to {}), Z({} to {})",
            pan.min_x,
            pan.max_x,
            pan.min_z,
            pan.max_z
        );

        let mut rig = Self {
            mode: options.mode,
            default_pose,
            pivot: options.pose.pivot(),
            target: default_pose,
            rendered: default_pose,
            resolver: InputResolver::new(options.controls.jitter_epsilon),
            interpolator: Interpolator::new(&options.smoothing),
            controls: options.controls.clone(),
            limits: options.limits.clone(),
            last_diagnostic: None,
            attached: true,
        };
        rig.check_mode_reference();
        log::info!("Camera rig initialized in {:?} mode", rig.mode);
        Ok(rig)
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Current interaction mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Interaction resolved on the most recent tick.
    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.resolver.state()
    }

    /// Pose input is steering toward.
    #[must_use]
    pub fn target(&self) -> &Pose {
        &self.target
    }

    /// Pose the host should display.
    #[must_use]
    pub fn rendered(&self) -> &Pose {
        &self.rendered
    }

    /// Pose restored by [`reset_to_default`](Self::reset_to_default).
    #[must_use]
    pub fn default_pose(&self) -> &Pose {
        &self.default_pose
    }

    /// Fixed orbit pivot, if configured.
    #[must_use]
    pub fn pivot(&self) -> Option<Vec3> {
        self.pivot
    }

    /// Most recent non-fatal diagnostic.
    #[must_use]
    pub fn last_diagnostic(&self) -> Option<&RigError> {
        self.last_diagnostic.as_ref()
    }

    /// Whether the rig still responds to ticks and commands.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Debug outline of the active pan envelope, for hosts that draw
    /// gizmos.
    #[must_use]
    pub fn envelope_outline(&self, post_height: f32) -> Vec<GizmoLine> {
        gizmo::envelope_outline(&self.limits.pan, post_height)
    }

    // ── Commands ───────────────────────────────────────────────────────

    /// Execute a discrete command. Ignored once the rig is shut down.
    pub fn execute(&mut self, command: RigCommand) {
        if !self.attached {
            log::debug!("Ignoring {command:?}: camera rig is detached");
            return;
        }
        match command {
            RigCommand::ResetToDefault => self.reset_to_default(),
            RigCommand::SetMode { mode } => self.set_mode(mode),
            RigCommand::SetPivot { pivot } => self.set_pivot(pivot),
            RigCommand::Shutdown => self.shutdown(),
        }
    }

    /// Snap both poses to the default pose and end any drag.
    ///
    /// No interpolation frames are involved; calling it twice is the same
    /// as calling it once.
    pub fn reset_to_default(&mut self) {
        if self.is_detached("reset") {
            return;
        }
        self.resolver.force_idle();
        self.target = self.default_pose;
        self.rendered = self.default_pose;
        log::info!("Camera reset to default position");
    }

    /// Switch mode. The camera does not move; only later input behaves
    /// differently.
    ///
    /// Selecting [`CameraMode::Constrained`] without a pivot is reported as
    /// a diagnostic and leaves constrained orbiting inert.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if self.is_detached("mode switch") {
            return;
        }
        self.mode = mode;
        match mode {
            CameraMode::FreeExploration => log::info!(
                "Switched to free exploration mode (temporary orbit + panning)"
            ),
            CameraMode::Constrained => log::info!(
                "Switched to constrained mode (fixed orbit, no panning)"
            ),
        }
        self.check_mode_reference();
    }

    /// Replace or clear the fixed orbit pivot.
    pub fn set_pivot(&mut self, pivot: Option<Vec3>) {
        if self.is_detached("pivot change") {
            return;
        }
        if pivot.is_some_and(|p| !p.is_finite()) {
            self.report(RigError::InvalidConfiguration(
                "orbit pivot must be finite".into(),
            ));
            return;
        }
        self.pivot = pivot;
        log::debug!("Orbit pivot set to {pivot:?}");
        self.check_mode_reference();
    }

    /// Detach from the host: end any drag and ignore further input,
    /// including direct calls to the movement and command methods.
    pub fn shutdown(&mut self) {
        self.resolver.force_idle();
        self.attached = false;
        log::info!("Camera rig detached");
    }

    // ── Per-tick ───────────────────────────────────────────────────────

    /// Advance one frame: resolve input, move the target pose, apply zoom,
    /// then ease the rendered pose.
    pub fn tick(&mut self, input: &FrameInput) -> TickReport {
        if !self.attached {
            log::trace!("Tick ignored: camera rig is detached");
            return TickReport::default();
        }

        let resolution = self.resolver.resolve(input);
        if resolution.state.is_dragging() && resolution.delta != Vec2::ZERO {
            match resolution.state {
                InteractionState::Panning => self.pan(resolution.delta),
                InteractionState::Orbiting => self.orbit(resolution.delta),
                InteractionState::Idle => {}
            }
        }

        let zoom = self.zoom(input.scroll);
        let eased =
            self.interpolator
                .step(&mut self.rendered, &self.target, input.dt);

        TickReport {
            state: resolution.state,
            zoom,
            eased,
        }
    }

    /// Translate the target pose on the ground plane by a drag of `delta`
    /// pixels, clamped to the pan envelope. Free-exploration mode only.
    pub fn pan(&mut self, delta: Vec2) {
        if self.is_detached("pan") {
            return;
        }
        if !self.mode.allows_pan() {
            log::trace!("Panning disabled in constrained mode");
            return;
        }
        let offset =
            solver::pan_offset(&self.target, delta, self.controls.pan_speed);
        self.target.position =
            self.limits.pan.clamp(self.target.position + offset);
    }

    /// Orbit the target pose by a drag of `delta` pixels.
    ///
    /// Free exploration orbits a temporary point ahead of the camera;
    /// constrained mode orbits the fixed pivot at the current distance.
    pub fn orbit(&mut self, delta: Vec2) {
        if self.is_detached("orbit") {
            return;
        }
        let pivot = match self.mode {
            CameraMode::FreeExploration => OrbitPivot::ahead_of(
                &self.target,
                self.controls.lookahead_distance,
            ),
            CameraMode::Constrained => match self.pivot {
                Some(point) => OrbitPivot::fixed(&self.target, point),
                None => {
                    self.report(RigError::MissingReference(
                        "constrained orbit needs a fixed pivot",
                    ));
                    return;
                }
            },
        };

        match solver::orbit(
            &self.target,
            pivot,
            delta,
            self.controls.rotation_speed,
        ) {
            Some(pose) => {
                log::trace!(
                    "Orbiting around {} ({:?})",
                    pivot.point,
                    self.mode
                );
                self.target = pose;
            }
            None => log::debug!("Orbit skipped: camera sits on the pivot"),
        }
    }

    /// Move the rendered pose along its view direction by `scroll` units.
    ///
    /// Zoom bypasses easing: an accepted move is applied to the rendered
    /// pose and the target is synced to it, which also settles any easing
    /// still in flight.
    pub fn zoom(&mut self, scroll: f32) -> ZoomOutcome {
        if self.is_detached("zoom") {
            return ZoomOutcome::Ignored;
        }
        if scroll.abs() <= self.controls.scroll_threshold {
            return ZoomOutcome::Ignored;
        }

        let proposed = solver::zoom_target(
            &self.rendered,
            scroll,
            self.controls.zoom_speed,
        );
        match admit_zoom(
            self.rendered.position,
            proposed,
            self.pivot,
            &self.limits.radius,
            &self.limits.altitude,
        ) {
            ZoomAdmission::Accept {
                position,
                distance_to_pivot,
            } => {
                self.rendered.position = position;
                self.target = self.rendered;
                match distance_to_pivot {
                    Some(d) => log::debug!("Zoom applied: distance {d:.2}"),
                    None => log::debug!("Free zoom applied"),
                }
                ZoomOutcome::Applied { distance_to_pivot }
            }
            ZoomAdmission::Reject { attempted, current } => {
                let radius = &self.limits.radius;
                log::debug!(
                    "Zoom blocked: distance {attempted:.2} outside {}-{}",
                    radius.min_radius,
                    radius.max_radius
                );
                ZoomOutcome::Blocked {
                    attempted,
                    distance_to_pivot: current,
                }
            }
        }
    }

    // ── Diagnostics ────────────────────────────────────────────────────

    fn check_mode_reference(&mut self) {
        if self.mode.requires_pivot() && self.pivot.is_none() {
            self.report(RigError::InvalidConfiguration(
                "constrained mode selected without a fixed pivot".into(),
            ));
        }
    }

    fn is_detached(&self, what: &str) -> bool {
        if !self.attached {
            log::debug!("Ignoring {what}: camera rig is detached");
        }
        !self.attached
    }

    /// Log a non-fatal problem once per distinct occurrence.
    fn report(&mut self, diagnostic: RigError) {
        if self.last_diagnostic.as_ref() != Some(&diagnostic) {
            log::warn!("{diagnostic}");
        }
        self.last_diagnostic = Some(diagnostic);
    }
}
