//! Camera rig: pose math, constraints, smoothing and the orchestrating
//! [`CameraRig`].
//!
//! Pointer input moves a *target* pose through pan, orbit and zoom; the
//! *rendered* pose eases toward it each tick.

/// Pan envelope, orbit radius bounds and zoom admission.
pub mod constraints;
/// Debug outline of the pan envelope.
pub mod gizmo;
/// Exponential easing of the rendered pose.
pub mod interpolator;
/// Camera mode and per-tick interaction state.
pub mod mode;
/// Position + orientation value type and rotation helpers.
pub mod pose;
/// The camera rig tying input, math and smoothing together.
pub mod rig;
/// Pure pan/orbit/zoom math.
pub mod solver;

pub use mode::{CameraMode, InteractionState};
pub use pose::Pose;
pub use rig::{CameraRig, TickReport, ZoomOutcome};
