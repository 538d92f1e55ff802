//! The rig's externally triggered operations.
//!
//! Host controls (a "back" button, a mode toggle, scene loading) build a
//! `RigCommand` and hand it to
//! [`CameraRig::execute`](crate::camera::CameraRig::execute). Pointer
//! gestures do not go through here; they arrive per tick as
//! [`FrameInput`](crate::input::FrameInput).

use glam::Vec3;

use crate::camera::CameraMode;

/// A discrete operation the rig can perform outside the tick loop.
///
/// ```
/// use camrig::camera::{CameraMode, CameraRig};
/// use camrig::command::RigCommand;
/// use camrig::options::RigOptions;
///
/// let mut rig = CameraRig::new(&RigOptions::default())?;
/// rig.execute(RigCommand::SetMode {
///     mode: CameraMode::Constrained,
/// });
/// rig.execute(RigCommand::ResetToDefault);
/// assert_eq!(rig.mode(), CameraMode::Constrained);
/// # Ok::<(), camrig::error::RigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RigCommand {
    /// Snap target and rendered pose to the default pose and end any drag.
    ResetToDefault,
    /// Switch interaction mode without moving the camera.
    SetMode {
        /// Mode to switch to.
        mode: CameraMode,
    },
    /// Replace (or clear) the fixed orbit pivot.
    SetPivot {
        /// New pivot, `None` to remove it.
        pivot: Option<Vec3>,
    },
    /// Detach the rig; later ticks and commands are ignored.
    Shutdown,
}
