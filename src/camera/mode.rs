use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which pivot-selection and panning rules the rig applies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Pan on the ground plane and orbit a temporary point ahead of the
    /// camera.
    #[default]
    FreeExploration,
    /// Orbit a fixed, configured pivot; panning is disabled.
    Constrained,
}

impl CameraMode {
    /// Whether primary-button drags translate the camera in this mode.
    #[must_use]
    pub fn allows_pan(self) -> bool {
        matches!(self, Self::FreeExploration)
    }

    /// Whether orbiting in this mode needs a configured fixed pivot.
    #[must_use]
    pub fn requires_pivot(self) -> bool {
        matches!(self, Self::Constrained)
    }
}

/// Exclusive per-tick interaction, derived from button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// No drag in progress.
    #[default]
    Idle,
    /// Primary-button drag.
    Panning,
    /// Secondary-button drag.
    Orbiting,
}

impl InteractionState {
    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pan_and_orbit_are_drags() {
        assert!(!InteractionState::Idle.is_dragging());
        assert!(InteractionState::Panning.is_dragging());
        assert!(InteractionState::Orbiting.is_dragging());
    }

    #[test]
    fn constrained_mode_pins_the_camera_to_the_pivot() {
        assert!(CameraMode::FreeExploration.allows_pan());
        assert!(!CameraMode::Constrained.allows_pan());
        assert!(CameraMode::Constrained.requires_pivot());
    }
}
