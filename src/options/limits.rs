use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::constraints::{AltitudeGuard, OrbitConstraints, PanEnvelope};

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Limits", inline)]
#[serde(default)]
/// Spatial bounds for panning and zooming.
pub struct LimitOptions {
    /// Ground-plane rectangle the target position is clamped to on pan.
    pub pan: PanEnvelope,
    /// Allowed distance range from the fixed pivot during zoom.
    pub radius: OrbitConstraints,
    /// Height range enforced on zoom when no pivot is configured.
    pub altitude: AltitudeGuard,
}
