use glam::{Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::pose::Pose;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Reset pose and optional fixed orbit pivot.
pub struct PoseOptions {
    /// Default camera position.
    pub position: [f32; 3],
    /// Point the default pose looks at.
    pub look_at: [f32; 3],
    /// Explicit default orientation as an `[x, y, z, w]` quaternion.
    /// Takes precedence over `look_at` when set, so rolled poses can be
    /// expressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<[f32; 4]>,
    /// Fixed orbit pivot used by constrained mode and zoom limits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot: Option<[f32; 3]>,
}

impl Default for PoseOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 10.0, 10.0],
            look_at: [0.0, 0.0, 0.0],
            orientation: None,
            pivot: None,
        }
    }
}

impl PoseOptions {
    /// The default pose described by these options.
    #[must_use]
    pub fn default_pose(&self) -> Pose {
        let position = Vec3::from_array(self.position);
        match self.orientation {
            Some(q) => Pose::new(position, Quat::from_array(q)),
            None => Pose::looking_at(position, Vec3::from_array(self.look_at)),
        }
    }

    /// The configured fixed pivot, if any.
    #[must_use]
    pub fn pivot(&self) -> Option<Vec3> {
        self.pivot.map(Vec3::from_array)
    }
}
