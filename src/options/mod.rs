//! Camera rig configuration with TOML preset support.
//!
//! Sensitivities, smoothing rates, spatial limits and the default pose are
//! consolidated here. Options serialize to/from TOML so a scene can ship
//! its own rig preset.

mod controls;
mod limits;
mod pose;
mod smoothing;

use std::path::Path;

pub use controls::ControlOptions;
pub use limits::LimitOptions;
pub use pose::PoseOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use smoothing::SmoothingOptions;

use crate::camera::CameraMode;
use crate::error::RigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[limits.pan]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct RigOptions {
    /// Interaction mode the rig starts in.
    pub mode: CameraMode,
    /// Pointer sensitivity and gesture thresholds.
    pub controls: ControlOptions,
    /// Easing rates for the rendered pose.
    pub smoothing: SmoothingOptions,
    /// Pan envelope, zoom radius and altitude bounds.
    pub limits: LimitOptions,
    /// Default pose and fixed pivot.
    #[schemars(skip)]
    pub pose: PoseOptions,
}

impl RigOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(RigOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, RigError> {
        toml::from_str(content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }

    /// Reject numeric settings the rig cannot work with.
    ///
    /// Selecting constrained mode without a pivot is *not* rejected here;
    /// the rig reports it as a runtime diagnostic instead.
    pub fn validate(&self) -> Result<(), RigError> {
        let c = &self.controls;
        let s = &self.smoothing;
        let l = &self.limits;

        let positive = [
            ("controls.pan_speed", c.pan_speed),
            ("controls.rotation_speed", c.rotation_speed),
            ("controls.zoom_speed", c.zoom_speed),
            ("controls.lookahead_distance", c.lookahead_distance),
            ("smoothing.position_rate", s.position_rate),
            ("smoothing.rotation_rate", s.rotation_rate),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be > 0, got {value}")));
            }
        }

        let non_negative = [
            ("controls.jitter_epsilon", c.jitter_epsilon),
            ("controls.scroll_threshold", c.scroll_threshold),
            ("smoothing.position_epsilon", s.position_epsilon),
            ("smoothing.angle_epsilon", s.angle_epsilon),
            ("limits.radius.min_radius", l.radius.min_radius),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(format!(
                    "{name} must be >= 0, got {value}"
                )));
            }
        }

        let ranges = [
            ("limits.pan x", l.pan.min_x, l.pan.max_x),
            ("limits.pan z", l.pan.min_z, l.pan.max_z),
            ("limits.radius", l.radius.min_radius, l.radius.max_radius),
            ("limits.altitude", l.altitude.floor, l.altitude.ceiling),
        ];
        for (name, min, max) in ranges {
            if !(min.is_finite() && max.is_finite() && min <= max) {
                return Err(invalid(format!(
                    "{name} range is inverted or not finite: [{min}, {max}]"
                )));
            }
        }

        if let Some(q) = self.pose.orientation {
            let q = glam::Quat::from_array(q);
            if !(q.is_finite() && q.length_squared() > f32::EPSILON) {
                return Err(invalid(
                    "pose.orientation must be a finite non-zero quaternion"
                        .into(),
                ));
            }
        }
        let pose = self.pose.default_pose();
        if !pose.is_finite() {
            return Err(invalid("pose.position/look_at must be finite".into()));
        }
        if self.pose.orientation.is_none()
            && self.pose.position == self.pose.look_at
        {
            return Err(invalid(
                "pose.look_at must differ from pose.position".into(),
            ));
        }
        if self
            .pose
            .pivot()
            .is_some_and(|pivot| !pivot.is_finite())
        {
            return Err(invalid("pose.pivot must be finite".into()));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> RigError {
    RigError::InvalidConfiguration(msg)
}
