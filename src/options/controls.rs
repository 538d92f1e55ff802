use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Pointer sensitivity and gesture thresholds.
pub struct ControlOptions {
    /// Pan sensitivity (world units per 100 px of drag).
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub pan_speed: f32,
    /// Orbit sensitivity (degrees per 100 px of drag).
    #[schemars(title = "Rotation Speed", range(min = 10.0, max = 400.0), extend("step" = 5.0))]
    pub rotation_speed: f32,
    /// World units moved per scroll unit.
    #[schemars(title = "Zoom Speed", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub zoom_speed: f32,
    /// Per-tick drag movement (px) below which the tick is ignored.
    #[schemars(skip)]
    pub jitter_epsilon: f32,
    /// Scroll magnitude at or below which zoom is ignored.
    #[schemars(skip)]
    pub scroll_threshold: f32,
    /// Distance ahead of the camera used as the free-exploration pivot.
    #[schemars(title = "Orbit Lookahead", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub lookahead_distance: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            pan_speed: 2.0,
            rotation_speed: 100.0,
            zoom_speed: 5.0,
            jitter_epsilon: 0.1,
            scroll_threshold: 0.01,
            lookahead_distance: 10.0,
        }
    }
}
