use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Smoothing", inline)]
#[serde(default)]
/// Rates and cut-offs for easing the rendered pose toward the target.
pub struct SmoothingOptions {
    /// Positional easing rate (per second, higher = snappier).
    #[schemars(title = "Move Smoothing", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub position_rate: f32,
    /// Rotational easing rate (per second, higher = snappier).
    #[schemars(title = "Rotate Smoothing", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub rotation_rate: f32,
    /// Positional gap (world units) below which easing stops.
    #[schemars(skip)]
    pub position_epsilon: f32,
    /// Angular gap (degrees) below which easing stops.
    #[schemars(skip)]
    pub angle_epsilon: f32,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            position_rate: 8.0,
            rotation_rate: 8.0,
            position_epsilon: 0.001,
            angle_epsilon: 0.01,
        }
    }
}
