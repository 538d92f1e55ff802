//! Eases the rendered pose toward the target pose each tick.

use super::pose::Pose;
use crate::options::SmoothingOptions;

/// Fraction of the remaining gap to close this tick.
///
/// Frame-rate independent and strictly inside `(0, 1)` for positive
/// `rate * dt`, so easing never overshoots.
#[inline]
#[must_use]
pub fn ease_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

/// Exponential position/orientation smoother with idle cut-off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolator {
    position_rate: f32,
    rotation_rate: f32,
    position_epsilon: f32,
    angle_epsilon: f32,
}

impl Interpolator {
    /// Build from smoothing options.
    #[must_use]
    pub fn new(options: &SmoothingOptions) -> Self {
        Self {
            position_rate: options.position_rate,
            rotation_rate: options.rotation_rate,
            position_epsilon: options.position_epsilon,
            angle_epsilon: options.angle_epsilon,
        }
    }

    /// Whether `rendered` is close enough to `target` to stop easing.
    #[must_use]
    pub fn is_settled(&self, rendered: &Pose, target: &Pose) -> bool {
        rendered.distance_to(target) <= self.position_epsilon
            && rendered.angle_to(target) <= self.angle_epsilon
    }

    /// Advance `rendered` toward `target` by `dt` seconds.
    ///
    /// Returns `true` when the pose moved. Below both epsilons, or for a
    /// non-positive `dt`, the pose is left untouched.
    pub fn step(&self, rendered: &mut Pose, target: &Pose, dt: f32) -> bool {
        if dt <= 0.0 || self.is_settled(rendered, target) {
            return false;
        }

        let move_t = ease_factor(self.position_rate, dt);
        let turn_t = ease_factor(self.rotation_rate, dt);

        rendered.position = rendered.position.lerp(target.position, move_t);
        rendered.orientation = rendered
            .orientation
            .slerp(target.orientation, turn_t)
            .normalize();
        true
    }
}
