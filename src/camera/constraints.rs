//! Spatial limits applied to the target pose.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle on the ground plane bounding pan moves.
///
/// Height is left untouched by the clamp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pan Envelope", inline)]
#[serde(default)]
pub struct PanEnvelope {
    /// Left boundary.
    #[schemars(title = "Min X")]
    pub min_x: f32,
    /// Right boundary.
    #[schemars(title = "Max X")]
    pub max_x: f32,
    /// Back boundary.
    #[schemars(title = "Min Z")]
    pub min_z: f32,
    /// Front boundary.
    #[schemars(title = "Max Z")]
    pub max_z: f32,
}

impl Default for PanEnvelope {
    fn default() -> Self {
        Self {
            min_x: -9.0,
            max_x: 9.0,
            min_z: -20.25,
            max_z: 5.0,
        }
    }
}

impl PanEnvelope {
    /// Clamp X and Z into the envelope independently.
    #[must_use]
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.clamp(self.min_x, self.max_x),
            position.y,
            position.z.clamp(self.min_z, self.max_z),
        )
    }

    /// Whether X and Z lie inside the envelope (inclusive).
    #[must_use]
    pub fn contains(&self, position: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&position.x)
            && (self.min_z..=self.max_z).contains(&position.z)
    }

    /// Centre of the rectangle at ground level.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.min_x + self.max_x) * 0.5,
            0.0,
            (self.min_z + self.max_z) * 0.5,
        )
    }

    /// Width along X and depth along Z.
    #[must_use]
    pub fn extent(&self) -> (f32, f32) {
        (self.max_x - self.min_x, self.max_z - self.min_z)
    }

    /// Ground-level corners, counter-clockwise from (min_x, min_z).
    #[must_use]
    pub fn corners(&self) -> [Vec3; 4] {
        [
            Vec3::new(self.min_x, 0.0, self.min_z),
            Vec3::new(self.max_x, 0.0, self.min_z),
            Vec3::new(self.max_x, 0.0, self.max_z),
            Vec3::new(self.min_x, 0.0, self.max_z),
        ]
    }
}

/// Distance bounds from the fixed pivot, enforced during zoom.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit Radius", inline)]
#[serde(default)]
pub struct OrbitConstraints {
    /// Closest allowed distance to the pivot.
    #[schemars(title = "Min Radius", range(min = 0.0, max = 100.0))]
    pub min_radius: f32,
    /// Farthest allowed distance from the pivot.
    #[schemars(title = "Max Radius", range(min = 0.0, max = 500.0))]
    pub max_radius: f32,
}

impl Default for OrbitConstraints {
    fn default() -> Self {
        Self {
            min_radius: 6.0,
            max_radius: 20.0,
        }
    }
}

impl OrbitConstraints {
    /// Whether `distance` lies inside the bounds (inclusive).
    #[must_use]
    pub fn admits(&self, distance: f32) -> bool {
        (self.min_radius..=self.max_radius).contains(&distance)
    }
}

/// Floor and ceiling for zooms made without a pivot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Altitude Guard", inline)]
#[serde(default)]
pub struct AltitudeGuard {
    /// Lowest allowed camera height.
    #[schemars(title = "Floor")]
    pub floor: f32,
    /// Highest allowed camera height.
    #[schemars(title = "Ceiling")]
    pub ceiling: f32,
}

impl Default for AltitudeGuard {
    fn default() -> Self {
        Self {
            floor: 2.0,
            ceiling: 50.0,
        }
    }
}

impl AltitudeGuard {
    /// Clamp only the Y coordinate.
    #[must_use]
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x,
            position.y.clamp(self.floor, self.ceiling),
            position.z,
        )
    }
}

/// Result of checking a prospective zoom step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomAdmission {
    /// Move to `position`; `distance_to_pivot` is set when a pivot exists.
    Accept {
        /// Final camera position.
        position: Vec3,
        /// Distance from `position` to the pivot, if any.
        distance_to_pivot: Option<f32>,
    },
    /// Leave the camera where it is.
    Reject {
        /// Distance the rejected step would have produced.
        attempted: f32,
        /// Unchanged distance from the current position to the pivot.
        current: f32,
    },
}

/// Decide whether the camera may move from `current` to `proposed`.
///
/// With a pivot, the whole step is rejected when it would leave the radius
/// bounds. Without one, the step is always taken with its height clamped.
#[must_use]
pub fn admit_zoom(
    current: Vec3,
    proposed: Vec3,
    pivot: Option<Vec3>,
    radius: &OrbitConstraints,
    altitude: &AltitudeGuard,
) -> ZoomAdmission {
    match pivot {
        Some(pivot) => {
            let attempted = proposed.distance(pivot);
            if radius.admits(attempted) {
                ZoomAdmission::Accept {
                    position: proposed,
                    distance_to_pivot: Some(attempted),
                }
            } else {
                ZoomAdmission::Reject {
                    attempted,
                    current: current.distance(pivot),
                }
            }
        }
        None => ZoomAdmission::Accept {
            position: altitude.clamp(proposed),
            distance_to_pivot: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_clamp_leaves_height_alone() {
        let envelope = PanEnvelope::default();
        let clamped = envelope.clamp(Vec3::new(12.0, 33.0, -40.0));
        assert_eq!(clamped, Vec3::new(9.0, 33.0, -20.25));
        assert!(envelope.contains(clamped));
    }

    #[test]
    fn envelope_geometry() {
        let envelope = PanEnvelope::default();
        assert_eq!(envelope.center(), Vec3::new(0.0, 0.0, -7.625));
        assert_eq!(envelope.extent(), (18.0, 25.25));
        assert_eq!(envelope.corners()[2], Vec3::new(9.0, 0.0, 5.0));
    }

    #[test]
    fn zoom_with_pivot_is_all_or_nothing() {
        let radius = OrbitConstraints::default();
        let altitude = AltitudeGuard::default();
        let current = Vec3::new(0.0, 0.0, 10.0);

        let pivot = Some(Vec3::ZERO);

        let inside = admit_zoom(
            current,
            Vec3::new(0.0, 0.0, 7.0),
            pivot,
            &radius,
            &altitude,
        );
        assert_eq!(
            inside,
            ZoomAdmission::Accept {
                position: Vec3::new(0.0, 0.0, 7.0),
                distance_to_pivot: Some(7.0),
            }
        );

        let too_close = admit_zoom(
            current,
            Vec3::new(0.0, 0.0, 5.0),
            pivot,
            &radius,
            &altitude,
        );
        assert_eq!(
            too_close,
            ZoomAdmission::Reject {
                attempted: 5.0,
                current: 10.0,
            }
        );
    }

    #[test]
    fn zoom_without_pivot_clamps_height() {
        let admission = admit_zoom(
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(1.0, -4.0, 2.0),
            None,
            &OrbitConstraints::default(),
            &AltitudeGuard::default(),
        );
        assert_eq!(
            admission,
            ZoomAdmission::Accept {
                position: Vec3::new(1.0, 2.0, 2.0),
                distance_to_pivot: None,
            }
        );
    }

    #[test]
    fn radius_bounds_are_inclusive() {
        let radius = OrbitConstraints::default();
        assert!(radius.admits(6.0));
        assert!(radius.admits(20.0));
        assert!(!radius.admits(5.999));
        assert!(!radius.admits(20.001));
    }
}
