//! Pan, orbit and zoom math producing new target poses.
//!
//! Everything here is pure: the rig decides which pose to feed in and what
//! to do with the result.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3};

use super::pose::{Pose, WORLD_UP};

/// World units moved per pixel of drag at `pan_speed == 1`.
pub const PAN_PIXEL_SCALE: f32 = 0.01;
/// Degrees turned per pixel of drag at `rotation_speed == 1`.
pub const ROTATION_PIXEL_SCALE: f32 = 0.01;
/// Closest the orbit direction may come to world up/down, in degrees.
const POLE_GUARD_DEGREES: f32 = 1.0;

/// Point the camera orbits around, and at what distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPivot {
    /// World-space centre of rotation.
    pub point: Vec3,
    /// Camera distance from `point` after the step.
    pub radius: f32,
}

impl OrbitPivot {
    /// Temporary pivot `lookahead` units in front of `pose`.
    ///
    /// Recomputed every tick from the current forward vector, so the
    /// camera never settles on a persistent orbit target.
    #[must_use]
    pub fn ahead_of(pose: &Pose, lookahead: f32) -> Self {
        Self {
            point: pose.position + pose.forward() * lookahead,
            radius: lookahead,
        }
    }

    /// Fixed pivot, keeping whatever distance the camera currently has.
    #[must_use]
    pub fn fixed(pose: &Pose, point: Vec3) -> Self {
        Self {
            point,
            radius: pose.position.distance(point),
        }
    }
}

/// Ground-plane translation for a pan drag of `delta` pixels.
///
/// The drag is read in camera-local right/backward axes, so the scene
/// follows the pointer. The vertical component is dropped.
#[must_use]
pub fn pan_offset(pose: &Pose, delta: Vec2, pan_speed: f32) -> Vec3 {
    let local = pose.right() * -delta.x + pose.forward() * -delta.y;
    let flat = Vec3::new(local.x, 0.0, local.z);
    flat * pan_speed * PAN_PIXEL_SCALE
}

/// Rotate `pose` around `pivot` by a drag of `delta` pixels.
///
/// Horizontal drag turns about world up; vertical drag turns about the
/// horizontal axis perpendicular to the pivot-to-camera direction, clamped
/// so the camera never crosses directly above or below the pivot. The
/// returned pose sits at `pivot.radius` and looks at the pivot. Returns
/// `None` when the camera coincides with the pivot.
#[must_use]
pub fn orbit(
    pose: &Pose,
    pivot: OrbitPivot,
    delta: Vec2,
    rotation_speed: f32,
) -> Option<Pose> {
    let to_camera = (pose.position - pivot.point).normalize_or_zero();
    if to_camera == Vec3::ZERO || pivot.radius <= f32::EPSILON {
        return None;
    }

    let yaw = (delta.x * rotation_speed * ROTATION_PIXEL_SCALE).to_radians();
    let pitch = (delta.y * rotation_speed * ROTATION_PIXEL_SCALE).to_radians();

    let mut direction = Quat::from_axis_angle(WORLD_UP, yaw) * to_camera;

    // Turning about `up x direction` by `pitch` lowers the elevation by
    // exactly `pitch`, so the pole guard can clamp the angle up front. A
    // camera already past the guard is never pushed further in, and is
    // left where it is when the drag has no vertical part.
    let right = WORLD_UP.cross(direction).normalize_or_zero();
    if pitch != 0.0 && right != Vec3::ZERO {
        let limit = FRAC_PI_2 - POLE_GUARD_DEGREES.to_radians();
        let elevation = direction.dot(WORLD_UP).clamp(-1.0, 1.0).asin();
        let clamped = (elevation - pitch)
            .clamp((-limit).min(elevation), limit.max(elevation));
        direction =
            Quat::from_axis_angle(right, elevation - clamped) * direction;
    }

    let position = pivot.point + direction.normalize() * pivot.radius;
    Some(Pose::looking_at(position, pivot.point))
}

/// Position reached by zooming `scroll` units along the view direction.
#[must_use]
pub fn zoom_target(pose: &Pose, scroll: f32, zoom_speed: f32) -> Vec3 {
    pose.position + pose.forward() * (scroll * zoom_speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn looking_down_negative_z() -> Pose {
        Pose::new(Vec3::new(8.5, 4.0, 0.0), Quat::IDENTITY)
    }

    #[test]
    fn pan_moves_against_the_drag_on_the_ground_plane() {
        let pose = looking_down_negative_z();
        // Dragging left moves the camera right.
        let offset = pan_offset(&pose, Vec2::new(-100.0, 0.0), 2.0);
        assert!(offset.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), EPS));
        // Dragging up moves the camera backward.
        let offset = pan_offset(&pose, Vec2::new(0.0, 50.0), 2.0);
        assert!(offset.abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), EPS));
    }

    #[test]
    fn pan_ignores_camera_pitch() {
        let pose = Pose::looking_at(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO);
        let offset = pan_offset(&pose, Vec2::new(30.0, -70.0), 1.5);
        assert_eq!(offset.y, 0.0);
        assert!(offset.length() > 0.0);
    }

    #[test]
    fn orbit_preserves_radius_and_faces_pivot() {
        let pose = Pose::looking_at(Vec3::new(0.0, 5.0, -10.0), Vec3::ZERO);
        let pivot = OrbitPivot::fixed(&pose, Vec3::ZERO);
        let radius = pivot.radius;

        let next = orbit(&pose, pivot, Vec2::new(40.0, 15.0), 100.0)
            .unwrap_or(pose);
        assert!((next.position.length() - radius).abs() < EPS);
        let to_pivot = (Vec3::ZERO - next.position).normalize();
        assert!(next.forward().abs_diff_eq(to_pivot, EPS));
        assert!(!next.position.abs_diff_eq(pose.position, EPS));
    }

    #[test]
    fn horizontal_orbit_keeps_height() {
        let pose = Pose::looking_at(Vec3::new(0.0, 5.0, -10.0), Vec3::ZERO);
        let pivot = OrbitPivot::fixed(&pose, Vec3::ZERO);
        let next = orbit(&pose, pivot, Vec2::new(90.0, 0.0), 100.0)
            .unwrap_or(pose);
        assert!((next.position.y - 5.0).abs() < EPS);
        // 90 px * 100 * 0.01 = 90 degrees around world up.
        let before = Vec3::new(pose.position.x, 0.0, pose.position.z);
        let after = Vec3::new(next.position.x, 0.0, next.position.z);
        assert!((before.angle_between(after).to_degrees() - 90.0).abs() < 1e-2);
    }

    #[test]
    fn temporary_pivot_sits_ahead_of_the_camera() {
        let pose = looking_down_negative_z();
        let pivot = OrbitPivot::ahead_of(&pose, 10.0);
        assert!(pivot
            .point
            .abs_diff_eq(pose.position + Vec3::new(0.0, 0.0, -10.0), EPS));
        assert_eq!(pivot.radius, 10.0);

        let next = orbit(&pose, pivot, Vec2::new(10.0, 0.0), 100.0)
            .unwrap_or(pose);
        assert!((next.position.distance(pivot.point) - 10.0).abs() < EPS);
    }

    #[test]
    fn vertical_orbit_stops_short_of_the_pole() {
        let pose = Pose::looking_at(Vec3::new(0.0, 5.0, -10.0), Vec3::ZERO);
        let pivot = OrbitPivot::fixed(&pose, Vec3::ZERO);
        // 150 degrees upward would carry the camera over the top.
        let next = orbit(&pose, pivot, Vec2::new(0.0, -150.0), 100.0)
            .unwrap_or(pose);
        assert!(next.is_finite());
        let up_angle = next.position.angle_between(WORLD_UP).to_degrees();
        assert!((up_angle - POLE_GUARD_DEGREES).abs() < 0.05, "{up_angle}");
        // Still on the starting side of the pivot.
        assert!(next.position.z < 0.0);
    }

    #[test]
    fn horizontal_drag_near_the_pole_only_turns() {
        let pose = Pose::looking_at(Vec3::new(0.0, 20.0, 0.05), Vec3::ZERO);
        let pivot = OrbitPivot::fixed(&pose, Vec3::ZERO);
        let orbited = orbit(&pose, pivot, Vec2::new(5.0, 0.0), 100.0).unwrap();
        let p = orbited.position;
        assert!((p.y - 20.0).abs() < 1e-3);
        assert!((Vec2::new(p.x, p.z).length() - 0.05).abs() < 1e-3);
    }

    #[test]
    fn vertical_drag_past_the_guard_does_not_pull_the_camera_down() {
        let pose = Pose::looking_at(Vec3::new(0.0, 20.0, 0.05), Vec3::ZERO);
        let pivot = OrbitPivot::fixed(&pose, Vec3::ZERO);
        // Negative dy raises the camera; it is already past the guard.
        let orbited =
            orbit(&pose, pivot, Vec2::new(0.0, -30.0), 100.0).unwrap();
        assert!((orbited.position.y - pose.position.y).abs() < 1e-3);
    }

    #[test]
    fn positive_vertical_drag_lowers_the_camera() {
        let pose = Pose::looking_at(Vec3::new(0.0, 5.0, -10.0), Vec3::ZERO);
        let pivot = OrbitPivot::fixed(&pose, Vec3::ZERO);
        let next = orbit(&pose, pivot, Vec2::new(0.0, 10.0), 100.0)
            .unwrap_or(pose);
        assert!(next.position.y < pose.position.y);
    }

    #[test]
    fn orbit_at_the_pivot_is_skipped() {
        let pose = Pose::default();
        let pivot = OrbitPivot::fixed(&pose, Vec3::ZERO);
        assert!(orbit(&pose, pivot, Vec2::new(5.0, 5.0), 100.0).is_none());
    }

    #[test]
    fn zoom_moves_along_forward() {
        let pose = Pose::looking_at(Vec3::new(0.0, 5.0, -10.0), Vec3::ZERO);
        let next = zoom_target(&pose, 1.0, 5.0);
        assert!((next.distance(pose.position) - 5.0).abs() < EPS);
        assert!((next.length() - (125f32.sqrt() - 5.0)).abs() < EPS);
    }
}
