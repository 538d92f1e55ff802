use glam::{Mat3, Mat4, Quat, Vec3};

/// World up axis. The ground plane is XZ.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Camera position and orientation in world space.
///
/// The orientation maps camera-local axes to world axes using the
/// right-handed convention: local `-Z` is forward, `+X` is right and `+Y`
/// is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Unit rotation from camera-local to world space.
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    /// Create a pose from an explicit position and orientation.
    #[must_use]
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation: orientation.normalize(),
        }
    }

    /// Pose at `position` looking toward `target` with world up.
    #[must_use]
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            orientation: look_rotation(target - position, WORLD_UP),
        }
    }

    /// Camera forward direction in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Camera right direction in world space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Camera up direction in world space.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Euclidean distance between the two positions.
    #[must_use]
    pub fn distance_to(&self, other: &Pose) -> f32 {
        self.position.distance(other.position)
    }

    /// Angle between the two orientations, in degrees.
    #[must_use]
    pub fn angle_to(&self, other: &Pose) -> f32 {
        angle_between_degrees(self.orientation, other.orientation)
    }

    /// Whether both position and orientation are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.orientation.is_finite()
    }

    /// World-to-camera view matrix for hosts that render the pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up())
    }
}

/// Rotation whose forward (`-Z`) axis points along `forward`.
///
/// Falls back to an arbitrary perpendicular right axis when `forward` is
/// parallel to `up`, and to identity for a zero direction.
#[must_use]
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let f = forward.normalize_or_zero();
    if f == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let mut right = f.cross(up);
    if right.length_squared() < 1e-12 {
        right = f.any_orthonormal_vector();
    }
    let right = right.normalize();
    let up = right.cross(f);
    Quat::from_mat3(&Mat3::from_cols(right, up, -f))
}

/// Angle between two unit quaternions, in degrees.
///
/// Uses `atan2` on the relative rotation instead of `acos` of the dot
/// product so sub-millidegree differences stay measurable in `f32`.
#[must_use]
pub fn angle_between_degrees(a: Quat, b: Quat) -> f32 {
    let relative = a.conjugate() * b;
    let sin_half = relative.xyz().length();
    let cos_half = relative.w.abs();
    (2.0 * sin_half.atan2(cos_half)).to_degrees()
}
