//! Orientation of objects placed along curves.

use bevy::prelude::*;

/// Rotation that points local -Z along `tangent`, keeping +Y as close to
/// world up as the tangent allows.
///
/// A vertical tangent (a wire dropping straight down a pole) has no heading,
/// so +Z stands in for up there. A zero tangent gives the identity.
pub fn rotation_along(tangent: Vec3) -> Quat {
    let Some(forward) = tangent.try_normalize() else {
        return Quat::IDENTITY;
    };
    let up = if forward.cross(Vec3::Y).length_squared() < 1e-6 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    Transform::IDENTITY.looking_to(forward, up).rotation
}

/// Remove the pitch from a rotation, keeping yaw and roll.
///
/// Yaw turns about +Y, pitch about the local X axis and roll about the local
/// Z axis (`EulerRot::YXZ`).
pub fn level_rotation(rotation: Quat) -> Quat {
    let (yaw, _pitch, roll) = rotation.to_euler(EulerRot::YXZ);
    Quat::from_euler(EulerRot::YXZ, yaw, 0.0, roll)
}
