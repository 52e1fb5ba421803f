//! Fire vector extraction from the camera's world transform.

use arpakai_core::types::{AimVector, CameraPose};

/// Forward direction and origin of a camera pose.
///
/// The third basis vector of the transform points backward out of the
/// screen; negating it gives the direction the camera looks along.
pub fn aim_from_pose(pose: &CameraPose) -> AimVector {
    let m = pose.matrix;
    AimVector {
        direction: -m.z_axis.truncate(),
        position: m.w_axis.truncate(),
    }
}

/// Aim for an optional pose, degrading to `AimVector::FALLBACK`.
pub fn aim_or_fallback(pose: Option<&CameraPose>) -> AimVector {
    pose.map(aim_from_pose).unwrap_or(AimVector::FALLBACK)
}
