//! Camera pose: the tuple fully describing camera placement

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A complete camera placement: where the camera sits, how it is rotated,
/// what it looks at, and its zoom factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// World-space camera position
    pub position: Vec3,
    /// Euler rotation in radians (yaw, pitch, roll as x, y, z)
    pub orientation: Vec3,
    /// World-space point the camera looks at
    pub look_at: Vec3,
    /// Zoom factor applied to the projection (1.0 = none)
    pub zoom: f32,
}

impl Pose {
    /// A pose at the given position looking at a target, unrotated, zoom 1.
    pub fn looking_at(position: Vec3, look_at: Vec3) -> Self {
        Self {
            position,
            orientation: Vec3::ZERO,
            look_at,
            zoom: 1.0,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            orientation: Vec3::ZERO,
            look_at: Vec3::ZERO,
            zoom: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looking_at_defaults() {
        let pose = Pose::looking_at(Vec3::new(6.0, 8.0, 14.0), Vec3::ZERO);
        assert_eq!(pose.orientation, Vec3::ZERO);
        assert_eq!(pose.zoom, 1.0);
        assert_eq!(pose.look_at, Vec3::ZERO);
    }
}
