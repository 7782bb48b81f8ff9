//! Tour and camera configuration

use galleria_core::Pose;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Configuration for the tour opening and camera behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourConfig {
    /// Wide establishing pose the camera is placed at on scene readiness
    pub establishing_pose: Pose,
    /// Seconds to hold the establishing shot before the automatic fly-to
    /// the first POI
    pub settle_delay: f32,
    /// Duration of every camera transition, in seconds
    pub transition_duration: f32,
    /// Vertical field of view in degrees (before zoom)
    pub fov_degrees: f32,
    /// Near clip plane
    pub z_near: f32,
    /// Far clip plane
    pub z_far: f32,
    /// Damping factor for the continuous pointer-parallax drift (0-1,
    /// lower = smoother)
    pub parallax_damping: f32,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            establishing_pose: Pose::looking_at(Vec3::new(6.0, 8.0, 14.0), Vec3::ZERO),
            settle_delay: 1.5,
            transition_duration: 3.0,
            fov_degrees: 45.0,
            z_near: 0.1,
            z_far: 1000.0,
            parallax_damping: 0.05,
        }
    }
}
