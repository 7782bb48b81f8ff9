//! Live camera rig
//!
//! Holds the camera's current pose, derives view and projection matrices,
//! and applies the continuous pointer-parallax drift that runs every frame
//! independently of POI transitions. The projection matrix is cached and
//! recomputed only when the caller asks (on transition completion or
//! viewport resize), not per sample.

use galleria_core::Pose;
use glam::{Mat4, Vec2, Vec3};

use crate::config::TourConfig;

/// The live camera: pose plus derived matrices.
pub struct CameraRig {
    pose: Pose,
    aspect_ratio: f32,
    fov_degrees: f32,
    z_near: f32,
    z_far: f32,
    parallax_damping: f32,
    projection: Mat4,
}

impl CameraRig {
    pub fn new(config: &TourConfig, aspect_ratio: f32) -> Self {
        let mut rig = Self {
            pose: config.establishing_pose,
            aspect_ratio,
            fov_degrees: config.fov_degrees,
            z_near: config.z_near,
            z_far: config.z_far,
            parallax_damping: config.parallax_damping,
            projection: Mat4::IDENTITY,
        };
        rig.recompute_projection();
        rig
    }

    /// The camera's current pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Adopt the pose sampled from the transition engine this frame.
    pub fn apply_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Damped drift of the camera position toward a pointer-driven offset,
    /// applied on top of the transition-driven pose.
    pub fn apply_parallax(&mut self, pointer_offset: Vec2) {
        self.pose.position.x += (pointer_offset.x - self.pose.position.x) * self.parallax_damping;
        self.pose.position.y += (-pointer_offset.y - self.pose.position.y) * self.parallax_damping;
    }

    /// View matrix looking from the pose position at its look-at target.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.pose.position, self.pose.look_at, Vec3::Y)
    }

    /// The cached projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Update the viewport aspect ratio and recompute the projection.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
        self.recompute_projection();
    }

    /// Recompute the projection from the current zoom. Called once on
    /// transition completion and on resize.
    pub fn recompute_projection(&mut self) {
        // Zoom narrows the field of view, like a lens.
        let fov = (self.fov_degrees / self.pose.zoom.max(f32::EPSILON)).to_radians();
        self.projection = Mat4::perspective_rh(fov, self.aspect_ratio, self.z_near, self.z_far);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> CameraRig {
        CameraRig::new(&TourConfig::default(), 16.0 / 9.0)
    }

    #[test]
    fn starts_at_establishing_pose() {
        let rig = rig();
        assert_eq!(rig.pose(), TourConfig::default().establishing_pose);
    }

    #[test]
    fn zoom_narrows_projection() {
        let mut rig = rig();
        let wide = rig.projection_matrix();

        let mut pose = rig.pose();
        pose.zoom = 2.0;
        rig.apply_pose(pose);
        rig.recompute_projection();

        // Larger zoom -> smaller fov -> larger focal scaling terms.
        assert!(rig.projection_matrix().col(1)[1] > wide.col(1)[1]);
    }

    #[test]
    fn projection_only_changes_when_recomputed() {
        let mut rig = rig();
        let before = rig.projection_matrix();

        let mut pose = rig.pose();
        pose.zoom = 3.0;
        rig.apply_pose(pose);
        assert_eq!(rig.projection_matrix(), before);

        rig.recompute_projection();
        assert_ne!(rig.projection_matrix(), before);
    }

    #[test]
    fn parallax_moves_toward_pointer() {
        let mut rig = rig();
        let start_x = rig.pose().position.x;
        rig.apply_parallax(Vec2::new(start_x + 10.0, 0.0));
        let moved = rig.pose().position.x;
        assert!(moved > start_x);
        assert!(moved < start_x + 10.0);
    }

    #[test]
    fn view_matrix_is_a_rigid_transform() {
        let rig = rig();
        let view = rig.view_matrix();
        assert!((view.determinant().abs() - 1.0).abs() < 1e-4);
    }
}
