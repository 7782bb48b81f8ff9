//! Point-of-interest configuration

use galleria_core::Pose;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A named, spatially anchored selectable feature of the scene. Immutable
/// configuration supplied by the tour manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Unique id the navigation controller keys on
    pub id: String,
    /// Short overlay label
    pub label: String,
    /// Body text for the detail overlay
    pub detail_text: String,
    /// Anchor position, local to the loaded model
    pub anchor_position: Vec3,
    /// Camera pose the view flies to when this POI is activated
    pub target_pose: Pose,
}

impl PointOfInterest {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        anchor_position: Vec3,
        target_pose: Pose,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            detail_text: String::new(),
            anchor_position,
            target_pose,
        }
    }

    pub fn with_detail(mut self, detail_text: impl Into<String>) -> Self {
        self.detail_text = detail_text.into();
        self
    }
}
