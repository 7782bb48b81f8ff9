//! Scene-root attachment
//!
//! Once loading completes, the model asset is attached to the scene root
//! and one anchor node per POI is attached as a child, positioned at its
//! anchor position relative to the model. The renderer (external) consumes
//! the resulting world transforms.

use galleria_assets::ModelAsset;
use galleria_core::{Mat4, Vec3};
use tracing::info;

/// An overlay anchor parented to the model.
#[derive(Debug, Clone)]
pub struct AnchorNode {
    pub poi_id: String,
    /// Position local to the model
    pub local_position: Vec3,
}

/// The externally-owned scene root: the attached model plus POI anchors.
#[derive(Debug, Default)]
pub struct SceneRoot {
    model_name: Option<String>,
    model_transform: Mat4,
    anchors: Vec<AnchorNode>,
}

impl SceneRoot {
    pub fn new() -> Self {
        Self {
            model_name: None,
            model_transform: Mat4::IDENTITY,
            anchors: Vec::new(),
        }
    }

    /// Attach the loaded model under the given transform.
    pub fn attach_model(&mut self, name: &str, model: &ModelAsset, transform: Mat4) {
        info!(
            "attached model '{name}': {} meshes, {} vertices",
            model.meshes.len(),
            model.vertex_count()
        );
        self.model_name = Some(name.to_string());
        self.model_transform = transform;
    }

    /// Attach a POI anchor as a child of the model.
    pub fn attach_anchor(&mut self, poi_id: impl Into<String>, local_position: Vec3) {
        self.anchors.push(AnchorNode {
            poi_id: poi_id.into(),
            local_position,
        });
    }

    /// Whether a model has been attached.
    pub fn is_populated(&self) -> bool {
        self.model_name.is_some()
    }

    /// Name of the attached model, if any.
    pub fn model_name(&self) -> Option<&str> {
        self.model_name.as_deref()
    }

    /// All attached anchors.
    pub fn anchors(&self) -> &[AnchorNode] {
        &self.anchors
    }

    /// World-space position of a POI's anchor.
    pub fn anchor_world_position(&self, poi_id: &str) -> Option<Vec3> {
        self.anchors
            .iter()
            .find(|a| a.poi_id == poi_id)
            .map(|a| self.model_transform.transform_point3(a.local_position))
    }
}
