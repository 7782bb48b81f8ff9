//! Tour manifest
//!
//! One TOML file declares everything a tour needs: the resource descriptor
//! table, the POI registry, and the tour/camera settings. Unknown resource
//! kind strings fail the parse before any load starts.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use galleria_assets::{ResourceDescriptor, ResourceKind};
use galleria_core::{Pose, Vec3};
use galleria_tour::{PointOfInterest, TourConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The whole tour definition, as read from `tour.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourManifest {
    pub tour: TourSection,
    #[serde(default)]
    pub resources: Vec<ResourceDescriptor>,
    #[serde(default)]
    pub pois: Vec<PointOfInterest>,
}

/// The `[tour]` table: which resource is the scene, plus camera settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourSection {
    /// Name of the Model resource attached to the scene root
    pub scene_resource: String,
    #[serde(flatten)]
    pub config: TourConfig,
}

impl TourManifest {
    /// Read and validate a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        let manifest: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse manifest {}", path.display()))?;
        manifest.validate()?;
        info!(
            "manifest {}: {} resources, {} POIs",
            path.display(),
            manifest.resources.len(),
            manifest.pois.len()
        );
        Ok(manifest)
    }

    /// Check cross-references the TOML schema cannot express.
    pub fn validate(&self) -> Result<()> {
        let scene = self
            .resources
            .iter()
            .find(|r| r.name == self.tour.scene_resource);
        match scene {
            None => bail!(
                "scene resource '{}' is not in the resource table",
                self.tour.scene_resource
            ),
            Some(r) if r.kind != ResourceKind::Model => bail!(
                "scene resource '{}' must be a model, found {}",
                r.name,
                r.kind
            ),
            Some(_) => {}
        }

        for (i, resource) in self.resources.iter().enumerate() {
            if self.resources[..i].iter().any(|r| r.name == resource.name) {
                bail!("duplicate resource name '{}'", resource.name);
            }
        }
        for (i, poi) in self.pois.iter().enumerate() {
            if self.pois[..i].iter().any(|p| p.id == poi.id) {
                bail!("duplicate POI id '{}'", poi.id);
            }
        }
        Ok(())
    }

    /// The built-in kings-hall demo tour, used when no manifest file exists.
    pub fn sample() -> Self {
        let owl_pose = Pose {
            position: Vec3::new(2.5, 2.0, 4.0),
            orientation: Vec3::ZERO,
            look_at: Vec3::new(0.4, 1.2, 0.0),
            zoom: 1.2,
        };
        let dais_pose = Pose {
            position: Vec3::new(-3.0, 2.5, 5.0),
            orientation: Vec3::ZERO,
            look_at: Vec3::new(-1.0, 0.8, -2.0),
            zoom: 1.1,
        };

        Self {
            tour: TourSection {
                scene_resource: "hall".into(),
                config: TourConfig::default(),
            },
            resources: vec![ResourceDescriptor::new(
                "hall",
                ResourceKind::Model,
                "kings_hall/scene.gltf",
            )],
            pois: vec![
                PointOfInterest::new("owl", "Bronze Owl Zun", Vec3::new(0.4, 1.2, 0.0), owl_pose)
                    .with_detail(
                        "Early Western Zhou bronze wine vessel cast in the shape of an owl, \
                         excavated at Baoji, Shaanxi.",
                    ),
                PointOfInterest::new("dais", "Ceremonial Dais", Vec3::new(-1.0, 0.8, -2.0), dais_pose)
                    .with_detail("Raised platform at the hall's western end."),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_manifest_validates() {
        TourManifest::sample().validate().unwrap();
    }

    #[test]
    fn sample_round_trips_through_toml() {
        let toml = toml::to_string_pretty(&TourManifest::sample()).unwrap();
        let parsed: TourManifest = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.tour.scene_resource, "hall");
        assert_eq!(parsed.resources.len(), 1);
        assert_eq!(parsed.pois.len(), 2);
        assert_eq!(parsed.pois[0].target_pose.zoom, 1.2);
    }

    #[test]
    fn unknown_kind_fails_the_parse() {
        let toml = r#"
            [tour]
            scene_resource = "hall"

            [[resources]]
            name = "hall"
            kind = "hologram"
            location = "hall.gltf"
        "#;
        let err = toml::from_str::<TourManifest>(toml).unwrap_err();
        assert!(err.to_string().contains("hologram"));
    }

    #[test]
    fn missing_scene_resource_is_rejected() {
        let mut manifest = TourManifest::sample();
        manifest.tour.scene_resource = "atrium".into();
        let err = manifest.validate().unwrap_err();
        assert!(err.to_string().contains("atrium"));
    }

    #[test]
    fn scene_resource_must_be_a_model() {
        let mut manifest = TourManifest::sample();
        manifest.resources[0].kind = ResourceKind::Texture;
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut manifest = TourManifest::sample();
        manifest.resources.push(manifest.resources[0].clone());
        assert!(manifest.validate().is_err());

        let mut manifest = TourManifest::sample();
        manifest.pois.push(manifest.pois[0].clone());
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tour.toml");
        fs::write(
            &path,
            toml::to_string_pretty(&TourManifest::sample()).unwrap(),
        )
        .unwrap();

        let manifest = TourManifest::load(&path).unwrap();
        assert_eq!(manifest.pois[0].id, "owl");
    }
}
