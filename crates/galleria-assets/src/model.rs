//! glTF scene-fragment decoding

use galleria_core::{Mat4, Quat, Vec3};
use tracing::debug;

use crate::descriptor::ResourceDescriptor;
use crate::error::LoadError;

/// A decoded scene fragment: mesh geometry plus the named node placements
/// the tour uses to align POI anchors with the model.
#[derive(Debug, Clone)]
pub struct ModelAsset {
    pub meshes: Vec<MeshAsset>,
    pub nodes: Vec<NodePlacement>,
}

/// A named mesh from the glTF document.
#[derive(Debug, Clone)]
pub struct MeshAsset {
    pub name: String,
    pub primitives: Vec<MeshPrimitive>,
}

/// Geometry for one glTF primitive.
#[derive(Debug, Clone)]
pub struct MeshPrimitive {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub tex_coords: Option<Vec<[f32; 2]>>,
    pub indices: Option<Vec<u32>>,
}

impl MeshPrimitive {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// A scene node's name and local transform.
#[derive(Debug, Clone)]
pub struct NodePlacement {
    pub name: String,
    pub transform: Mat4,
}

impl ModelAsset {
    /// Total vertex count across all meshes.
    pub fn vertex_count(&self) -> usize {
        self.meshes
            .iter()
            .flat_map(|m| &m.primitives)
            .map(MeshPrimitive::vertex_count)
            .sum()
    }
}

/// Decode a glTF 2.0 payload (.gltf JSON or .glb binary) already in memory.
pub fn decode(descriptor: &ResourceDescriptor, bytes: &[u8]) -> Result<ModelAsset, LoadError> {
    let (document, buffers, _images) = gltf::import_slice(bytes).map_err(|e| LoadError::Decode {
        name: descriptor.name.clone(),
        kind: descriptor.kind,
        detail: e.to_string(),
    })?;

    let mut meshes = Vec::new();
    for mesh in document.meshes() {
        let name = mesh.name().unwrap_or("unnamed").to_string();
        let mut primitives = Vec::new();

        for primitive in mesh.primitives() {
            let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

            let positions: Vec<[f32; 3]> = reader
                .read_positions()
                .map(|iter| iter.collect())
                .unwrap_or_default();

            let normals: Vec<[f32; 3]> = reader
                .read_normals()
                .map(|iter| iter.collect())
                .unwrap_or_default();

            let tex_coords: Option<Vec<[f32; 2]>> = reader
                .read_tex_coords(0)
                .map(|tc| tc.into_f32().collect());

            let indices: Option<Vec<u32>> = reader
                .read_indices()
                .map(|idx| idx.into_u32().collect());

            primitives.push(MeshPrimitive {
                positions,
                normals,
                tex_coords,
                indices,
            });
        }

        meshes.push(MeshAsset { name, primitives });
    }

    let nodes = document
        .nodes()
        .map(|node| {
            let (translation, rotation, scale) = node.transform().decomposed();
            NodePlacement {
                name: node.name().unwrap_or("unnamed").to_string(),
                transform: Mat4::from_scale_rotation_translation(
                    Vec3::from(scale),
                    Quat::from_array(rotation),
                    Vec3::from(translation),
                ),
            }
        })
        .collect::<Vec<_>>();

    debug!(
        "decoded model '{}': {} meshes, {} nodes",
        descriptor.name,
        meshes.len(),
        nodes.len()
    );

    Ok(ModelAsset { meshes, nodes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ResourceKind;

    fn descriptor() -> ResourceDescriptor {
        ResourceDescriptor::new("hall", ResourceKind::Model, "hall.gltf")
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let err = decode(&descriptor(), b"not a gltf document").unwrap_err();
        match err {
            LoadError::Decode { name, kind, .. } => {
                assert_eq!(name, "hall");
                assert_eq!(kind, ResourceKind::Model);
            }
            other => panic!("expected Decode, got: {other:?}"),
        }
    }

    #[test]
    fn minimal_document_decodes_empty() {
        let gltf = br#"{"asset":{"version":"2.0"}}"#;
        let model = decode(&descriptor(), gltf).unwrap();
        assert!(model.meshes.is_empty());
        assert!(model.nodes.is_empty());
        assert_eq!(model.vertex_count(), 0);
    }
}
