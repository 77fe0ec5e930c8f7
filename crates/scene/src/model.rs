//! glTF model decoding
//!
//! Flattens a .glb/.gltf file into a single triangle mesh: node
//! transforms are baked into the vertices and each primitive's base color
//! is folded in per vertex, so the renderer only ever deals with one
//! vertex/index buffer pair.

use std::path::Path;

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Vec3};

/// Error type for model loading.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to decode glTF file: {0}")]
    Decode(#[from] gltf::Error),

    #[error("missing position data for mesh: {0}")]
    MissingPositions(String),

    #[error("model contains no triangles")]
    Empty,
}

/// One mesh vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

/// A fully decoded, world-space triangle mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[must_use]
    pub fn index_count(&self) -> u32 {
        u32::try_from(self.indices.len()).unwrap_or(u32::MAX)
    }
}

/// Decode a glTF file into one flattened mesh.
///
/// Walks every node of the default scene (or the first scene if none is
/// marked default), applying parent transforms on the way down. Meshes
/// compressed with codec extensions the decoder does not understand
/// surface as [`ModelError::Decode`].
///
/// # Errors
///
/// Returns an error when the file cannot be decoded, a primitive lacks
/// position data, or the document contains no geometry at all.
pub fn load_model(path: impl AsRef<Path>) -> Result<MeshData, ModelError> {
    let path = path.as_ref();
    let (document, buffers, _images) = gltf::import(path)?;

    let mut mesh = MeshData::default();
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next());
    if let Some(scene) = scene {
        for node in scene.nodes() {
            process_node(&node, Mat4::IDENTITY, &buffers, &mut mesh)?;
        }
    }

    if mesh.indices.is_empty() {
        return Err(ModelError::Empty);
    }

    tracing::info!(
        "decoded {:?}: {} vertices, {} triangles",
        path,
        mesh.vertices.len(),
        mesh.indices.len() / 3
    );
    Ok(mesh)
}

fn process_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    mesh: &mut MeshData,
) -> Result<(), ModelError> {
    let transform = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(gltf_mesh) = node.mesh() {
        for primitive in gltf_mesh.primitives() {
            append_primitive(&primitive, transform, buffers, mesh)?;
        }
    }

    for child in node.children() {
        process_node(&child, transform, buffers, mesh)?;
    }
    Ok(())
}

fn append_primitive(
    primitive: &gltf::Primitive,
    transform: Mat4,
    buffers: &[gltf::buffer::Data],
    mesh: &mut MeshData,
) -> Result<(), ModelError> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice()));

    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or_else(|| ModelError::MissingPositions(format!("primitive {}", primitive.index())))?
        .collect();

    // Normals transform with the inverse transpose so non-uniform node
    // scales do not skew the lighting.
    let normal_matrix = Mat3::from_mat4(transform).inverse().transpose();
    let normals: Vec<[f32; 3]> = match reader.read_normals() {
        Some(iter) => iter.collect(),
        None => vec![[0.0, 1.0, 0.0]; positions.len()],
    };

    let color: [f32; 4] = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();

    let base = u32::try_from(mesh.vertices.len()).unwrap_or(u32::MAX);
    for (position, normal) in positions.iter().zip(normals.iter()) {
        let world = transform.transform_point3(Vec3::from_array(*position));
        let n = (normal_matrix * Vec3::from_array(*normal)).normalize_or_zero();
        mesh.vertices.push(Vertex {
            position: world.to_array(),
            normal: n.to_array(),
            color,
        });
    }

    match reader.read_indices() {
        Some(indices) => mesh.indices.extend(indices.into_u32().map(|i| base + i)),
        // Unindexed primitives draw vertices in order.
        None => mesh
            .indices
            .extend((0..u32::try_from(positions.len()).unwrap_or(0)).map(|i| base + i)),
    }
    Ok(())
}
