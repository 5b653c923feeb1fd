use std::collections::HashMap;

use crystal::prelude::*;
use log::debug;
use serde::Deserialize;
use ve_format::mesh::{Face, MeshData, Submesh};

use super::obj::{ObjFaceIndex, ObjModel, ObjPart};
use crate::error::{Attribute, BuildError};

/// Tweaks applied while building geometry buffers. The defaults change nothing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Mirror positions and normals on the x, y and z axis.
    pub flip_axis: [bool; 3],
    /// Recalculate normals even if the faces reference some.
    pub calculate_normals: bool,
}

/// Builds the geometry buffer of `part` with default options.
pub fn build_geometry_buffer(model: &ObjModel, part: &ObjPart) -> Result<MeshData, BuildError> {
    build_geometry_buffer_with(model, part, &BuildOptions::default())
}

/// Builds the deduplicated vertex buffer of `part` with one submesh per material.
// for each material of the part, in first use order:
// - go through its faces in the order they were read
// - - look up every face corner (position, uv, normal) in `index_lookup`
// - - unseen corners are appended to the vertex buffer, missing uvs and normals become zero
// - - the buffer index of the corner is appended to the submesh of the material
// afterwards normals are recalculated if no face supplied any
pub fn build_geometry_buffer_with(
    model: &ObjModel,
    part: &ObjPart,
    options: &BuildOptions,
) -> Result<MeshData, BuildError> {
    let mut mesh = MeshData::new(part.name());
    let mut index_lookup: HashMap<ObjFaceIndex, u32> = HashMap::new();

    for (material_i, material) in part.materials().iter().enumerate() {
        let mut submesh = Submesh::new(material.as_str());

        for face in part.faces_with_material(material_i) {
            let mut indices = [0u32; 3];

            for (slot, face_index) in indices.iter_mut().zip(face.face_i.iter()) {
                *slot = match index_lookup.get(face_index).copied() {
                    Some(idx) => idx,
                    None => {
                        let (position, normal, uv) = resolve_vertex(model, part, face_index)?;
                        let idx = mesh.push_vertex(position, normal, uv);
                        index_lookup.insert(*face_index, idx);
                        idx
                    }
                };
            }

            submesh.faces.push(Face { indices });
        }

        mesh.push_submesh(submesh);
    }

    if options.calculate_normals || !part.has_normals() {
        debug!("Calculating normals of `{}`", part.name());
        mesh.recalculate_normals();
    }
    mesh.flip_axis(options.flip_axis);

    debug!(
        "Built `{}`: {} vertices, {} submeshes",
        part.name(),
        mesh.vertex_count(),
        mesh.submeshes().len()
    );

    Ok(mesh)
}

fn resolve_vertex(
    model: &ObjModel,
    part: &ObjPart,
    face_index: &ObjFaceIndex,
) -> Result<(Vec3<f32>, Vec3<f32>, Vec2<f32>), BuildError> {
    let position = lookup(model.positions(), face_index.vert_i, Attribute::Position, part)?;

    let normal = match face_index.normal_i {
        Some(normal_i) => lookup(model.normals(), normal_i, Attribute::Normal, part)?,
        None => Vec3::zero(),
    };

    let uv = match face_index.uv_i {
        Some(uv_i) => lookup(model.uvs(), uv_i, Attribute::TexCoord, part)?,
        None => Vec2::zero(),
    };

    Ok((position, normal, uv))
}

// converts the 1-based file index into the pool
fn lookup<T: Copy>(
    pool: &[T],
    index: usize,
    attribute: Attribute,
    part: &ObjPart,
) -> Result<T, BuildError> {
    index
        .checked_sub(1)
        .and_then(|idx| pool.get(idx))
        .copied()
        .ok_or_else(|| BuildError::IndexOutOfRange {
            part: part.name().into(),
            attribute,
            index,
            len: pool.len(),
        })
}
