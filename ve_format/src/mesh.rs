use crate::error::Result;
use crystal::prelude::*;
use serde::{Deserialize, Serialize};
use std::{path::Path, sync::OnceLock};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub indices: [u32; 3],
}

/// Triangles drawn with a single material, indexing the vertex buffer of the owning [`MeshData`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submesh {
    pub material: String,
    pub faces: Vec<Face>,
}

impl Submesh {
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            faces: Vec::new(),
        }
    }

    /// Flat triangle index list, three entries per face.
    pub fn indices(&self) -> Vec<u32> {
        self.faces.iter().flat_map(|face| face.indices).collect()
    }
}

/// Deduplicated vertex buffer (parallel position/normal/uv arrays) plus one submesh per material.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshData {
    name: String,
    positions: Vec<Vec3<f32>>,
    normals: Vec<Vec3<f32>>,
    uvs: Vec<Vec2<f32>>,
    submeshes: Vec<Submesh>,
    #[serde(skip)]
    bounds: OnceLock<Option<Aabb>>,
}

impl PartialEq for MeshData {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.positions == other.positions
            && self.normals == other.normals
            && self.uvs == other.uvs
            && self.submeshes == other.submeshes
    }
}

impl MeshData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Appends one vertex and returns its index in the buffer.
    pub fn push_vertex(&mut self, position: Vec3<f32>, normal: Vec3<f32>, uv: Vec2<f32>) -> u32 {
        let idx = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        self.invalidate();
        idx
    }

    pub fn push_submesh(&mut self, submesh: Submesh) {
        self.submeshes.push(submesh);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn positions(&self) -> &[Vec3<f32>] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3<f32>] {
        &self.normals
    }

    pub fn uvs(&self) -> &[Vec2<f32>] {
        &self.uvs
    }

    pub fn submeshes(&self) -> &[Submesh] {
        &self.submeshes
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Every triangle of every submesh, in submesh order.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.submeshes
            .iter()
            .flat_map(|submesh| submesh.faces.iter().map(|face| face.indices))
    }

    /// Replaces every normal with smooth normals derived from the triangles.
    pub fn recalculate_normals(&mut self) {
        self.normals = vertex_normals(&self.positions, self.triangles());
    }

    /// Mirrors positions and normals on the selected axes.
    ///
    /// Mirroring an odd number of axes turns the winding inside out, so the
    /// triangle winding is reversed as well to keep front faces in front.
    pub fn flip_axis(&mut self, axes: [bool; 3]) {
        if !axes.contains(&true) {
            return;
        }

        let flip = |v: Vec3<f32>| {
            Vec3::new(
                if axes[0] { -v.x } else { v.x },
                if axes[1] { -v.y } else { v.y },
                if axes[2] { -v.z } else { v.z },
            )
        };
        for position in self.positions.iter_mut() {
            *position = flip(*position);
        }
        for normal in self.normals.iter_mut() {
            *normal = flip(*normal);
        }

        if axes.iter().filter(|flipped| **flipped).count() % 2 == 1 {
            for face in self.submeshes.iter_mut().flat_map(|s| s.faces.iter_mut()) {
                face.indices.swap(1, 2);
            }
        }

        self.invalidate();
    }

    /// Axis-aligned bounds of the vertex buffer, computed on first access.
    pub fn bounds(&self) -> Option<Aabb> {
        *self
            .bounds
            .get_or_init(|| Aabb::from_points(&self.positions))
    }

    fn invalidate(&mut self) {
        self.bounds = OnceLock::new();
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Ok(bincode::deserialize::<MeshData>(&bytes)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        MeshData::from_bytes(data)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn quad() -> MeshData {
        let mut mesh = MeshData::new("quad");
        mesh.push_vertex(Vec3::new(0.0, 0.0, 0.0), Vec3::zero(), Vec2::new(0.0, 0.0));
        mesh.push_vertex(Vec3::new(1.0, 0.0, 0.0), Vec3::zero(), Vec2::new(1.0, 0.0));
        mesh.push_vertex(Vec3::new(1.0, 1.0, 0.0), Vec3::zero(), Vec2::new(1.0, 1.0));
        mesh.push_vertex(Vec3::new(0.0, 1.0, 0.0), Vec3::zero(), Vec2::new(0.0, 1.0));
        mesh.push_submesh(Submesh {
            material: "stone".into(),
            faces: vec![Face { indices: [0, 1, 2] }, Face { indices: [2, 3, 0] }],
        });
        mesh
    }

    #[test]
    fn test_submesh_indices() {
        let mesh = quad();
        assert_eq!(mesh.submeshes()[0].indices(), vec![0, 1, 2, 2, 3, 0]);
        assert_eq!(mesh.triangles().count(), 2);
    }

    #[test]
    fn test_bounds_follow_changes() {
        let mut mesh = quad();
        let bounds = mesh.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 1.0, 0.0));

        mesh.push_vertex(Vec3::new(-2.0, 0.5, 3.0), Vec3::zero(), Vec2::zero());
        let bounds = mesh.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 1.0, 3.0));

        assert_eq!(MeshData::new("empty").bounds(), None);
    }

    #[test]
    fn test_recalculate_normals() {
        let mut mesh = quad();
        mesh.recalculate_normals();
        assert!(mesh.normals().iter().all(|n| *n == Vec3::unit_z()));
    }

    #[test]
    fn test_flip_axis_reverses_winding() {
        let mut mesh = quad();
        mesh.flip_axis([true, false, false]);

        assert_eq!(mesh.positions()[1], Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(mesh.submeshes()[0].faces[0].indices, [0, 2, 1]);
        assert_eq!(mesh.bounds().unwrap().min, Vec3::new(-1.0, 0.0, 0.0));

        // flipping two axes keeps the winding
        let mut mesh = quad();
        mesh.flip_axis([true, true, false]);
        assert_eq!(mesh.submeshes()[0].faces[0].indices, [0, 1, 2]);
    }

    #[test]
    fn test_serialization() -> Result<()> {
        let mesh = quad();
        let restored = MeshData::from_bytes(mesh.to_bytes()?)?;

        assert_eq!(restored, mesh);
        assert_eq!(restored.bounds(), mesh.bounds());
        Ok(())
    }
}
