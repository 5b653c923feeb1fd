use crate::{error::Result, material::MaterialLibrary, mesh::MeshData};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything converted from one source model: one mesh per part plus the materials they reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelData {
    pub name: String,
    pub meshes: Vec<MeshData>,
    pub materials: MaterialLibrary,
}

impl ModelData {
    pub fn mesh(&self, name: &str) -> Option<&MeshData> {
        self.meshes.iter().find(|mesh| mesh.name() == name)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Ok(bincode::deserialize::<ModelData>(&bytes)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        ModelData::from_bytes(data)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self)?)
    }
}
