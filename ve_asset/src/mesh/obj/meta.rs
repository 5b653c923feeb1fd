use anyhow::Result;
use serde::Deserialize;
use std::path::Path;
use ve_wavefront::BuildOptions;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct ObjMeta {
    #[serde(flatten)]
    pub(crate) build: BuildOptions,
    /// Overrides the `mtllib` of the model, relative to the model's folder.
    pub(crate) material_library: Option<String>,
}

impl ObjMeta {
    pub(crate) fn parse(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_toml(&data)
    }

    pub(crate) fn from_toml(data: &[u8]) -> Result<Self> {
        let meta: Self = toml::from_slice(data)?;
        Ok(meta)
    }
}
