use crate::color::Color;
use serde::{Deserialize, Serialize};

pub const RENDER_QUEUE_OPAQUE: u32 = 2000;
pub const RENDER_QUEUE_TRANSPARENT: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlendFactor {
    Zero,
    One,
    SrcAlpha,
    OneMinusSrcAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlendState {
    pub src_factor: BlendFactor,
    pub dst_factor: BlendFactor,
    pub depth_write: bool,
}

impl BlendState {
    /// Classic `src * a + dst * (1 - a)` blending without depth writes.
    pub const ALPHA: BlendState = BlendState {
        src_factor: BlendFactor::SrcAlpha,
        dst_factor: BlendFactor::OneMinusSrcAlpha,
        depth_write: false,
    };
}

/// Renderer-agnostic description of a single material.
///
/// Texture fields only hold the file name found in the material file; loading
/// and binding the image is up to whoever consumes this description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialData {
    pub name: String,
    pub diffuse: Color,
    pub specular: Color,
    pub emissive: Color,
    pub emission_enabled: bool,
    pub glossiness: f32,
    /// `None` for opaque materials.
    pub blend: Option<BlendState>,
    pub render_queue: u32,
    pub diffuse_texture: Option<String>,
    pub bump_texture: Option<String>,
}

impl MaterialData {
    pub const DEFAULT_GLOSSINESS: f32 = 0.5;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            diffuse: Color::WHITE,
            specular: Color::BLACK,
            emissive: Color::BLACK,
            emission_enabled: false,
            glossiness: Self::DEFAULT_GLOSSINESS,
            blend: None,
            render_queue: RENDER_QUEUE_OPAQUE,
            diffuse_texture: None,
            bump_texture: None,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.blend.is_some()
    }

    /// Switches the material to alpha blending with the given opacity.
    pub fn make_transparent(&mut self, alpha: f32) {
        self.diffuse = self.diffuse.with_alpha(alpha);
        self.blend = Some(BlendState::ALPHA);
        self.render_queue = RENDER_QUEUE_TRANSPARENT;
    }
}

/// Materials in declaration order, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialLibrary {
    materials: Vec<MaterialData>,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the material unless one with the same name exists already.
    /// Returns whether it was added.
    pub fn insert(&mut self, material: MaterialData) -> bool {
        if self.contains(&material.name) {
            return false;
        }
        self.materials.push(material);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&MaterialData> {
        self.materials.iter().find(|material| material.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialData> {
        self.materials.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.materials.iter().map(|material| material.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Looks up one material per name, in the given order.
    /// Unknown names get a default material carrying that name.
    pub fn resolve<'a, I>(&self, names: I) -> Vec<MaterialData>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .map(|name| match self.get(name) {
                Some(material) => material.clone(),
                None => {
                    log::debug!("Material `{}` not found, using default", name);
                    MaterialData::new(name)
                }
            })
            .collect()
    }
}
