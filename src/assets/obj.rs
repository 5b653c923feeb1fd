//! Parses `.obj` text into an [`ObjModel`].
use std::collections::HashMap;

use crystal::prelude::*;
use log::{debug, info, warn};
use ve_format::mesh::MeshData;

use super::{
    lexer::{self, ObjDirective},
    mesh_builder::{self, BuildOptions},
};
use crate::error::{BuildError, ParseError};

/// Model name used when the caller does not provide one.
pub const DEFAULT_MODEL_NAME: &str = "obj";
/// Material assigned to faces read before the first `usemtl`.
pub const DEFAULT_MATERIAL: &str = "default";

/// One corner of a face: 1-based indices into the model's position, uv and normal pools.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjFaceIndex {
    pub vert_i: usize,
    pub uv_i: Option<usize>,
    pub normal_i: Option<usize>,
}

/// A triangle, tagged with the material that was active when it was read.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjFace {
    /// Index into [`ObjPart::materials`].
    pub material: usize,
    pub face_i: [ObjFaceIndex; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjPart {
    name: String,
    materials: Vec<String>,
    faces: Vec<ObjFace>,
}

impl ObjPart {
    fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            materials: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distinct material names, in the order faces first used them.
    pub fn materials(&self) -> &[String] {
        &self.materials
    }

    pub fn faces(&self) -> &[ObjFace] {
        &self.faces
    }

    pub fn material_of(&self, face: &ObjFace) -> &str {
        &self.materials[face.material]
    }

    /// Faces of one material, in the order they were read.
    pub fn faces_with_material(&self, material: usize) -> impl Iterator<Item = &ObjFace> {
        self.faces
            .iter()
            .filter(move |face| face.material == material)
    }

    /// Whether any face corner references a normal.
    pub fn has_normals(&self) -> bool {
        self.faces
            .iter()
            .flat_map(|face| face.face_i.iter())
            .any(|face_index| face_index.normal_i.is_some())
    }

    fn material_index(&mut self, material: &str) -> usize {
        match self.materials.iter().position(|known| known == material) {
            Some(idx) => idx,
            None => {
                self.materials.push(material.into());
                self.materials.len() - 1
            }
        }
    }

    fn push_face(&mut self, material: &str, face_i: [ObjFaceIndex; 3]) {
        let material = self.material_index(material);
        self.faces.push(ObjFace { material, face_i });
    }
}

/// In-memory `.obj` model: global attribute pools plus named parts in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ObjModel {
    name: String,
    material_library: Option<String>,
    positions: Vec<Vec3<f32>>,
    normals: Vec<Vec3<f32>>,
    uvs: Vec<Vec2<f32>>,
    parts: Vec<ObjPart>,
    part_lookup: HashMap<String, usize>,
}

impl ObjModel {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name given by the `mtllib` directive, if any.
    pub fn material_library(&self) -> Option<&str> {
        self.material_library.as_deref()
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

    pub fn parts(&self) -> &[ObjPart] {
        &self.parts
    }

    pub fn part(&self, name: &str) -> Option<&ObjPart> {
        self.part_lookup.get(name).map(|idx| &self.parts[*idx])
    }

    /// Bounds of every position in the file, referenced or not.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.positions)
    }

    /// Builds the geometry buffer of the named part.
    pub fn build_part(&self, name: &str, options: &BuildOptions) -> Result<MeshData, BuildError> {
        let part = self
            .part(name)
            .ok_or_else(|| BuildError::UnknownPart(name.into()))?;
        mesh_builder::build_geometry_buffer_with(self, part, options)
    }

    /// Builds one geometry buffer per part, in part order.
    pub fn build(&self, options: &BuildOptions) -> Result<Vec<MeshData>, BuildError> {
        self.parts
            .iter()
            .map(|part| mesh_builder::build_geometry_buffer_with(self, part, options))
            .collect()
    }

    /// Adds a part unless the name is taken; returns the index of the part with that name.
    fn add_part(&mut self, name: &str) -> usize {
        if let Some(idx) = self.part_lookup.get(name) {
            return *idx;
        }

        self.parts.push(ObjPart::new(name));
        let idx = self.parts.len() - 1;
        self.part_lookup.insert(name.into(), idx);
        idx
    }
}

/// Per-file parser state, threaded through every directive.
#[derive(Debug)]
struct ParseContext {
    current_part: Option<usize>,
    current_material: String,
}

impl Default for ParseContext {
    fn default() -> Self {
        Self {
            current_part: None,
            current_material: DEFAULT_MATERIAL.into(),
        }
    }
}

/// Parses wavefront obj text (https://en.wikipedia.org/wiki/Wavefront_.obj_file).
///
/// Returns `Ok(None)` for empty input. Any malformed line aborts the whole parse.
pub fn parse_geometry(text: &str, name: Option<&str>) -> Result<Option<ObjModel>, ParseError> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let mut model = ObjModel::new(name.unwrap_or(DEFAULT_MODEL_NAME));
    let mut context = ParseContext::default();

    for line in lexer::lines(text) {
        if let Some(directive) = ObjDirective::lex(&line)? {
            apply_directive(&mut model, &mut context, directive, line.number);
        }
    }

    info!(
        "Parsed model `{}`: {} positions, {} normals, {} uvs, {} parts",
        model.name,
        model.positions.len(),
        model.normals.len(),
        model.uvs.len(),
        model.parts.len()
    );

    Ok(Some(model))
}

fn apply_directive(
    model: &mut ObjModel,
    context: &mut ParseContext,
    directive: ObjDirective,
    line: usize,
) {
    match directive {
        ObjDirective::MaterialLibrary(name) => model.material_library = Some(name),
        ObjDirective::Position(position) => model.positions.push(position),
        ObjDirective::Normal(normal) => model.normals.push(normal),
        ObjDirective::TexCoord(uv) => model.uvs.push(uv),
        ObjDirective::Part(name) => {
            context.current_part = Some(model.add_part(&name));
        }
        ObjDirective::UseMaterial(name) => context.current_material = name,
        ObjDirective::Face(face_i) => push_face(model, context, face_i, line),
    }
}

// triangles stay as they are, quads are split along the 0-2 diagonal
fn push_face(
    model: &mut ObjModel,
    context: &ParseContext,
    face_i: Vec<ObjFaceIndex>,
    line: usize,
) {
    let part = match context.current_part {
        Some(idx) => &mut model.parts[idx],
        None => {
            warn!("Line {}: face outside of any group. Dropping.", line);
            return;
        }
    };

    match face_i.len() {
        0..=2 => {
            warn!("Line {}: face with {} vertices. Dropping.", line, face_i.len());
            return;
        }
        3 | 4 => {}
        n => warn!(
            "Line {}: face with {} vertices, only the first 4 are used",
            line, n
        ),
    }

    debug!("Line {}: face in `{}` with `{}`", line, part.name, context.current_material);
    part.push_face(
        &context.current_material,
        [face_i[0], face_i[1], face_i[2]],
    );
    if face_i.len() >= 4 {
        part.push_face(
            &context.current_material,
            [face_i[2], face_i[3], face_i[0]],
        );
    }
}
