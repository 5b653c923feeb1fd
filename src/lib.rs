//! Wavefront `.obj`/`.mtl` importer.
//!
//! [`parse_geometry`] turns `.obj` text into an [`ObjModel`], [`build_geometry_buffer`]
//! turns one of its parts into a deduplicated [`MeshData`] with one submesh per
//! material, and [`parse_materials`] turns `.mtl` text into a [`MaterialLibrary`].
//! Reading files and uploading the results is left to the caller.

mod assets;
mod error;

pub use assets::{
    mesh_builder::{build_geometry_buffer, build_geometry_buffer_with, BuildOptions},
    mtl::{parse_materials, AMBIENT_EMISSION_SCALE, SPECULAR_EXPONENT_RANGE},
    obj::{
        parse_geometry, ObjFace, ObjFaceIndex, ObjModel, ObjPart, DEFAULT_MATERIAL,
        DEFAULT_MODEL_NAME,
    },
};
pub use error::{Attribute, BuildError, ParseError};
pub use ve_format::{
    material::{MaterialData, MaterialLibrary},
    mesh::MeshData,
};
