mod meta;

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;
use ve_format::{material::MaterialLibrary, model::ModelData};
use ve_wavefront::{parse_geometry, parse_materials, ObjModel};

use crate::utils;

use self::meta::ObjMeta;

fn parse(path: &Path, meta: &ObjMeta) -> Result<Option<ModelData>> {
    let name = utils::file_name(path)?;
    let text = utils::read_text(path)?;

    let model = match parse_geometry(&text, Some(name))
        .with_context(|| format!("Could not parse `{}`", path.display()))?
    {
        Some(model) => model,
        None => return Ok(None),
    };

    let library = load_materials(path, meta, &model)?;
    let meshes = model
        .build(&meta.build)
        .with_context(|| format!("Could not build meshes of `{}`", path.display()))?;

    // every submesh refers to an entry of the library
    let referenced = model.parts().iter().flat_map(|part| part.materials());
    let mut materials = MaterialLibrary::new();
    for material in library.resolve(referenced.map(String::as_str)) {
        materials.insert(material);
    }

    Ok(Some(ModelData {
        name: model.name().to_string(),
        meshes,
        materials,
    }))
}

/// Reads the material library named by the meta file or else by the model's `mtllib`,
/// relative to the model's folder. A missing library is not an error.
fn load_materials(path: &Path, meta: &ObjMeta, model: &ObjModel) -> Result<MaterialLibrary> {
    let file = match meta.material_library.as_deref().or_else(|| model.material_library()) {
        Some(file) => file,
        None => return Ok(MaterialLibrary::new()),
    };

    let dir = path
        .parent()
        .with_context(|| format!("Path terminates in root or prefix: {}", path.display()))?;
    let mtl_path = dir.join(file);
    if !mtl_path.is_file() {
        warn!(
            "Material library `{}` of `{}` not found, using default materials",
            mtl_path.display(),
            path.display()
        );
        return Ok(MaterialLibrary::new());
    }

    let text = utils::read_text(&mtl_path)?;
    Ok(parse_materials(&text)
        .with_context(|| format!("Could not parse `{}`", mtl_path.display()))?)
}

fn serialize(model: ModelData) -> Result<Vec<u8>> {
    model.to_bytes().context("Could not serialize ModelData")
}

fn save(path: &Path, output_dir: &Path, data: Vec<u8>) -> Result<()> {
    let file_name = utils::file_name(path)?;
    let target = utils::combine_path(output_dir, file_name, "vem")?;
    utils::write_file(&target, &data)?;
    Ok(())
}

/// Parse meta from file called `file.toml` or alternativley from folder scoped meta file named `obj.toml` or else use default meta
fn parse_meta(path: &Path) -> Result<ObjMeta> {
    let dir = path
        .parent()
        .with_context(|| format!("Path terminates in root or prefix: {}", path.display()))?;
    let meta_file = utils::file_name(path)?;

    for candidate in [meta_file, "obj"] {
        let meta_path = utils::combine_path(dir, candidate, "toml")?;
        if meta_path.is_file() {
            return ObjMeta::parse(&meta_path);
        }
    }

    Ok(ObjMeta::default())
}

pub(crate) fn process(path: &Path, output_dir: &Path) -> Result<()> {
    info!("Processing Wavefront `.obj`-file: `{}`", path.display());
    let meta = parse_meta(path)?;
    match parse(path, &meta)? {
        Some(model) => save(path, output_dir, serialize(model)?),
        None => {
            warn!("`{}` contains no geometry, skipping", path.display());
            Ok(())
        }
    }
}
