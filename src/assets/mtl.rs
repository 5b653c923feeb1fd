use log::{debug, info};
use ve_format::{
    color::Color,
    material::{MaterialData, MaterialLibrary},
};

use super::lexer::{self, MtlDirective};
use crate::error::ParseError;

/// Ambient colors are far too strong to be used as emission directly.
pub const AMBIENT_EMISSION_SCALE: f32 = 0.05;
/// `Ns` is usually given in `0..=1000`.
pub const SPECULAR_EXPONENT_RANGE: f32 = 1000.0;

/// Parses `.mtl` text into materials, in declaration order.
///
/// Empty input yields an empty library. When a name is declared twice, the
/// first declaration wins and the properties of the second are dropped.
pub fn parse_materials(text: &str) -> Result<MaterialLibrary, ParseError> {
    let mut library = MaterialLibrary::new();
    let mut current: Option<MaterialData> = None;

    for line in lexer::lines(text) {
        let directive = match MtlDirective::lex(&line)? {
            Some(directive) => directive,
            None => continue,
        };

        if let MtlDirective::NewMaterial(name) = directive {
            commit(&mut library, current.replace(MaterialData::new(name)));
            continue;
        }

        let material = current
            .as_mut()
            .ok_or_else(|| ParseError::MissingCurrentMaterial {
                line: line.number,
                directive: line.keyword.into(),
            })?;
        directive.apply(material);
    }
    commit(&mut library, current.take());

    info!("Parsed {} materials", library.len());
    Ok(library)
}

fn commit(library: &mut MaterialLibrary, material: Option<MaterialData>) {
    if let Some(material) = material {
        let name = material.name.clone();
        if !library.insert(material) {
            debug!("Material `{}` declared twice, keeping the first", name);
        }
    }
}

impl MtlDirective {
    /// Translates one shading directive into the generic material description.
    fn apply(self, material: &mut MaterialData) {
        match self {
            MtlDirective::NewMaterial(_) => {}
            // keep an alpha set by an earlier `d`
            MtlDirective::Diffuse(rgb) => {
                material.diffuse = Color::from(rgb).with_alpha(material.diffuse.a)
            }
            MtlDirective::Specular(rgb) => material.specular = Color::from(rgb),
            MtlDirective::Ambient(rgb) => {
                material.emissive = Color::from(rgb).scaled(AMBIENT_EMISSION_SCALE);
                material.emission_enabled = true;
            }
            MtlDirective::Dissolve(visibility) => {
                if visibility < 1.0 {
                    material.make_transparent(visibility);
                }
            }
            MtlDirective::SpecularExponent(exponent) => {
                material.glossiness = exponent / SPECULAR_EXPONENT_RANGE
            }
            MtlDirective::DiffuseMap(texture) => material.diffuse_texture = Some(texture),
            MtlDirective::BumpMap(texture) => material.bump_texture = Some(texture),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ve_format::material::{BlendFactor, RENDER_QUEUE_OPAQUE, RENDER_QUEUE_TRANSPARENT};

    #[test]
    fn test_transparent_material() -> Result<(), ParseError> {
        let library = parse_materials("newmtl M\nKd 1 0 0\nd 0.5")?;
        let material = library.get("M").unwrap();

        assert_eq!(material.diffuse, Color::rgba(1.0, 0.0, 0.0, 0.5));
        assert!(material.is_transparent());
        assert_eq!(material.render_queue, RENDER_QUEUE_TRANSPARENT);

        let blend = material.blend.unwrap();
        assert_eq!(blend.src_factor, BlendFactor::SrcAlpha);
        assert_eq!(blend.dst_factor, BlendFactor::OneMinusSrcAlpha);
        assert!(!blend.depth_write);
        Ok(())
    }

    #[test]
    fn test_opaque_material() -> Result<(), ParseError> {
        let library = parse_materials("newmtl solid\nd 1.0\nnewmtl plain\nKd 0 1 0")?;

        for name in ["solid", "plain"] {
            let material = library.get(name).unwrap();
            assert!(!material.is_transparent());
            assert_eq!(material.diffuse.a, 1.0);
            assert_eq!(material.render_queue, RENDER_QUEUE_OPAQUE);
        }
        Ok(())
    }

    #[test]
    fn test_alpha_survives_later_diffuse() -> Result<(), ParseError> {
        let library = parse_materials("newmtl glass\nd 0.25\nKd 0 0 1")?;
        assert_eq!(
            library.get("glass").unwrap().diffuse,
            Color::rgba(0.0, 0.0, 1.0, 0.25)
        );
        Ok(())
    }

    #[test]
    fn test_shading_parameters() -> Result<(), ParseError> {
        let text = "\
# exported material
newmtl  brushed  steel
Ka 1 0.5 0
Ks 0.5 0.5 0.5
Ns 250
map_Kd textures/steel.png
map_Bump textures/steel_normal.png
illum 2
";
        let library = parse_materials(text)?;
        let material = library.get("brushed steel").unwrap();

        assert_eq!(material.emissive, Color::rgb(0.05, 0.025, 0.0));
        assert!(material.emission_enabled);
        assert_eq!(material.specular, Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(material.glossiness, 0.25);
        assert_eq!(
            material.diffuse_texture.as_deref(),
            Some("textures/steel.png")
        );
        assert_eq!(
            material.bump_texture.as_deref(),
            Some("textures/steel_normal.png")
        );
        // untouched channels keep their defaults
        assert_eq!(material.diffuse, Color::WHITE);
        Ok(())
    }

    #[test]
    fn test_glossiness_is_not_clamped() -> Result<(), ParseError> {
        let library = parse_materials("newmtl shiny\nNs 1500")?;
        assert_eq!(library.get("shiny").unwrap().glossiness, 1.5);
        Ok(())
    }

    #[test]
    fn test_duplicate_keeps_first() -> Result<(), ParseError> {
        let library = parse_materials("newmtl a\nKd 1 0 0\nnewmtl b\nnewmtl a\nKd 0 1 0")?;

        let names: Vec<&str> = library.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(library.get("a").unwrap().diffuse, Color::rgb(1.0, 0.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_property_before_newmtl() {
        assert_eq!(
            parse_materials("# header\nKd 1 1 1\nnewmtl late"),
            Err(ParseError::MissingCurrentMaterial {
                line: 2,
                directive: "Kd".into()
            })
        );
        // unsupported directives are ignored even without a material
        assert!(parse_materials("illum 2\nnewmtl ok").is_ok());
    }

    #[test]
    fn test_empty_input() -> Result<(), ParseError> {
        assert!(parse_materials("")?.is_empty());
        Ok(())
    }
}
