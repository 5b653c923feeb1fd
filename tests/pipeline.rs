use std::fs;

use ve_wavefront::*;

fn read_fixture(name: &str) -> String {
    let root = env!("CARGO_MANIFEST_DIR");
    fs::read_to_string(format!("{}/tests/data/{}", root, name)).unwrap()
}

#[test]
pub fn test_crate_model() {
    let model = parse_geometry(&read_fixture("crate.obj"), Some("crate"))
        .expect("Failed to parse crate.obj")
        .expect("crate.obj is not empty");

    assert_eq!(model.name(), "crate");
    assert_eq!(model.material_library(), Some("crate.mtl"));

    let names: Vec<&str> = model.parts().iter().map(|part| part.name()).collect();
    assert_eq!(names, vec!["Crate", "Body", "Lid"]);
    assert!(model.part("Crate").unwrap().faces().is_empty());
    assert_eq!(model.part("Body").unwrap().materials(), ["wood", "metal"]);
    assert_eq!(model.part("Body").unwrap().faces().len(), 10);

    let size = model.bounds().unwrap().size();
    assert_eq!(size.to_array(), [2.0, 2.0, 2.0]);
}

#[test]
pub fn test_crate_meshes() {
    let model = parse_geometry(&read_fixture("crate.obj"), None)
        .unwrap()
        .unwrap();
    let body = model.build_part("Body", &BuildOptions::default()).unwrap();

    // 20 corners of 5 quads, but each (position, uv) pair is shared where faces meet
    let distinct: std::collections::HashSet<ObjFaceIndex> = model
        .part("Body")
        .unwrap()
        .faces()
        .iter()
        .flat_map(|face| face.face_i.iter().copied())
        .collect();
    assert_eq!(body.vertex_count(), distinct.len());

    let submeshes = body.submeshes();
    assert_eq!(submeshes.len(), 2);
    assert_eq!(submeshes[0].material, "wood");
    assert_eq!(submeshes[0].faces.len(), 8);
    assert_eq!(submeshes[1].material, "metal");
    assert_eq!(submeshes[1].faces.len(), 2);

    // no normals in the file, so all of them are calculated
    assert!(body.normals().iter().all(|normal| normal.to_array() != [0.0; 3]));

    let bounds = body.bounds().unwrap();
    assert_eq!(bounds.min.to_array(), [-1.0, -1.0, -1.0]);
    assert_eq!(bounds.max.to_array(), [1.0, 1.0, 1.0]);

    let lid = model.build_part("Lid", &BuildOptions::default()).unwrap();
    assert_eq!(lid.vertex_count(), 4);
    assert_eq!(lid.submeshes()[0].indices(), vec![0, 1, 2, 2, 3, 0]);
}

#[test]
pub fn test_crate_materials() {
    let library = parse_materials(&read_fixture("crate.mtl")).expect("Failed to parse crate.mtl");

    let names: Vec<&str> = library.names().collect();
    assert_eq!(names, vec!["wood", "metal", "glass"]);

    let wood = library.get("wood").unwrap();
    assert!(wood.emission_enabled);
    assert_eq!(wood.emissive.r, AMBIENT_EMISSION_SCALE);
    assert_eq!(wood.glossiness, 0.1);
    assert_eq!(wood.diffuse_texture.as_deref(), Some("wood_diffuse.png"));
    assert_eq!(wood.bump_texture.as_deref(), Some("wood_normal.png"));
    assert!(!wood.is_transparent());

    let glass = library.get("glass").unwrap();
    assert!(glass.is_transparent());
    assert_eq!(glass.diffuse.a, 0.3);

    // materials handed to the renderer line up with the submeshes of a part
    let model = parse_geometry(&read_fixture("crate.obj"), None)
        .unwrap()
        .unwrap();
    let body = model.part("Body").unwrap();
    let resolved = library.resolve(body.materials().iter().map(String::as_str));
    assert_eq!(resolved[0].name, "wood");
    assert_eq!(resolved[1].name, "metal");
}
