// SPDX-License-Identifier: MPL-2.0
use model_lens::config::{self, Config};
use model_lens::i18n::fluent::I18n;
use model_lens::model::{
    loader, Applied, DisplayObject, LoadError, ModelFormat, ModelReference, ObjectUrlRegistry,
    Resolution, SceneLoader,
};
use model_lens::model::gltf_reader;
use model_lens::render::glb;
use model_lens::scene::FallbackCube;
use model_lens::ui::theming::ThemeMode;
use std::io::Write;
use tempfile::tempdir;

const ASCII_STL: &str = "solid tri
facet normal 0 0 1
  outer loop
    vertex 0 0 0
    vertex 1 0 0
    vertex 0 1 0
  endloop
endfacet
endsolid tri
";

#[test]
fn exported_cube_reimports_with_same_geometry() {
    let cube = FallbackCube::new(false).scene();
    let bytes = glb::encode(&cube).expect("cube encodes");

    let reimported = gltf_reader::read_slice(&bytes).expect("exported GLB parses");
    assert_eq!(reimported.triangle_count(), cube.triangle_count());
}

#[test]
fn stl_file_parses_through_loader() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("tri.stl");
    std::fs::File::create(&path)
        .and_then(|mut f| f.write_all(ASCII_STL.as_bytes()))
        .expect("Failed to write STL file");

    let scene = loader::parse(ModelFormat::Stl, path).expect("STL parses");
    assert_eq!(scene.triangle_count(), 1);
}

#[test]
fn unsupported_extension_registers_nothing() {
    let registry = ObjectUrlRegistry::new();
    let result = ModelReference::register(&registry, "notes.txt");

    assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
    assert!(registry.is_empty());
}

#[tokio::test]
async fn load_job_for_live_reference_is_applied() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("tri.stl");
    std::fs::write(&path, ASCII_STL).expect("Failed to write STL file");

    let registry = ObjectUrlRegistry::new();
    let mut scene_loader = SceneLoader::new(registry.clone());
    let reference = ModelReference::register(&registry, &path).expect("stl is supported");

    let Resolution::Load(job) = scene_loader.resolve(Some(&reference), true) else {
        panic!("a reference resolves to a load job");
    };
    let mut display = DisplayObject::Pending(job.request());
    let outcome = job.run().await;

    assert_eq!(display.apply(outcome), Applied::Loaded { triangles: 1 });
    assert_eq!(display.scene().map(|s| s.triangle_count()), Some(1));
}

#[tokio::test]
async fn dropping_reference_revokes_before_load_runs() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("tri.stl");
    std::fs::write(&path, ASCII_STL).expect("Failed to write STL file");

    let registry = ObjectUrlRegistry::new();
    let mut scene_loader = SceneLoader::new(registry.clone());
    let reference = ModelReference::register(&registry, &path).expect("stl is supported");
    let Resolution::Load(job) = scene_loader.resolve(Some(&reference), false) else {
        panic!("a reference resolves to a load job");
    };

    drop(reference);
    assert!(registry.is_empty());

    let outcome = job.run().await;
    assert_eq!(outcome.result.err(), Some(LoadError::Revoked));
}

#[test]
fn config_round_trips_and_drives_language() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("fr".to_string());
    initial.general.theme_mode = ThemeMode::Light;
    initial.viewer.render_width = Some(640);
    config::save_to_path(&initial, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, initial);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let english = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(english.current_locale().to_string(), "en-US");
}

#[test]
fn corrupt_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "this is = = not toml")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
