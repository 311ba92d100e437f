use bevy::prelude::*;
use bevy_tiledmap_ext::prelude::*;
use bevy_tiledmap_ext::tiled;

fn load(crate_dir: &str, file: &str) -> tiled::Map {
    let path = format!(
        "{}/crates/{crate_dir}/tests/assets/{file}",
        env!("CARGO_MANIFEST_DIR")
    );
    tiled::Loader::new()
        .load_tmx_map(&path)
        .unwrap_or_else(|e| panic!("failed to load {path}: {e}"))
}

#[test]
fn should_read_layer_properties_through_unified_prelude() {
    let map = load("bevy_tiledmap_ext_core", "level.tmx");
    let ground = map.layer_by_name("ground").unwrap();

    assert!(ground.property::<bool>("active").unwrap());
    assert_eq!(ground.property_or("customProperty", 0), 123);
    assert_eq!(map.property_or("gravity", 0.0_f32), 9.8);
    assert!(map.is_not_empty());
}

#[cfg(feature = "avian")]
#[test]
fn should_build_bodies_through_unified_prelude() {
    let map = load("bevy_tiledmap_ext_avian", "physics.tmx");
    let config = PhysicsConfig::default();
    let height = map.total_height() as f32;

    let bodies: Vec<_> = map
        .objects()
        .iter()
        .filter_map(|object| object_body(object, height, &config))
        .collect();

    // crate, spawn, barrel and block
    assert_eq!(bodies.len(), 4);
    assert_eq!(bodies[0].body_type, BodyType::Dynamic);
}
