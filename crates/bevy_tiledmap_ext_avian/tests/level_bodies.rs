use bevy::prelude::*;
use bevy_tiledmap_ext_avian::prelude::*;
use bevy_tiledmap_ext_core::prelude::*;
use tiled::{LayerType, Map, Object};

fn load() -> Map {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/assets/physics.tmx");
    tiled::Loader::new()
        .load_tmx_map(path)
        .unwrap_or_else(|e| panic!("failed to load {path}: {e}"))
}

fn object<'map>(map: &'map Map, name: &str) -> Object<'map> {
    map.objects()
        .into_iter()
        .find(|object| object.name == name)
        .unwrap_or_else(|| panic!("no object named {name}"))
}

#[test]
fn should_build_body_for_object_with_physics_properties() {
    let map = load();
    let config = PhysicsConfig::default();
    let crate_object = object(&map, "crate");

    let body = object_body(&crate_object, map.total_height() as f32, &config).unwrap();

    assert_eq!(body.body_type, BodyType::Dynamic);
    assert_eq!(body.position, Vec2::new(32.0, 64.0));
    assert_eq!(body.fixtures.len(), 1);
    assert_eq!(body.fixtures[0].offset, Vec2::new(16.0, -16.0));
    assert_eq!(body.fixtures[0].density, 2.0);
    assert_eq!(body.fixtures[0].friction, config.default_friction);
}

#[test]
fn should_skip_objects_without_physics() {
    let map = load();
    let sign = object(&map, "sign");

    assert!(!wants_physics(&*sign));
    assert!(object_body(&sign, 64.0, &PhysicsConfig::default()).is_none());
}

#[test]
fn should_skip_text_objects() {
    let map = load();
    let label = object(&map, "label");

    assert!(wants_physics(&*label));
    assert!(object_body(&label, 64.0, &PhysicsConfig::default()).is_none());
}

#[test]
fn should_read_physics_settings_class_property() {
    let map = load();
    let spawn = object(&map, "spawn");

    let body = object_body(&spawn, 64.0, &PhysicsConfig::default()).unwrap();

    assert_eq!(body.body_type, BodyType::Static);
    assert_eq!(body.position, Vec2::new(16.0, 16.0));
    assert!(body.fixtures[0].is_sensor);
}

#[test]
fn should_collect_tile_collision_shapes_per_cell() {
    let map = load();
    let geometry = MapGeometry::from_map(&map);
    let walls = map.layer_by_name("walls").unwrap();
    let LayerType::Tiles(tiles) = walls.layer_type() else {
        panic!("walls should be a tile layer");
    };

    let config = PhysicsConfig::default().with_default_body_type(BodyType::Dynamic);
    let body = tile_layer_body(&tiles, &geometry, &config).unwrap();

    let offsets: Vec<_> = body.fixtures.iter().map(|f| f.offset).collect();
    assert_eq!(
        offsets,
        vec![
            Vec2::new(16.0, 48.0),
            Vec2::new(48.0, 40.0),
            Vec2::new(48.0, 16.0)
        ]
    );
    // Tile properties feed the fixture material
    assert_eq!(body.fixtures[1].friction, 0.1);
    // Terrain stays put whatever the object default is
    assert_eq!(body.body_type, BodyType::Static);
}

#[test]
fn should_anchor_tile_object_at_bottom_left() {
    let map = load();
    let barrel = object(&map, "barrel");

    let body = object_body(&barrel, map.total_height() as f32, &PhysicsConfig::default()).unwrap();

    // Body type comes from the tileset tile
    assert_eq!(body.body_type, BodyType::Dynamic);
    assert_eq!(body.position, Vec2::new(0.0, 32.0));
    assert_eq!(body.fixtures.len(), 1);
    assert_eq!(body.position + body.fixtures[0].offset, Vec2::new(16.0, 48.0));
    // Instance properties override the tile's
    assert_eq!(body.fixtures[0].friction, 0.8);
}

#[test]
fn should_use_tileset_collision_for_tile_object() {
    let map = load();
    let block = object(&map, "block");

    let body = object_body(&block, map.total_height() as f32, &PhysicsConfig::default()).unwrap();

    assert_eq!(body.body_type, BodyType::Static);
    assert_eq!(body.position, Vec2::new(32.0, 0.0));
    assert_eq!(body.fixtures.len(), 1);
    assert_eq!(body.fixtures[0].offset, Vec2::new(16.0, 16.0));
    assert!(matches!(
        body.fixtures[0].collider.shape().as_typed_shape(),
        avian2d::parry::shape::TypedShape::Cuboid(_)
    ));
}

#[test]
fn should_centre_full_tile_collision_shape() {
    let map = load();
    let tileset = &map.tilesets()[0];
    let size = Vec2::splat(32.0);

    let full = tileset.get_tile(0).unwrap();
    assert!(bevy_tiledmap_ext_avian::shapes::tile_collider(&full, size).is_some());

    let shapes = bevy_tiledmap_ext_avian::shapes::tile_collision_shapes(&full, size);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].0, Vec2::ZERO);
}
