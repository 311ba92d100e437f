//! Physics bodies from a Tiled map, with debug visualization.
//!
//! This example demonstrates:
//! - Building a static body from the collision shapes of a tile layer
//! - Building bodies for objects that opt in through custom properties
//! - Describing an extra body by hand with the shape helpers
//!
//! Colliders are shown with Avian's debug gizmos.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy_tiledmap_ext_avian::prelude::*;
use bevy_tiledmap_ext_core::prelude::*;
use tiled::LayerType;

const MAP_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/assets/physics.tmx");

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(ImagePlugin::default_nearest()))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins(PhysicsDebugPlugin)
        .add_plugins(TiledmapExtCorePlugin)
        .add_plugins(TiledmapExtAvianPlugin::new(
            PhysicsConfig::default().with_default_friction(0.4),
        ))
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands, config: Res<PhysicsConfig>) {
    commands.spawn((Camera2d, Transform::from_xyz(32.0, 32.0, 1000.0)));

    let map = match tiled::Loader::new().load_tmx_map(MAP_PATH) {
        Ok(map) => map,
        Err(e) => {
            error!("Failed to load {MAP_PATH}: {e}");
            return;
        }
    };
    let geometry = MapGeometry::from_map(&map);

    for layer in map.layers() {
        if let LayerType::Tiles(tiles) = layer.layer_type()
            && let Some(body) = tile_layer_body(&tiles, &geometry, &config)
        {
            info!("Layer {}: {} tile fixtures", layer.name, body.fixtures.len());
            commands.spawn_body(body);
        }
    }

    let height = map.total_height() as f32;
    for object in map.objects() {
        if let Some(body) = object_body(&object, height, &config) {
            info!("Object {}: {:?} body", object.name, body.body_type);
            commands.spawn_body(body);
        }
    }

    // A bouncing ball dropped above the map
    commands.spawn_body(
        BodyDefinition::new(BodyType::Dynamic)
            .at(Vec2::new(20.0, 120.0))
            .circle(6.0, |fixture| fixture.with_restitution(0.8)),
    );
}
