//! Reads layer properties, cells and objects from the test level and logs them.
//!
//! Run with: `cargo run -p bevy_tiledmap_ext_core --example layer_properties`

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_tiledmap_ext_core::prelude::*;
use tiled::LayerType;

const LEVEL: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/assets/level.tmx");

fn main() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default(), TiledmapExtCorePlugin))
        .add_systems(Startup, describe_level);

    // A single frame is enough: everything happens at startup
    app.update();
}

fn describe_level() {
    let map = match tiled::Loader::new().load_tmx_map(LEVEL) {
        Ok(map) => map,
        Err(e) => {
            error!("Could not load {LEVEL}: {e}");
            return;
        }
    };

    info!(
        "Map is {}x{} px with {} top-level layers, gravity {}",
        map.total_width(),
        map.total_height(),
        map.layer_count(),
        map.property_or("gravity", 10.0_f32)
    );

    for layer in map.layers() {
        let active = layer.property_or("active", false);
        info!("Layer '{}' active: {}", layer.name, active);

        if let LayerType::Tiles(tiles) = layer.layer_type() {
            tiles.for_each_cell(|tile, x, y| {
                info!("  tile {} at ({}, {})", tile.id(), x, y);
            });
        }
    }

    match map.layer_by_name("ground").and_then(|l| l.property::<String>("music")) {
        Ok(music) => info!("Ground music: {music}"),
        Err(e) => warn!("{e}"),
    }

    map.for_each_object(|object, layer| {
        info!(
            "Object '{}' in '{}' at {:?}",
            object.name,
            layer.name,
            object.world_position(map.total_height() as f32)
        );
    });
}
