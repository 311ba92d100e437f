//! Plugin for `bevy_tiledmap_ext_core`.

use bevy::prelude::*;

use crate::components::{LayersInMap, MapGeometry, TileInstance, TileLayerData};

/// Registers the components of this crate with the type registry.
///
/// The extension traits work without it; add it when the components are inspected or
/// serialized through reflection.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_tiledmap_ext_core::TiledmapExtCorePlugin;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(TiledmapExtCorePlugin)
///     .run();
/// ```
#[derive(Default)]
pub struct TiledmapExtCorePlugin;

impl Plugin for TiledmapExtCorePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<LayersInMap>()
            .register_type::<MapGeometry>()
            .register_type::<TileLayerData>()
            .register_type::<TileInstance>();

        debug!("TiledmapExtCorePlugin initialized");
    }
}
