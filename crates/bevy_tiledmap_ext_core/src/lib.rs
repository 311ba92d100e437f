//! # `bevy_tiledmap_ext_core`
//!
//! Extension traits that make the [`tiled`] object model shorter to call from game code.
//!
//! - [`properties`]: typed custom property lookup on maps, layers, objects and tiles
//! - [`layers`]: emptiness checks and name lookup for layer collections
//! - [`cells`]: row-major iteration over the non-empty cells of a tile grid
//! - [`map`]: pixel size and object traversal for whole maps
//! - [`objects`]: object geometry in Tiled and Bevy space
//!
//! Nothing here owns map data. Apart from the small components in [`components`], every
//! operation reads straight through to the value `tiled` already parsed.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bevy_tiledmap_ext_core::prelude::*;
//!
//! fn load() -> Result<(), Box<dyn std::error::Error>> {
//!     let map = tiled::Loader::new().load_tmx_map("assets/maps/level1.tmx")?;
//!
//!     if map.is_empty() {
//!         return Ok(());
//!     }
//!
//!     let ground = map.layer_by_name("ground")?;
//!     let solid: bool = ground.property("solid")?;
//!
//!     if let Some(tiles) = ground.as_tile_layer() {
//!         tiles.for_each_cell(|tile, x, y| {
//!             bevy::log::info!("tile {} at ({x}, {y}), solid: {solid}", tile.id());
//!         });
//!     }
//!     Ok(())
//! }
//! ```

pub mod cells;
pub mod components;
pub mod error;
pub mod layers;
pub mod map;
pub mod objects;
pub mod plugin;
pub mod properties;

pub mod prelude {
    //! Common imports for `bevy_tiledmap_ext_core` users.

    pub use crate::cells::CellGrid;
    pub use crate::components::{LayersInMap, MapGeometry, TileInstance, TileLayerData};
    pub use crate::error::PropertyError;
    pub use crate::layers::{LayerCollection, MapLayersExt};
    pub use crate::map::TiledMapExt;
    pub use crate::objects::TiledObjectExt;
    pub use crate::plugin::TiledmapExtCorePlugin;
    pub use crate::properties::{FromTiledProperty, PropertyOwner, PropertyOwnerExt};
}

pub use error::PropertyError;
pub use plugin::TiledmapExtCorePlugin;
