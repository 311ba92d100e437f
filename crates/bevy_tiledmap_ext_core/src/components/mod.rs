//! Components for map entities.

pub mod map;
pub mod tile;

pub use map::{LayersInMap, MapGeometry};
pub use tile::{TileInstance, TileLayerData};
