//! Owned tile grid component.
//!
//! `tiled` tile layers borrow from their map and cannot be edited. `TileLayerData` is the
//! owned counterpart: build it once from a layer, then attach it to an entity or edit it.

use bevy::prelude::*;

/// Tile grid attached to tile layer entities.
///
/// # Example
///
/// ```rust
/// use bevy_tiledmap_ext_core::prelude::*;
///
/// let mut grid = TileLayerData::empty(2, 2);
/// grid.set(1, 1, Some(TileInstance::new(0, 5)));
///
/// grid.for_each_cell(|tile, x, y| {
///     assert_eq!((x, y, tile.tile_id), (1, 1, 5));
/// });
/// ```
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct TileLayerData {
    /// Layer width in tiles
    pub width: u32,

    /// Layer height in tiles
    pub height: u32,

    /// Flattened grid of tiles: index = y * width + x, `None` = empty
    pub tiles: Vec<Option<TileInstance>>,
}

impl TileLayerData {
    /// Create an empty tile layer with the given dimensions.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![None; (width as usize).saturating_mul(height as usize)],
        }
    }

    /// Copy the tiles of a finite layer.
    pub fn from_tile_layer(layer: &tiled::FiniteTileLayer) -> Self {
        let mut data = Self::empty(layer.width(), layer.height());
        for y in 0..data.height {
            for x in 0..data.width {
                let tile = layer
                    .get_tile(x as i32, y as i32)
                    .map(|tile| TileInstance {
                        tileset_index: tile.tileset_index(),
                        tile_id: tile.id(),
                        flipped_h: tile.flip_h,
                        flipped_v: tile.flip_v,
                        flipped_d: tile.flip_d,
                    });
                data.set(x, y, tile);
            }
        }
        data
    }

    /// Get tile at position (returns None if out of bounds or empty).
    pub fn get(&self, x: u32, y: u32) -> Option<&TileInstance> {
        self.tiles.get(self.index(x, y)?)?.as_ref()
    }

    /// Set tile at position. Out of bounds positions are ignored.
    pub fn set(&mut self, x: u32, y: u32, tile: Option<TileInstance>) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        if let Some(slot) = self.tiles.get_mut(index) {
            *slot = tile;
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.tiles.iter().flatten().count()
    }
}

/// A single placed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct TileInstance {
    /// Index of the tileset in the map's tileset list
    pub tileset_index: usize,

    /// Local tile ID within the tileset (0-based)
    pub tile_id: u32,

    /// Horizontal flip flag
    pub flipped_h: bool,

    /// Vertical flip flag
    pub flipped_v: bool,

    /// Diagonal flip flag
    pub flipped_d: bool,
}

impl TileInstance {
    /// Unflipped tile.
    pub fn new(tileset_index: usize, tile_id: u32) -> Self {
        Self {
            tileset_index,
            tile_id,
            flipped_h: false,
            flipped_v: false,
            flipped_d: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut grid = TileLayerData::empty(3, 2);
        grid.set(2, 1, Some(TileInstance::new(0, 7)));

        assert_eq!(grid.get(2, 1).map(|t| t.tile_id), Some(7));
        assert!(grid.get(0, 0).is_none());
        assert_eq!(grid.tiles[5].map(|t| t.tile_id), Some(7));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut grid = TileLayerData::empty(2, 2);
        grid.set(2, 0, Some(TileInstance::new(0, 1)));
        grid.set(0, 9, Some(TileInstance::new(0, 1)));

        assert_eq!(grid.occupied(), 0);
        assert!(grid.get(2, 0).is_none());
    }

    #[test]
    fn test_large_grid_index_does_not_wrap() {
        // Only the shape matters here, the tile storage is left short
        let mut grid = TileLayerData {
            width: 100_000,
            height: 100_000,
            tiles: vec![None; 4],
        };

        assert_eq!(grid.index(1, 50_000), Some(5_000_000_001));
        grid.set(1, 50_000, Some(TileInstance::new(0, 3)));
        assert!(grid.get(1, 50_000).is_none());
        assert_eq!(grid.occupied(), 0);
    }
}
