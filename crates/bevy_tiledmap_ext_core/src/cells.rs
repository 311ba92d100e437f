//! Cell iteration over tile grids.
//!
//! Every grid is walked the same way: rows top to bottom, and within a row left to
//! right. Empty positions are skipped.

use bevy::prelude::*;
use tiled::{ChunkData, FiniteTileLayer, InfiniteTileLayer, LayerTile, TileLayer};

use crate::components::{TileInstance, TileLayerData};

/// A rectangular grid whose positions optionally hold a cell.
pub trait CellGrid {
    /// What a non-empty position holds.
    type Cell;

    /// Coordinate of the top-left position. Zero except for infinite layers.
    fn grid_origin(&self) -> IVec2 {
        IVec2::ZERO
    }

    /// Width in cells.
    fn grid_width(&self) -> u32;

    /// Height in cells.
    fn grid_height(&self) -> u32;

    /// Cell at a position, `None` if empty or outside the grid.
    fn cell(&self, x: i32, y: i32) -> Option<Self::Cell>;

    /// Every present cell with its coordinates, in row-major order.
    fn cells(&self) -> impl Iterator<Item = (i32, i32, Self::Cell)> + '_ {
        let origin = self.grid_origin();
        let width = self.grid_width() as i32;
        let height = self.grid_height() as i32;
        (0..height)
            .flat_map(move |dy| (0..width).map(move |dx| (origin.x + dx, origin.y + dy)))
            .filter_map(move |(x, y)| self.cell(x, y).map(|cell| (x, y, cell)))
    }

    /// Run `action` for every present cell, passing the cell and its coordinates.
    fn for_each_cell<F>(&self, mut action: F)
    where
        F: FnMut(Self::Cell, i32, i32),
    {
        for (x, y, cell) in self.cells() {
            action(cell, x, y);
        }
    }
}

impl<'map> CellGrid for FiniteTileLayer<'map> {
    type Cell = LayerTile<'map>;

    fn grid_width(&self) -> u32 {
        self.width()
    }

    fn grid_height(&self) -> u32 {
        self.height()
    }

    fn cell(&self, x: i32, y: i32) -> Option<LayerTile<'map>> {
        self.get_tile(x, y)
    }
}

/// Tile-space bounds of all chunks as `(min, max_exclusive)`.
fn chunk_bounds(layer: &InfiniteTileLayer) -> Option<(IVec2, IVec2)> {
    let chunk_size = IVec2::new(ChunkData::WIDTH as i32, ChunkData::HEIGHT as i32);
    layer
        .chunks()
        .map(|((cx, cy), _)| IVec2::new(cx, cy) * chunk_size)
        .fold(None, |bounds, min| {
            let max = min + chunk_size;
            Some(match bounds {
                None => (min, max),
                Some((lo, hi)) => (lo.min(min), hi.max(max)),
            })
        })
}

impl<'map> CellGrid for InfiniteTileLayer<'map> {
    type Cell = LayerTile<'map>;

    fn grid_origin(&self) -> IVec2 {
        chunk_bounds(self).map_or(IVec2::ZERO, |(min, _)| min)
    }

    fn grid_width(&self) -> u32 {
        chunk_bounds(self).map_or(0, |(min, max)| (max.x - min.x) as u32)
    }

    fn grid_height(&self) -> u32 {
        chunk_bounds(self).map_or(0, |(min, max)| (max.y - min.y) as u32)
    }

    fn cell(&self, x: i32, y: i32) -> Option<LayerTile<'map>> {
        self.get_tile(x, y)
    }
}

impl<'map> CellGrid for TileLayer<'map> {
    type Cell = LayerTile<'map>;

    fn grid_origin(&self) -> IVec2 {
        match self {
            TileLayer::Finite(layer) => layer.grid_origin(),
            TileLayer::Infinite(layer) => layer.grid_origin(),
        }
    }

    fn grid_width(&self) -> u32 {
        match self {
            TileLayer::Finite(layer) => layer.grid_width(),
            TileLayer::Infinite(layer) => layer.grid_width(),
        }
    }

    fn grid_height(&self) -> u32 {
        match self {
            TileLayer::Finite(layer) => layer.grid_height(),
            TileLayer::Infinite(layer) => layer.grid_height(),
        }
    }

    fn cell(&self, x: i32, y: i32) -> Option<LayerTile<'map>> {
        self.get_tile(x, y)
    }
}

impl CellGrid for TileLayerData {
    type Cell = TileInstance;

    fn grid_width(&self) -> u32 {
        self.width
    }

    fn grid_height(&self) -> u32 {
        self.height
    }

    fn cell(&self, x: i32, y: i32) -> Option<TileInstance> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.get(x, y).copied()
    }
}
