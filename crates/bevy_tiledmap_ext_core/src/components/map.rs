//! Map level components.

use bevy::prelude::*;

/// Ordered list of layer entities belonging to a map entity.
///
/// Unlike `tiled::Map`, whose layer list is fixed once parsed, this list is edited at
/// runtime as layers are spawned or despawned.
#[derive(Component, Default, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct LayersInMap(pub Vec<Entity>);

impl LayersInMap {
    /// Append a layer entity.
    pub fn push(&mut self, layer: Entity) {
        self.0.push(layer);
    }

    /// Remove the layer at `index`, returning it. `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Entity> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Remove a layer entity wherever it is. Returns whether it was present.
    pub fn remove_entity(&mut self, layer: Entity) -> bool {
        let Some(index) = self.0.iter().position(|e| *e == layer) else {
            return false;
        };
        self.0.remove(index);
        true
    }

    /// Layer entities in map order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.0.iter().copied()
    }
}

/// World-space geometry information for a Tiled map.
///
/// # Coordinate System
///
/// - Origin (0, 0) is at the bottom-left corner of the map
/// - X increases rightward
/// - Y increases upward (Bevy convention), while Tiled tile rows count downward
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MapGeometry {
    /// Map dimensions in tiles
    pub size: UVec2,
    /// Tile dimensions in pixels/world units
    pub tile_size: Vec2,
    /// World-space bounding rectangle, `min` at (0, 0).
    pub bounds: Rect,
}

impl MapGeometry {
    /// Create a new `MapGeometry` from map dimensions.
    pub fn new(width: u32, height: u32, tile_width: f32, tile_height: f32) -> Self {
        Self {
            size: UVec2::new(width, height),
            tile_size: Vec2::new(tile_width, tile_height),
            bounds: Rect {
                min: Vec2::ZERO,
                max: Vec2::new(width as f32 * tile_width, height as f32 * tile_height),
            },
        }
    }

    /// Geometry of a parsed map.
    pub fn from_map(map: &tiled::Map) -> Self {
        Self::new(
            map.width,
            map.height,
            map.tile_width as f32,
            map.tile_height as f32,
        )
    }

    /// Convert a tile grid coordinate (y=0 is the top row) to the world-space tile centre.
    ///
    /// Returns `None` if the tile coordinate is out of bounds.
    pub fn tile_to_world(&self, tile_x: u32, tile_y: u32) -> Option<Vec2> {
        if tile_x >= self.size.x || tile_y >= self.size.y {
            return None;
        }
        let flipped_y = self.size.y - 1 - tile_y;
        Some(Vec2::new(
            (tile_x as f32 + 0.5) * self.tile_size.x,
            (flipped_y as f32 + 0.5) * self.tile_size.y,
        ))
    }

    /// Convert a world-space position to a tile grid coordinate (y=0 is the top row).
    ///
    /// Returns `None` if the position is outside the map bounds.
    pub fn world_to_tile(&self, world_pos: Vec2) -> Option<UVec2> {
        if !self.bounds.contains(world_pos) {
            return None;
        }
        let tile_x = (world_pos.x / self.tile_size.x) as u32;
        let bevy_tile_y = (world_pos.y / self.tile_size.y) as u32;
        let tile_y = self.size.y.saturating_sub(1).saturating_sub(bevy_tile_y);
        Some(UVec2::new(
            tile_x.min(self.size.x.saturating_sub(1)),
            tile_y.min(self.size.y.saturating_sub(1)),
        ))
    }

    /// World-space rectangle covered by a tile (y=0 is the top row).
    pub fn tile_rect(&self, tile_x: u32, tile_y: u32) -> Option<Rect> {
        if tile_x >= self.size.x || tile_y >= self.size.y {
            return None;
        }
        let flipped_y = self.size.y - 1 - tile_y;
        let min = Vec2::new(
            tile_x as f32 * self.tile_size.x,
            flipped_y as f32 * self.tile_size.y,
        );
        Some(Rect {
            min,
            max: min + self.tile_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_in_map_push_and_remove() {
        let mut layers = LayersInMap::default();
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();

        layers.push(a);
        layers.push(b);
        assert_eq!(layers.iter().collect::<Vec<_>>(), vec![a, b]);

        assert_eq!(layers.remove(0), Some(a));
        assert_eq!(layers.remove(5), None);
        assert!(layers.remove_entity(b));
        assert!(!layers.remove_entity(b));
        assert!(layers.0.is_empty());
    }

    #[test]
    fn test_tile_world_round_trip_flips_y() {
        let geometry = MapGeometry::new(4, 3, 16.0, 16.0);
        // Top-left tile sits in the top row of world space
        assert_eq!(geometry.tile_to_world(0, 0), Some(Vec2::new(8.0, 40.0)));
        assert_eq!(geometry.world_to_tile(Vec2::new(8.0, 40.0)), Some(UVec2::new(0, 0)));
        assert_eq!(geometry.tile_to_world(4, 0), None);
        assert_eq!(geometry.world_to_tile(Vec2::new(-1.0, 0.0)), None);
    }

    #[test]
    fn test_tile_rect() {
        let geometry = MapGeometry::new(2, 2, 32.0, 32.0);
        let rect = geometry.tile_rect(1, 1).unwrap();
        assert_eq!(rect.min, Vec2::new(32.0, 0.0));
        assert_eq!(rect.max, Vec2::new(64.0, 32.0));
        assert!(geometry.tile_rect(2, 0).is_none());
    }
}
