//! Object geometry helpers.

use bevy::prelude::*;
use tiled::ObjectShape;

/// Geometry accessors on Tiled objects.
///
/// Tiled stores object positions in map pixels with y pointing down. Methods returning
/// Bevy-space values say so; the rest stay in Tiled's pixel space.
pub trait TiledObjectExt {
    /// Size of a rectangle or ellipse. Zero for every other shape.
    fn size(&self) -> Vec2;

    /// Width of a rectangle or ellipse, zero otherwise.
    fn width(&self) -> f32 {
        self.size().x
    }

    /// Height of a rectangle or ellipse, zero otherwise.
    fn height(&self) -> f32 {
        self.size().y
    }

    /// Polygon or polyline points relative to the object origin, flipped to Bevy's y-up.
    ///
    /// Empty for every other shape.
    fn vertices(&self) -> Vec<Vec2>;

    /// Axis-aligned rectangle in map pixels for rectangles and ellipses. Rotation is ignored.
    fn bounds(&self) -> Option<Rect>;

    /// Object origin in Bevy space for a map `map_pixel_height` pixels tall.
    fn world_position(&self, map_pixel_height: f32) -> Vec2;

    /// Whether the object is a point marker.
    fn is_point(&self) -> bool;
}

impl TiledObjectExt for tiled::ObjectData {
    fn size(&self) -> Vec2 {
        match self.shape {
            ObjectShape::Rect { width, height } | ObjectShape::Ellipse { width, height } => {
                Vec2::new(width, height)
            }
            _ => Vec2::ZERO,
        }
    }

    fn vertices(&self) -> Vec<Vec2> {
        match &self.shape {
            ObjectShape::Polygon { points } | ObjectShape::Polyline { points } => {
                points.iter().map(|(x, y)| Vec2::new(*x, -*y)).collect()
            }
            _ => Vec::new(),
        }
    }

    fn bounds(&self) -> Option<Rect> {
        match self.shape {
            ObjectShape::Rect { width, height } | ObjectShape::Ellipse { width, height } => {
                Some(Rect::new(self.x, self.y, self.x + width, self.y + height))
            }
            _ => None,
        }
    }

    fn world_position(&self, map_pixel_height: f32) -> Vec2 {
        Vec2::new(self.x, map_pixel_height - self.y)
    }

    fn is_point(&self) -> bool {
        matches!(self.shape, ObjectShape::Point(..))
    }
}
