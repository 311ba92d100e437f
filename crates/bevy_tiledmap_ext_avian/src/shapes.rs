//! Shape conversion from Tiled geometry to `Avian2D` colliders.
//!
//! Tiled is y-down with shapes anchored at their top-left corner. Avian colliders are
//! centred on their entity and y-up, so every conversion flips y and, where needed,
//! returns the offset from the anchor to the collider centre.

use avian2d::prelude::*;
use bevy::prelude::*;
use tiled::ObjectShape;

/// Radius of the collider generated for point objects.
pub const POINT_RADIUS: f32 = 1.0;

/// Convert a Tiled object shape to a collider centred on the shape.
///
/// # Supported Shapes
///
/// | Tiled Shape | Avian Collider |
/// |-------------|----------------|
/// | Rectangle | `Collider::rectangle(width, height)` |
/// | Ellipse | `Collider::circle` or `Collider::ellipse` |
/// | Polygon | `Collider::convex_hull` if convex, `Collider::convex_decomposition` if concave |
/// | Polyline | `Collider::polyline(vertices, None)` |
/// | Point | `Collider::circle(POINT_RADIUS)` |
/// | Text | `None` |
///
/// Polygon and polyline vertices stay relative to the object origin, so those colliders
/// are centred on the origin rather than on the shape. Polygons with fewer than 3 points
/// and polylines with fewer than 2 yield `None`.
pub fn object_to_collider(shape: &ObjectShape) -> Option<Collider> {
    match shape {
        ObjectShape::Rect { width, height } => Some(Collider::rectangle(*width, *height)),

        ObjectShape::Ellipse { width, height } => {
            if (width - height).abs() < f32::EPSILON {
                Some(Collider::circle(width / 2.0))
            } else {
                Some(Collider::ellipse(width / 2.0, height / 2.0))
            }
        }

        ObjectShape::Polygon { points } => polygon_collider(flip_points(points)),

        ObjectShape::Polyline { points } => polyline_collider(flip_points(points), false),

        ObjectShape::Point(_, _) => Some(Collider::circle(POINT_RADIUS)),

        ObjectShape::Text { .. } => None,
    }
}

/// Offset from a shape's Tiled anchor to its collider centre, in y-up space.
///
/// Rectangles and ellipses are anchored at their top-left corner; every other shape is
/// already centred on its anchor.
pub fn anchor_offset(shape: &ObjectShape) -> Vec2 {
    match shape {
        ObjectShape::Rect { width, height } | ObjectShape::Ellipse { width, height } => {
            Vec2::new(width / 2.0, -height / 2.0)
        }
        _ => Vec2::ZERO,
    }
}

fn flip_points(points: &[(f32, f32)]) -> Vec<Vec2> {
    points.iter().map(|(x, y)| Vec2::new(*x, -*y)).collect()
}

/// Collider for a closed polygon.
///
/// Convex outlines become a convex hull and concave ones are decomposed into convex
/// parts. Returns `None` with fewer than 3 vertices.
pub fn polygon_collider(vertices: Vec<Vec2>) -> Option<Collider> {
    if vertices.len() < 3 {
        warn!(
            "Polygon has {} vertices, at least 3 are needed for a collider",
            vertices.len()
        );
        return None;
    }

    if !is_convex(&vertices) {
        let count = vertices.len() as u32;
        let indices = (0..count).map(|i| [i, (i + 1) % count]).collect();
        return Some(Collider::convex_decomposition(vertices, indices));
    }

    match Collider::convex_hull(vertices.clone()) {
        Some(collider) => Some(collider),
        None => {
            warn!("Polygon has no area, using its outline as collider");
            polyline_collider(vertices, true)
        }
    }
}

/// Collider made of segments through `vertices`, wrapping back to the first one if
/// `closed`. Returns `None` with fewer than 2 vertices.
pub fn polyline_collider(vertices: Vec<Vec2>, closed: bool) -> Option<Collider> {
    if vertices.len() < 2 {
        warn!(
            "Polyline has {} vertices, at least 2 are needed for a collider",
            vertices.len()
        );
        return None;
    }

    let count = vertices.len() as u32;
    let indices = (closed && count > 2).then(|| (0..count).map(|i| [i, (i + 1) % count]).collect());
    Some(Collider::polyline(vertices, indices))
}

/// Whether every turn of the outline goes the same way. Collinear runs are ignored.
fn is_convex(vertices: &[Vec2]) -> bool {
    let count = vertices.len();
    let mut sign = 0.0_f32;
    for i in 0..count {
        let a = vertices[i];
        let b = vertices[(i + 1) % count];
        let c = vertices[(i + 2) % count];
        let cross = (b - a).perp_dot(c - b);
        if cross.abs() <= f32::EPSILON {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

/// Collision shapes defined on a tileset tile, as `(offset, rotation, collider)`.
///
/// Offsets are relative to the tile centre so the shapes can be placed at the centre of
/// the cell holding the tile. Text objects are skipped.
pub fn tile_collision_shapes(tile: &tiled::TileData, tile_size: Vec2) -> Vec<(Vec2, f32, Collider)> {
    let Some(collision_group) = tile.collision.as_ref() else {
        return Vec::new();
    };

    let tile_center = tile_size / 2.0;

    collision_group
        .object_data()
        .iter()
        .filter_map(|object| {
            let collider = object_to_collider(&object.shape)?;
            let anchor = Vec2::new(object.x - tile_center.x, -(object.y - tile_center.y));
            let rotation = -object.rotation.to_radians();
            let offset = anchor + Vec2::from_angle(rotation).rotate(anchor_offset(&object.shape));
            Some((offset, rotation, collider))
        })
        .collect()
}

/// All collision shapes of a tile merged into one collider.
///
/// Returns `None` when the tile has no collision shapes. A single shape sitting at the
/// tile centre is returned as is; anything else becomes a compound.
pub fn tile_collider(tile: &tiled::TileData, tile_size: Vec2) -> Option<Collider> {
    let mut shapes = tile_collision_shapes(tile, tile_size);
    match shapes.len() {
        0 => None,
        1 => {
            let (offset, rotation, collider) = shapes.pop()?;
            // A compound can't be nested in another compound, so avoid one when possible
            if offset.length_squared() < 0.01 && rotation.abs() < 0.01 {
                Some(collider)
            } else {
                Some(Collider::compound(vec![(offset, rotation, collider)]))
            }
        }
        _ => Some(Collider::compound(shapes)),
    }
}
