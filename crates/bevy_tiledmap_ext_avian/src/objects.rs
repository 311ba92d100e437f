//! Bodies built from Tiled objects and tile layers.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy_tiledmap_ext_core::prelude::*;
use tiled::{LayerTile, Object, ObjectData, ObjectTile, Properties, TileData};

use crate::body::{BodyDefinition, FixtureDefinition};
use crate::config::PhysicsConfig;
use crate::properties::{BodyType, PHYSICS_SETTINGS_PROPERTY, PhysicsSettings};
use crate::shapes;

/// Whether an element asks for a physics body.
///
/// Opt in with a `physics` bool property, or by setting `body_type` or
/// `physics_settings`.
pub fn wants_physics<O: PropertyOwner + ?Sized>(owner: &O) -> bool {
    owner.property_or("physics", false)
        || owner.contains_property("body_type")
        || owner.contains_property(PHYSICS_SETTINGS_PROPERTY)
}

/// Body for an object that opted into physics.
///
/// The body sits at the object's origin in Bevy space and carries one fixture shaped like
/// the object. Returns `None` for objects without physics properties and for text objects.
///
/// Tile objects are anchored at their bottom-left corner and use the collision shapes of
/// their tileset tile, or a rectangle covering the object when the tile has none. Their
/// properties are layered: tile, then its first collision shape, then the object itself.
pub fn object_body(
    object: &Object<'_>,
    map_pixel_height: f32,
    config: &PhysicsConfig,
) -> Option<BodyDefinition> {
    if let Some(layer_tile) = object.get_tile() {
        return tile_object_body(object, &layer_tile, map_pixel_height, config);
    }

    let data: &ObjectData = object;
    if !wants_physics(data) {
        return None;
    }

    let Some(collider) = shapes::object_to_collider(&data.shape) else {
        warn!(
            "Object {} has physics properties but a shape without collider, skipping",
            data.id()
        );
        return None;
    };

    let settings = PhysicsSettings::from_owner(data, config);
    let fixture = FixtureDefinition::from_settings(collider, &settings, config)
        .with_offset(shapes::anchor_offset(&data.shape));

    Some(
        BodyDefinition::from_settings(&settings)
            .at(data.world_position(map_pixel_height))
            .with_rotation(-data.rotation.to_radians())
            .with_fixture(fixture),
    )
}

fn tile_object_body(
    object: &ObjectData,
    layer_tile: &ObjectTile<'_>,
    map_pixel_height: f32,
    config: &PhysicsConfig,
) -> Option<BodyDefinition> {
    let tile = layer_tile.get_tile();
    let properties = tile_object_properties(object, tile.as_deref());
    if !wants_physics(&properties) {
        return None;
    }

    let size = object.size();
    let tileset = layer_tile.get_tileset();
    let tile_size = Vec2::new(tileset.tile_width as f32, tileset.tile_height as f32);

    let mut collision_shapes = tile
        .as_deref()
        .map(|tile| shapes::tile_collision_shapes(tile, tile_size))
        .unwrap_or_default();
    if collision_shapes.is_empty() {
        collision_shapes.push((Vec2::ZERO, 0.0, Collider::rectangle(size.x, size.y)));
    }

    let settings = PhysicsSettings::from_owner(&properties, config);
    // Bottom-left anchor to object centre
    let center = size / 2.0;

    let mut body = BodyDefinition::from_settings(&settings)
        .at(object.world_position(map_pixel_height))
        .with_rotation(-object.rotation.to_radians());
    for (offset, rotation, collider) in collision_shapes {
        body = body.with_fixture(
            FixtureDefinition::from_settings(collider, &settings, config)
                .with_offset(center + offset)
                .with_rotation(rotation),
        );
    }
    Some(body)
}

/// Properties of a tile object, later sources overriding earlier ones.
fn tile_object_properties(object: &ObjectData, tile: Option<&TileData>) -> Properties {
    let mut merged = Properties::new();
    if let Some(tile) = tile {
        merged.extend(tile.properties.clone());
        if let Some(shape) = tile.collision.as_ref().and_then(|group| group.object_data().first()) {
            merged.extend(shape.properties.clone());
        }
    }
    merged.extend(object.properties.clone());
    merged
}

/// One static body holding a fixture for every collision shape of every tile in a layer.
///
/// Fixtures are placed at the centres of their cells. Returns `None` when no tile of the
/// layer has collision shapes.
pub fn tile_layer_body<'map, G>(
    layer: &G,
    geometry: &MapGeometry,
    config: &PhysicsConfig,
) -> Option<BodyDefinition>
where
    G: CellGrid<Cell = LayerTile<'map>>,
{
    let mut body = BodyDefinition::new(BodyType::Static);

    layer.for_each_cell(|cell, x, y| {
        let (Ok(tile_x), Ok(tile_y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        let Some(center) = geometry.tile_to_world(tile_x, tile_y) else {
            return;
        };
        let Some(tile) = cell.get_tile() else {
            return;
        };

        let tileset = cell.get_tileset();
        let tile_size = Vec2::new(tileset.tile_width as f32, tileset.tile_height as f32);
        let settings = PhysicsSettings::from_owner(&*tile, config);

        for (offset, rotation, collider) in shapes::tile_collision_shapes(&tile, tile_size) {
            body.fixtures.push(
                FixtureDefinition::from_settings(collider, &settings, config)
                    .with_offset(center + offset)
                    .with_rotation(rotation),
            );
        }
    });

    if body.fixtures.is_empty() {
        return None;
    }
    Some(body)
}
