//! Whole-map helpers.

use bevy::prelude::*;
use tiled::{Layer, LayerType, Object};

use crate::layers::layer_kind;

/// Extensions on a parsed `tiled::Map`.
pub trait TiledMapExt {
    /// Map width in pixels (`width * tile_width`).
    fn total_width(&self) -> u32;

    /// Map height in pixels (`height * tile_height`).
    fn total_height(&self) -> u32;

    /// Run `action` for every object of every object layer, descending into groups.
    ///
    /// Layers are visited in map order, depth first. The action also receives the
    /// object layer holding the object.
    fn for_each_object<'map, F>(&'map self, action: F)
    where
        F: FnMut(Object<'map>, &Layer<'map>);

    /// All objects, in the order [`TiledMapExt::for_each_object`] visits them.
    fn objects(&self) -> Vec<Object<'_>> {
        let mut objects = Vec::new();
        self.for_each_object(|object, _| objects.push(object));
        objects
    }
}

impl TiledMapExt for tiled::Map {
    fn total_width(&self) -> u32 {
        self.width * self.tile_width
    }

    fn total_height(&self) -> u32 {
        self.height * self.tile_height
    }

    fn for_each_object<'map, F>(&'map self, mut action: F)
    where
        F: FnMut(Object<'map>, &Layer<'map>),
    {
        for layer in self.layers() {
            visit_objects(layer, &mut action);
        }
    }
}

fn visit_objects<'map, F>(layer: Layer<'map>, action: &mut F)
where
    F: FnMut(Object<'map>, &Layer<'map>),
{
    match layer.layer_type() {
        LayerType::Objects(object_layer) => {
            for object in object_layer.objects() {
                action(object, &layer);
            }
        }
        LayerType::Group(group) => {
            for child in group.layers() {
                visit_objects(child, action);
            }
        }
        LayerType::Tiles(_) | LayerType::Image(_) => {
            trace!(
                "Skipping {} layer '{}' while collecting objects",
                layer_kind(&layer),
                layer.name
            );
        }
    }
}
