//! Layer collection queries.

use tiled::{Layer, LayerType};

use crate::components::LayersInMap;
use crate::error::PropertyError;

/// A collection of map layers.
///
/// Implemented for the top-level layers of a `tiled::Map`, the children of a
/// `tiled::GroupLayer`, and the runtime [`LayersInMap`] list.
pub trait LayerCollection {
    /// Number of layers directly in this collection.
    fn layer_count(&self) -> usize;

    /// `true` if and only if the collection holds no layers.
    fn is_empty(&self) -> bool {
        self.layer_count() == 0
    }

    /// `true` if and only if the collection holds at least one layer.
    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }
}

impl LayerCollection for tiled::Map {
    fn layer_count(&self) -> usize {
        self.layers().count()
    }

    fn is_empty(&self) -> bool {
        self.layers().next().is_none()
    }
}

impl LayerCollection for tiled::GroupLayer<'_> {
    fn layer_count(&self) -> usize {
        self.layers().count()
    }

    fn is_empty(&self) -> bool {
        self.layers().next().is_none()
    }
}

impl LayerCollection for LayersInMap {
    fn layer_count(&self) -> usize {
        self.0.len()
    }
}

/// Name based layer lookup on a parsed map.
///
/// Only top-level layers are searched; layers nested in groups are reached through
/// their group.
pub trait MapLayersExt {
    /// First top-level layer called `name`, if any.
    fn find_layer(&self, name: &str) -> Option<Layer<'_>>;

    /// First top-level layer called `name`.
    ///
    /// # Errors
    ///
    /// [`PropertyError::MissingLayer`] if no layer has that name.
    fn layer_by_name(&self, name: &str) -> Result<Layer<'_>, PropertyError> {
        self.find_layer(name)
            .ok_or_else(|| PropertyError::MissingLayer {
                name: name.to_string(),
            })
    }

    /// Whether a top-level layer called `name` exists.
    fn contains_layer(&self, name: &str) -> bool {
        self.find_layer(name).is_some()
    }
}

impl MapLayersExt for tiled::Map {
    fn find_layer(&self, name: &str) -> Option<Layer<'_>> {
        self.layers().find(|layer| layer.name == name)
    }
}

/// Short name of a layer's kind, for log messages.
pub fn layer_kind(layer: &Layer) -> &'static str {
    match layer.layer_type() {
        LayerType::Tiles(_) => "tile",
        LayerType::Objects(_) => "object",
        LayerType::Image(_) => "image",
        LayerType::Group(_) => "group",
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::*;

    #[test]
    fn test_new_list_is_empty() {
        let layers = LayersInMap::default();
        assert!(layers.is_empty());
        assert!(!layers.is_not_empty());
    }

    #[test]
    fn test_list_with_layer_is_not_empty() {
        let mut world = World::new();
        let mut layers = LayersInMap::default();
        layers.push(world.spawn_empty().id());

        assert!(!layers.is_empty());
        assert!(layers.is_not_empty());
        assert_eq!(layers.layer_count(), 1);
    }

    #[test]
    fn test_list_becomes_empty_after_removal() {
        let mut world = World::new();
        let mut layers = LayersInMap::default();
        layers.push(world.spawn_empty().id());
        layers.remove(0);

        assert!(layers.is_empty());
        assert!(!layers.is_not_empty());
    }
}
