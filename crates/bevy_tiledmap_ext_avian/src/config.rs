//! Global physics configuration and defaults.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::properties::BodyType;

/// Global physics configuration resource.
///
/// Supplies the values used when a Tiled element does not set a physics property itself.
///
/// # Example
///
/// ```rust,ignore
/// use bevy::prelude::*;
/// use bevy_tiledmap_ext_avian::{PhysicsConfig, TiledmapExtAvianPlugin};
/// use avian2d::prelude::*;
///
/// const PLAYER: Group = Group::GROUP_1;
/// const GROUND: Group = Group::GROUP_2;
///
/// fn parse_collision_layers(groups: &str, mask: &str) -> CollisionLayers {
///     let mut memberships = Group::NONE;
///     for group in groups.split(',').map(str::trim) {
///         memberships |= match group {
///             "player" => PLAYER,
///             "ground" => GROUND,
///             _ => Group::NONE,
///         };
///     }
///
///     let mut filters = Group::NONE;
///     for group in mask.split(',').map(str::trim) {
///         filters |= match group {
///             "player" => PLAYER,
///             "ground" => GROUND,
///             "all" => Group::ALL,
///             _ => Group::NONE,
///         };
///     }
///
///     CollisionLayers::new(memberships, filters)
/// }
///
/// App::new()
///     .add_plugins(TiledmapExtAvianPlugin::new(
///         PhysicsConfig::default()
///             .with_default_friction(0.3)
///             .with_collision_layers_fn(parse_collision_layers),
///     ))
///     .run();
/// ```
#[derive(Resource, Clone, Debug)]
pub struct PhysicsConfig {
    /// Default friction coefficient. Default: `0.5`
    pub default_friction: f32,

    /// Default restitution coefficient. Default: `0.0`
    pub default_restitution: f32,

    /// Default density (mass per unit area). Default: `1.0`
    pub default_density: f32,

    /// Default body type. Default: [`BodyType::Static`]
    pub default_body_type: BodyType,

    /// Default sensor flag. Default: `false`
    pub default_is_sensor: bool,

    /// Collision layers for elements without explicit collision groups.
    ///
    /// Default: [`CollisionLayers::default()`]
    pub default_collision_layers: CollisionLayers,

    /// Converts the `collision_groups` and `collision_mask` property strings into
    /// Avian's [`CollisionLayers`].
    ///
    /// Both arguments are comma-separated group names, e.g. `"player,friendly"`.
    pub collision_layers_fn: fn(&str, &str) -> CollisionLayers,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            default_friction: 0.5,
            default_restitution: 0.0,
            default_density: 1.0,
            default_body_type: BodyType::Static,
            default_is_sensor: false,
            default_collision_layers: CollisionLayers::default(),
            collision_layers_fn: default_collision_layers_fn,
        }
    }
}

fn default_collision_layers_fn(_groups: &str, _mask: &str) -> CollisionLayers {
    CollisionLayers::default()
}

impl PhysicsConfig {
    /// Builder method: Set default friction.
    pub fn with_default_friction(mut self, friction: f32) -> Self {
        self.default_friction = friction;
        self
    }

    /// Builder method: Set default restitution.
    pub fn with_default_restitution(mut self, restitution: f32) -> Self {
        self.default_restitution = restitution;
        self
    }

    /// Builder method: Set default density.
    pub fn with_default_density(mut self, density: f32) -> Self {
        self.default_density = density;
        self
    }

    /// Builder method: Set default body type.
    pub fn with_default_body_type(mut self, body_type: BodyType) -> Self {
        self.default_body_type = body_type;
        self
    }

    /// Builder method: Set default sensor flag.
    pub fn with_default_is_sensor(mut self, is_sensor: bool) -> Self {
        self.default_is_sensor = is_sensor;
        self
    }

    /// Builder method: Set default collision layers.
    pub fn with_default_collision_layers(mut self, collision_layers: CollisionLayers) -> Self {
        self.default_collision_layers = collision_layers;
        self
    }

    /// Builder method: Set collision layers conversion function.
    pub fn with_collision_layers_fn(
        mut self,
        collision_layers_fn: fn(&str, &str) -> CollisionLayers,
    ) -> Self {
        self.collision_layers_fn = collision_layers_fn;
        self
    }
}
