//! Physics settings read from Tiled custom properties.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy_tiledmap_ext_core::properties::{FromTiledProperty, PropertyOwner, PropertyOwnerExt};
use tiled::{Properties, PropertyValue};

use crate::config::PhysicsConfig;

/// Name of the optional class property grouping all physics settings.
pub const PHYSICS_SETTINGS_PROPERTY: &str = "physics_settings";

/// Physics parameters of a Tiled element.
///
/// Each field is read from a custom property of the same name. The properties can sit
/// directly on the element or inside a class property called `physics_settings`; the
/// class property wins when both exist.
///
/// # Example in Tiled
///
/// ```text
/// body_type: "Dynamic"
/// friction: 0.8
/// restitution: 0.3
/// collision_groups: "player"
/// collision_mask: "ground,enemies"
/// ```
///
/// Anything left out falls back to [`PhysicsConfig`].
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct PhysicsSettings {
    /// Rigid body type
    pub body_type: BodyType,

    /// Friction coefficient (0.0 = no friction)
    pub friction: f32,

    /// Restitution coefficient (0.0 = no bounce, 1.0 = perfect bounce)
    pub restitution: f32,

    /// Mass per unit area for dynamic bodies
    pub density: f32,

    /// Comma-separated group memberships, converted by `PhysicsConfig::collision_layers_fn`
    pub collision_groups: String,

    /// Comma-separated collision filters, converted by `PhysicsConfig::collision_layers_fn`
    pub collision_mask: String,

    /// Detects contacts without generating responses
    pub is_sensor: bool,

    pub linear_damping: Option<f32>,

    pub angular_damping: Option<f32>,

    /// Gravity multiplier (0.0 = no gravity)
    pub gravity_scale: Option<f32>,

    /// Prevents rotation if true
    pub lock_rotation: bool,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self::from_config(&PhysicsConfig::default())
    }
}

impl PhysicsSettings {
    /// Settings made only of the configured defaults.
    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self {
            body_type: config.default_body_type,
            friction: config.default_friction,
            restitution: config.default_restitution,
            density: config.default_density,
            collision_groups: String::new(),
            collision_mask: String::new(),
            is_sensor: config.default_is_sensor,
            linear_damping: None,
            angular_damping: None,
            gravity_scale: None,
            lock_rotation: false,
        }
    }

    /// Read settings from an element's properties, using `config` for anything unset.
    pub fn from_owner<O: PropertyOwner + ?Sized>(owner: &O, config: &PhysicsConfig) -> Self {
        match owner.property_opt::<Properties>(PHYSICS_SETTINGS_PROPERTY) {
            Some(class) => Self::read(&class, config),
            None => Self::read(owner, config),
        }
    }

    fn read<O: PropertyOwner + ?Sized>(owner: &O, config: &PhysicsConfig) -> Self {
        Self {
            body_type: owner.property_or("body_type", config.default_body_type),
            friction: owner.property_or("friction", config.default_friction),
            restitution: owner.property_or("restitution", config.default_restitution),
            density: owner.property_or("density", config.default_density),
            collision_groups: owner.property_or("collision_groups", String::new()),
            collision_mask: owner.property_or("collision_mask", String::new()),
            is_sensor: owner.property_or("is_sensor", config.default_is_sensor),
            linear_damping: owner.property_opt("linear_damping"),
            angular_damping: owner.property_opt("angular_damping"),
            gravity_scale: owner.property_opt("gravity_scale"),
            lock_rotation: owner.property_or("lock_rotation", false),
        }
    }

    /// Convert collision groups/mask strings to Avian's `CollisionLayers`.
    ///
    /// If both strings are empty, returns the default collision layers from `PhysicsConfig`.
    pub fn collision_layers(&self, config: &PhysicsConfig) -> CollisionLayers {
        if self.collision_groups.is_empty() && self.collision_mask.is_empty() {
            config.default_collision_layers
        } else {
            (config.collision_layers_fn)(&self.collision_groups, &self.collision_mask)
        }
    }

    /// Convert to Avian's `RigidBody` type.
    pub fn to_rigid_body(&self) -> RigidBody {
        self.body_type.into()
    }
}

/// Rigid body type for physics objects.
#[derive(Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    /// Doesn't move, infinite mass. Walls, platforms, terrain.
    #[default]
    Static,

    /// Affected by forces and gravity. Players, enemies, crates.
    Dynamic,

    /// Moves but ignores forces. Moving platforms, elevators.
    Kinematic,
}

impl BodyType {
    /// Parse a variant name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "static" => Some(Self::Static),
            "dynamic" => Some(Self::Dynamic),
            "kinematic" => Some(Self::Kinematic),
            _ => None,
        }
    }
}

impl FromTiledProperty for BodyType {
    const KIND: &'static str = "string (Static, Dynamic or Kinematic)";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::StringValue(name) => Self::parse(name),
            _ => None,
        }
    }
}

impl From<BodyType> for RigidBody {
    fn from(body_type: BodyType) -> Self {
        match body_type {
            BodyType::Static => RigidBody::Static,
            BodyType::Dynamic => RigidBody::Dynamic,
            BodyType::Kinematic => RigidBody::Kinematic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(entries: &[(&str, PropertyValue)]) -> Properties {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_unset_properties_use_config_defaults() {
        let config = PhysicsConfig::default()
            .with_default_friction(0.2)
            .with_default_body_type(BodyType::Kinematic);
        let settings = PhysicsSettings::from_owner(&Properties::new(), &config);

        assert_eq!(settings.friction, 0.2);
        assert_eq!(settings.body_type, BodyType::Kinematic);
        assert_eq!(settings.linear_damping, None);
        assert_eq!(settings, PhysicsSettings::from_config(&config));
    }

    #[test]
    fn test_reads_flat_properties() {
        let owner = props(&[
            ("body_type", PropertyValue::StringValue("dynamic".to_string())),
            ("friction", PropertyValue::FloatValue(0.8)),
            ("density", PropertyValue::IntValue(3)),
            ("is_sensor", PropertyValue::BoolValue(true)),
            ("gravity_scale", PropertyValue::FloatValue(0.0)),
        ]);
        let settings = PhysicsSettings::from_owner(&owner, &PhysicsConfig::default());

        assert_eq!(settings.body_type, BodyType::Dynamic);
        assert_eq!(settings.to_rigid_body(), RigidBody::Dynamic);
        assert_eq!(settings.friction, 0.8);
        assert_eq!(settings.density, 3.0);
        assert!(settings.is_sensor);
        assert_eq!(settings.gravity_scale, Some(0.0));
    }

    #[test]
    fn test_class_property_takes_precedence() {
        let class = props(&[("restitution", PropertyValue::FloatValue(0.9))]);
        let owner = props(&[
            ("restitution", PropertyValue::FloatValue(0.1)),
            (
                PHYSICS_SETTINGS_PROPERTY,
                PropertyValue::ClassValue {
                    property_type: "avian::PhysicsSettings".to_string(),
                    properties: class,
                },
            ),
        ]);
        let settings = PhysicsSettings::from_owner(&owner, &PhysicsConfig::default());

        assert_eq!(settings.restitution, 0.9);
    }

    #[test]
    fn test_unknown_body_type_falls_back() {
        let owner = props(&[("body_type", PropertyValue::StringValue("floaty".to_string()))]);
        let settings = PhysicsSettings::from_owner(&owner, &PhysicsConfig::default());
        assert_eq!(settings.body_type, BodyType::Static);
    }

    #[test]
    fn test_collision_layers_use_callback_only_when_set() {
        fn all_layers(_groups: &str, _mask: &str) -> CollisionLayers {
            CollisionLayers::new(LayerMask::ALL, LayerMask::ALL)
        }
        let config = PhysicsConfig::default()
            .with_default_collision_layers(CollisionLayers::NONE)
            .with_collision_layers_fn(all_layers);

        let mut settings = PhysicsSettings::from_config(&config);
        assert_eq!(settings.collision_layers(&config), CollisionLayers::NONE);

        settings.collision_groups = "player".to_string();
        assert_eq!(
            settings.collision_layers(&config),
            CollisionLayers::new(LayerMask::ALL, LayerMask::ALL)
        );
    }

    #[test]
    fn test_body_type_parse() {
        assert_eq!(BodyType::parse(" Kinematic "), Some(BodyType::Kinematic));
        assert_eq!(BodyType::parse("STATIC"), Some(BodyType::Static));
        assert_eq!(BodyType::parse(""), None);
    }
}
