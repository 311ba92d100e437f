//! Plain descriptions of rigid bodies and their colliders.
//!
//! A [`BodyDefinition`] is built up front, from code or from Tiled properties, and turned
//! into entities in one go with [`SpawnBodyExt::spawn_body`]. Each
//! [`FixtureDefinition`] becomes a child collider entity of the body.
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_tiledmap_ext_avian::prelude::*;
//!
//! fn spawn_crate(mut commands: Commands) {
//!     let body = BodyDefinition::new(BodyType::Dynamic)
//!         .at(Vec2::new(64.0, 128.0))
//!         .box_shape(16.0, 16.0, |fixture| fixture.with_density(2.0).with_friction(0.7))
//!         .circle(4.0, |fixture| fixture.with_offset(Vec2::new(0.0, 10.0)).sensor());
//!
//!     commands.spawn_body(body);
//! }
//! ```

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::config::PhysicsConfig;
use crate::properties::{BodyType, PhysicsSettings};
use crate::shapes::{polygon_collider, polyline_collider};

/// One collider of a body and its material.
#[derive(Debug, Clone)]
pub struct FixtureDefinition {
    /// Shape of the fixture, centred on `offset`
    pub collider: Collider,
    /// Position relative to the body origin
    pub offset: Vec2,
    /// Rotation relative to the body, in radians
    pub rotation: f32,
    /// Mass per unit area
    pub density: f32,
    /// Friction coefficient (0.0 = ice, 1.0 = rubber)
    pub friction: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub restitution: f32,
    /// Detects overlaps without a collision response
    pub is_sensor: bool,
    /// `None` keeps Avian's default layers
    pub collision_layers: Option<CollisionLayers>,
}

impl FixtureDefinition {
    /// Fixture with the material defaults of [`PhysicsConfig::default`].
    pub fn new(collider: Collider) -> Self {
        let config = PhysicsConfig::default();
        Self {
            collider,
            offset: Vec2::ZERO,
            rotation: 0.0,
            density: config.default_density,
            friction: config.default_friction,
            restitution: config.default_restitution,
            is_sensor: config.default_is_sensor,
            collision_layers: None,
        }
    }

    /// Fixture whose material comes from `settings`.
    pub fn from_settings(collider: Collider, settings: &PhysicsSettings, config: &PhysicsConfig) -> Self {
        Self {
            density: settings.density,
            friction: settings.friction,
            restitution: settings.restitution,
            is_sensor: settings.is_sensor,
            collision_layers: Some(settings.collision_layers(config)),
            ..Self::new(collider)
        }
    }

    /// Set the position relative to the body origin.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Set the rotation relative to the body, in radians.
    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    /// Set the density.
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Set the friction coefficient.
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Set the restitution coefficient.
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    /// Set the collision layers.
    pub fn with_collision_layers(mut self, layers: CollisionLayers) -> Self {
        self.collision_layers = Some(layers);
        self
    }

    /// Mark as a sensor.
    pub fn sensor(mut self) -> Self {
        self.is_sensor = true;
        self
    }

    /// Components of the collider entity, without the optional sensor and layer components.
    pub fn into_bundle(self) -> (Collider, Transform, ColliderDensity, Friction, Restitution) {
        (
            self.collider,
            Transform::from_translation(self.offset.extend(0.0))
                .with_rotation(Quat::from_rotation_z(self.rotation)),
            ColliderDensity(self.density),
            Friction::new(self.friction).with_combine_rule(CoefficientCombine::Average),
            Restitution::new(self.restitution).with_combine_rule(CoefficientCombine::Average),
        )
    }
}

/// A rigid body and its fixtures.
#[derive(Debug, Clone)]
pub struct BodyDefinition {
    /// How the body responds to forces
    pub body_type: BodyType,
    /// World-space position of the body origin
    pub position: Vec2,
    /// Radians, counter-clockwise
    pub rotation: f32,
    /// Initial velocity in pixels per second
    pub linear_velocity: Vec2,
    /// Initial angular velocity in radians per second
    pub angular_velocity: f32,
    /// `None` keeps Avian's default damping
    pub linear_damping: Option<f32>,
    /// `None` keeps Avian's default damping
    pub angular_damping: Option<f32>,
    /// `None` keeps Avian's default gravity scale
    pub gravity_scale: Option<f32>,
    /// Prevents rotation
    pub fixed_rotation: bool,
    /// Enables swept continuous collision detection for fast bodies
    pub bullet: bool,
    /// Colliders in insertion order
    pub fixtures: Vec<FixtureDefinition>,
}

impl Default for BodyDefinition {
    fn default() -> Self {
        Self::new(BodyType::Static)
    }
}

impl BodyDefinition {
    /// Body at the origin with no fixtures.
    pub fn new(body_type: BodyType) -> Self {
        Self {
            body_type,
            position: Vec2::ZERO,
            rotation: 0.0,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            linear_damping: None,
            angular_damping: None,
            gravity_scale: None,
            fixed_rotation: false,
            bullet: false,
            fixtures: Vec::new(),
        }
    }

    /// Body whose motion parameters come from `settings`. Fixtures still need adding.
    pub fn from_settings(settings: &PhysicsSettings) -> Self {
        Self {
            linear_damping: settings.linear_damping,
            angular_damping: settings.angular_damping,
            gravity_scale: settings.gravity_scale,
            fixed_rotation: settings.lock_rotation,
            ..Self::new(settings.body_type)
        }
    }

    /// Place the body origin at `position`.
    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Set the rotation in radians, counter-clockwise.
    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    /// Set the initial linear velocity.
    pub fn with_linear_velocity(mut self, velocity: Vec2) -> Self {
        self.linear_velocity = velocity;
        self
    }

    /// Set the initial angular velocity.
    pub fn with_angular_velocity(mut self, velocity: f32) -> Self {
        self.angular_velocity = velocity;
        self
    }

    /// Set the linear damping.
    pub fn with_linear_damping(mut self, damping: f32) -> Self {
        self.linear_damping = Some(damping);
        self
    }

    /// Set the angular damping.
    pub fn with_angular_damping(mut self, damping: f32) -> Self {
        self.angular_damping = Some(damping);
        self
    }

    /// Scale the gravity applied to this body.
    pub fn with_gravity_scale(mut self, scale: f32) -> Self {
        self.gravity_scale = Some(scale);
        self
    }

    /// Prevent the body from rotating.
    pub fn fixed_rotation(mut self) -> Self {
        self.fixed_rotation = true;
        self
    }

    /// Enable continuous collision detection.
    pub fn bullet(mut self) -> Self {
        self.bullet = true;
        self
    }

    /// Append a prepared fixture.
    pub fn with_fixture(mut self, fixture: FixtureDefinition) -> Self {
        self.fixtures.push(fixture);
        self
    }

    fn shape<F>(self, collider: Collider, configure: F) -> Self
    where
        F: FnOnce(FixtureDefinition) -> FixtureDefinition,
    {
        self.with_fixture(configure(FixtureDefinition::new(collider)))
    }

    /// Append a `width` x `height` box centred on the fixture offset.
    pub fn box_shape<F>(self, width: f32, height: f32, configure: F) -> Self
    where
        F: FnOnce(FixtureDefinition) -> FixtureDefinition,
    {
        self.shape(Collider::rectangle(width, height), configure)
    }

    /// Append a circle.
    pub fn circle<F>(self, radius: f32, configure: F) -> Self
    where
        F: FnOnce(FixtureDefinition) -> FixtureDefinition,
    {
        self.shape(Collider::circle(radius), configure)
    }

    /// Append a polygon, as a convex hull or, if concave, a convex decomposition.
    ///
    /// Fewer than 3 points add nothing.
    pub fn polygon<F>(self, points: Vec<Vec2>, configure: F) -> Self
    where
        F: FnOnce(FixtureDefinition) -> FixtureDefinition,
    {
        match polygon_collider(points) {
            Some(collider) => self.shape(collider, configure),
            None => self,
        }
    }

    /// Append a chain of segments through `points`, closed back to the first point if `closed`.
    ///
    /// Fewer than 2 points add nothing.
    pub fn chain<F>(self, points: Vec<Vec2>, closed: bool, configure: F) -> Self
    where
        F: FnOnce(FixtureDefinition) -> FixtureDefinition,
    {
        match polyline_collider(points, closed) {
            Some(collider) => self.shape(collider, configure),
            None => self,
        }
    }

    /// Append a single segment.
    pub fn edge<F>(self, from: Vec2, to: Vec2, configure: F) -> Self
    where
        F: FnOnce(FixtureDefinition) -> FixtureDefinition,
    {
        self.shape(Collider::segment(from, to), configure)
    }

    /// Transform of the body entity.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position.extend(0.0))
            .with_rotation(Quat::from_rotation_z(self.rotation))
    }

    /// Components of the body entity itself. Optional settings and fixtures are added by
    /// [`SpawnBodyExt::spawn_body`].
    pub fn body_bundle(&self) -> (RigidBody, Transform, LinearVelocity, AngularVelocity) {
        (
            self.body_type.into(),
            self.transform(),
            LinearVelocity(self.linear_velocity),
            AngularVelocity(self.angular_velocity),
        )
    }
}

/// Spawns a [`BodyDefinition`] as entities.
pub trait SpawnBodyExt {
    /// Spawn the body with one child collider entity per fixture. Returns the body entity.
    fn spawn_body(&mut self, body: BodyDefinition) -> Entity;
}

impl SpawnBodyExt for Commands<'_, '_> {
    fn spawn_body(&mut self, body: BodyDefinition) -> Entity {
        let mut entity = self.spawn(body.body_bundle());

        if let Some(damping) = body.linear_damping {
            entity.insert(LinearDamping(damping));
        }
        if let Some(damping) = body.angular_damping {
            entity.insert(AngularDamping(damping));
        }
        if let Some(scale) = body.gravity_scale {
            entity.insert(GravityScale(scale));
        }
        if body.fixed_rotation {
            entity.insert(LockedAxes::ROTATION_LOCKED);
        }
        if body.bullet {
            entity.insert(SweptCcd::default());
        }

        if body.fixtures.is_empty() {
            debug!("Spawning {:?} body without fixtures", body.body_type);
        }

        entity.with_children(|parent| {
            for fixture in body.fixtures {
                let is_sensor = fixture.is_sensor;
                let layers = fixture.collision_layers;
                let mut child = parent.spawn(fixture.into_bundle());
                if is_sensor {
                    child.insert(Sensor);
                }
                if let Some(layers) = layers {
                    child.insert(layers);
                }
            }
        });

        entity.id()
    }
}

#[cfg(test)]
mod tests {
    use avian2d::parry::shape::TypedShape;

    use super::*;

    #[test]
    fn test_fixtures_keep_insertion_order() {
        let body = BodyDefinition::new(BodyType::Dynamic)
            .box_shape(2.0, 4.0, |f| f)
            .circle(1.0, |f| f.with_density(3.0))
            .edge(Vec2::ZERO, Vec2::X, |f| f.sensor());

        assert_eq!(body.fixtures.len(), 3);
        assert!(matches!(
            body.fixtures[0].collider.shape().as_typed_shape(),
            TypedShape::Cuboid(_)
        ));
        assert!(matches!(
            body.fixtures[1].collider.shape().as_typed_shape(),
            TypedShape::Ball(_)
        ));
        assert_eq!(body.fixtures[1].density, 3.0);
        assert!(matches!(
            body.fixtures[2].collider.shape().as_typed_shape(),
            TypedShape::Segment(_)
        ));
        assert!(body.fixtures[2].is_sensor);
    }

    #[test]
    fn test_body_bundle_carries_motion() {
        let body = BodyDefinition::new(BodyType::Kinematic)
            .at(Vec2::new(3.0, 4.0))
            .with_linear_velocity(Vec2::X);

        let (rigid_body, transform, velocity, _) = body.body_bundle();
        assert_eq!(rigid_body, RigidBody::Kinematic);
        assert_eq!(transform.translation, Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(velocity.0, Vec2::X);
    }

    #[test]
    fn test_closed_chain_has_wrapping_segment() {
        let points = vec![Vec2::ZERO, Vec2::X, Vec2::ONE];
        let body = BodyDefinition::default().chain(points, true, |f| f);

        let TypedShape::Polyline(polyline) = body.fixtures[0].collider.shape().as_typed_shape()
        else {
            panic!("expected a polyline");
        };
        assert_eq!(polyline.num_segments(), 3);
    }

    #[test]
    fn test_open_chain() {
        let points = vec![Vec2::ZERO, Vec2::X, Vec2::ONE];
        let body = BodyDefinition::default().chain(points, false, |f| f);

        let TypedShape::Polyline(polyline) = body.fixtures[0].collider.shape().as_typed_shape()
        else {
            panic!("expected a polyline");
        };
        assert_eq!(polyline.num_segments(), 2);
    }

    #[test]
    fn test_short_point_lists_add_no_fixture() {
        let point_lists = [vec![], vec![Vec2::ONE], vec![Vec2::ZERO, Vec2::X]];
        for points in point_lists.clone() {
            let body = BodyDefinition::default().polygon(points, |f| f);
            assert!(body.fixtures.is_empty());
        }

        let empty = BodyDefinition::default().chain(Vec::new(), false, |f| f);
        assert!(empty.fixtures.is_empty());
        let single = BodyDefinition::default().chain(vec![Vec2::ONE], true, |f| f);
        assert!(single.fixtures.is_empty());

        // Two points still make a segment
        let pair = BodyDefinition::default().chain(point_lists[2].clone(), true, |f| f);
        let TypedShape::Polyline(polyline) = pair.fixtures[0].collider.shape().as_typed_shape()
        else {
            panic!("expected a polyline");
        };
        assert_eq!(polyline.num_segments(), 1);
    }

    #[test]
    fn test_concave_polygon_fixture() {
        let points = vec![
            Vec2::ZERO,
            Vec2::new(3.0, 0.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(2.0, 3.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 3.0),
            Vec2::new(0.0, 3.0),
        ];
        let body = BodyDefinition::default().polygon(points, |f| f);

        assert!(matches!(
            body.fixtures[0].collider.shape().as_typed_shape(),
            TypedShape::Compound(_)
        ));
    }

    #[test]
    fn test_body_from_settings() {
        let settings = PhysicsSettings {
            body_type: BodyType::Kinematic,
            linear_damping: Some(0.5),
            lock_rotation: true,
            ..default()
        };
        let body = BodyDefinition::from_settings(&settings).at(Vec2::new(3.0, 4.0));

        assert_eq!(body.body_type, BodyType::Kinematic);
        assert_eq!(body.linear_damping, Some(0.5));
        assert!(body.fixed_rotation);
        assert_eq!(body.transform().translation, Vec3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_fixture_from_settings() {
        let config = PhysicsConfig::default();
        let settings = PhysicsSettings {
            friction: 0.9,
            is_sensor: true,
            ..default()
        };
        let fixture = FixtureDefinition::from_settings(Collider::circle(1.0), &settings, &config);

        assert_eq!(fixture.friction, 0.9);
        assert!(fixture.is_sensor);
        assert_eq!(fixture.collision_layers, Some(config.default_collision_layers));
    }

    #[test]
    fn test_fixture_bundle_places_collider() {
        let (_, transform, density, friction, _) = FixtureDefinition::new(Collider::circle(1.0))
            .with_offset(Vec2::new(1.0, -2.0))
            .with_density(4.0)
            .with_friction(0.25)
            .into_bundle();

        assert_eq!(transform.translation, Vec3::new(1.0, -2.0, 0.0));
        assert_eq!(density.0, 4.0);
        assert_eq!(friction.dynamic_coefficient, 0.25);
    }
}
