//! Plugin for `Avian2D` bindings.

use bevy::prelude::*;

use crate::config::PhysicsConfig;
use crate::properties::{BodyType, PhysicsSettings};

/// Inserts the [`PhysicsConfig`] resource and registers the physics property types.
///
/// Add Avian's own `PhysicsPlugins` separately.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_tiledmap_ext_avian::{PhysicsConfig, TiledmapExtAvianPlugin};
/// use avian2d::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(PhysicsPlugins::default())
///     .add_plugins(TiledmapExtAvianPlugin::new(
///         PhysicsConfig::default().with_default_friction(0.3),
///     ))
///     .run();
/// ```
#[derive(Default)]
pub struct TiledmapExtAvianPlugin {
    /// Physics configuration
    pub config: PhysicsConfig,
}

impl TiledmapExtAvianPlugin {
    /// Create a new plugin with custom configuration.
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for TiledmapExtAvianPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());

        app.register_type::<PhysicsSettings>();
        app.register_type::<BodyType>();

        debug!("TiledmapExtAvianPlugin initialized");
    }
}
