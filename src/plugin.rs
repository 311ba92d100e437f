//! Unified plugin for bevy_tiledmap_ext.

use bevy::prelude::*;

use bevy_tiledmap_ext_core::TiledmapExtCorePlugin;

#[cfg(feature = "avian")]
use bevy_tiledmap_ext_avian::{PhysicsConfig, TiledmapExtAvianPlugin};

/// Unified plugin that adds all enabled bevy_tiledmap_ext functionality.
///
/// This plugin always includes [`TiledmapExtCorePlugin`]. With the `avian` feature
/// (default) it also adds [`TiledmapExtAvianPlugin`] configured with [`Self::avian`].
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_tiledmap_ext::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(
///         TiledmapExtPlugin::default()
///             .with_avian(PhysicsConfig::default().with_default_restitution(0.2)),
///     )
///     .run();
/// ```
#[derive(Default)]
pub struct TiledmapExtPlugin {
    /// Avian physics configuration (if feature enabled)
    #[cfg(feature = "avian")]
    pub avian: PhysicsConfig,
}

impl TiledmapExtPlugin {
    /// Create with custom Avian physics configuration
    #[cfg(feature = "avian")]
    pub fn with_avian(mut self, config: PhysicsConfig) -> Self {
        self.avian = config;
        self
    }
}

impl Plugin for TiledmapExtPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(TiledmapExtCorePlugin);

        #[cfg(feature = "avian")]
        app.add_plugins(TiledmapExtAvianPlugin::new(self.avian.clone()));

        info!("TiledmapExtPlugin initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_tiledmap_ext_core::prelude::*;

    #[test]
    fn test_plugin_registers_core_types() {
        let mut app = App::new();
        app.add_plugins(TiledmapExtPlugin::default());

        let registry = app.world().resource::<AppTypeRegistry>().read();
        assert!(registry.get(std::any::TypeId::of::<TileLayerData>()).is_some());
    }

    #[cfg(feature = "avian")]
    #[test]
    fn test_plugin_forwards_avian_config() {
        let mut app = App::new();
        app.add_plugins(
            TiledmapExtPlugin::default().with_avian(PhysicsConfig::default().with_default_friction(0.9)),
        );

        assert_eq!(app.world().resource::<PhysicsConfig>().default_friction, 0.9);
    }
}
