//! `Avian2D` bindings for `bevy_tiledmap_ext`.
//!
//! # Features
//!
//! - **Body definitions**: describe a rigid body and its colliders with [`BodyDefinition`],
//!   then spawn it with [`SpawnBodyExt::spawn_body`]
//! - **Shape conversion**: Tiled object shapes and tileset collision shapes to colliders
//! - **Property-based configuration**: [`PhysicsSettings`] read from custom properties, with
//!   [`PhysicsConfig`] supplying the defaults
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_tiledmap_ext_avian::prelude::*;
//! use bevy_tiledmap_ext_core::prelude::*;
//!
//! fn spawn_level_bodies(mut commands: Commands, config: Res<PhysicsConfig>) {
//!     let Ok(map) = tiled::Loader::new().load_tmx_map("assets/maps/level1.tmx") else {
//!         return;
//!     };
//!     let height = map.total_height() as f32;
//!
//!     for object in map.objects() {
//!         if let Some(body) = object_body(&object, height, &config) {
//!             commands.spawn_body(body);
//!         }
//!     }
//! }
//! ```

pub mod body;
pub mod config;
pub mod objects;
pub mod plugin;
pub mod properties;
pub mod shapes;

pub mod prelude {
    //! Common imports for `bevy_tiledmap_ext_avian`.

    pub use crate::body::{BodyDefinition, FixtureDefinition, SpawnBodyExt};
    pub use crate::config::PhysicsConfig;
    pub use crate::objects::{object_body, tile_layer_body, wants_physics};
    pub use crate::plugin::TiledmapExtAvianPlugin;
    pub use crate::properties::{BodyType, PhysicsSettings};
}

pub use body::{BodyDefinition, FixtureDefinition, SpawnBodyExt};
pub use config::PhysicsConfig;
pub use plugin::TiledmapExtAvianPlugin;
pub use properties::{BodyType, PhysicsSettings};
