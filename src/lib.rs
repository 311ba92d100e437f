//! # bevy_tiledmap_ext
//!
//! Extension traits and physics bindings for Tiled maps in Bevy.
//!
//! This is a meta-crate that combines the `bevy_tiledmap_ext_*` sub-crates behind feature
//! flags.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_tiledmap_ext::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(TiledmapExtPlugin::default())
//!         .add_systems(Startup, read_level)
//!         .run();
//! }
//!
//! fn read_level() {
//!     let Ok(map) = tiled::Loader::new().load_tmx_map("assets/level.tmx") else {
//!         return;
//!     };
//!     let gravity: f32 = map.property_or("gravity", 9.81);
//!
//!     if let Ok(ground) = map.layer_by_name("ground") {
//!         let active: bool = ground.property_or("active", true);
//!         info!("gravity {gravity}, ground active: {active}");
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - **default**: Includes `avian`
//! - **avian**: Body and collider definitions using `avian2d`
//!
//! ## Crates
//!
//! - [`core`]: property lookup, layer queries, cell iteration and the ECS components
//! - [`avian`]: `Avian2D` bodies from objects and tile collision shapes

pub mod plugin;

pub use bevy_tiledmap_ext_core as core;

#[cfg(feature = "avian")]
pub use bevy_tiledmap_ext_avian as avian;

pub use tiled;

/// Unified prelude for bevy_tiledmap_ext
pub mod prelude {
    pub use crate::core::prelude::*;

    #[cfg(feature = "avian")]
    pub use crate::avian::prelude::*;

    pub use crate::plugin::TiledmapExtPlugin;
}
