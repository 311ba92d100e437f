//! Error type for required lookups.

use thiserror::Error;

/// Failure of a lookup that has no sensible fallback.
///
/// Only the required operations return this: [`PropertyOwnerExt::property`] and
/// [`MapLayersExt::layer_by_name`]. Every other lookup degrades to a default or `None`.
///
/// [`PropertyOwnerExt::property`]: crate::properties::PropertyOwnerExt::property
/// [`MapLayersExt::layer_by_name`]: crate::layers::MapLayersExt::layer_by_name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("Property {key} does not exist for {owner}")]
    Missing { key: String, owner: String },

    #[error("Property {key} of {owner} is a {found} value, expected {expected}")]
    TypeMismatch {
        key: String,
        owner: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Layer {name} does not exist in map")]
    MissingLayer { name: String },
}
