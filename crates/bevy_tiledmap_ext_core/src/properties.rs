//! Typed access to Tiled custom properties.
//!
//! Every element that carries a property table in Tiled (maps, layers, objects and
//! tileset tiles) implements [`PropertyOwner`]. The blanket [`PropertyOwnerExt`] trait then
//! adds typed lookups on top of it:
//!
//! ```rust,no_run
//! use bevy_tiledmap_ext_core::prelude::*;
//!
//! # fn demo(map: &tiled::Map) -> Result<(), PropertyError> {
//! let layer = map.layer_by_name("ground")?;
//! let active: bool = layer.property("active")?;
//! let speed = layer.property_or("scroll_speed", 1.0_f32);
//! let music: Option<String> = layer.property_opt("music");
//! # Ok(())
//! # }
//! ```

use bevy::prelude::*;
use tiled::{Properties, PropertyValue};

use crate::error::PropertyError;

/// Trait for types that can be read out of a Tiled property value.
///
/// Conversions are strict about the stored kind, except that integers widen into
/// floating point types.
pub trait FromTiledProperty: Sized {
    /// Name of the expected Tiled kind, used in error messages.
    const KIND: &'static str;

    /// Attempt to convert a Tiled property value to this type.
    ///
    /// Returns `Some(value)` if conversion succeeds, `None` otherwise.
    fn from_property(value: &PropertyValue) -> Option<Self>;
}

impl FromTiledProperty for bool {
    const KIND: &'static str = "bool";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::BoolValue(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromTiledProperty for i32 {
    const KIND: &'static str = "int";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::IntValue(i) => Some(*i),
            _ => None,
        }
    }
}

impl FromTiledProperty for i64 {
    const KIND: &'static str = "int";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::IntValue(i) => Some(i64::from(*i)),
            _ => None,
        }
    }
}

impl FromTiledProperty for u32 {
    const KIND: &'static str = "int";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::IntValue(i) => u32::try_from(*i).ok(),
            // Object references are stored as unsigned ids
            PropertyValue::ObjectValue(id) => Some(*id),
            _ => None,
        }
    }
}

impl FromTiledProperty for f32 {
    const KIND: &'static str = "float";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::FloatValue(f) => Some(*f),
            PropertyValue::IntValue(i) => Some(*i as f32),
            _ => None,
        }
    }
}

impl FromTiledProperty for f64 {
    const KIND: &'static str = "float";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::FloatValue(f) => Some(f64::from(*f)),
            PropertyValue::IntValue(i) => Some(f64::from(*i)),
            _ => None,
        }
    }
}

impl FromTiledProperty for String {
    const KIND: &'static str = "string";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::StringValue(s) | PropertyValue::FileValue(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromTiledProperty for tiled::Color {
    const KIND: &'static str = "color";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::ColorValue(color) => Some(*color),
            _ => None,
        }
    }
}

impl FromTiledProperty for Color {
    const KIND: &'static str = "color";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::ColorValue(color) => Some(Color::srgba_u8(
                color.red,
                color.green,
                color.blue,
                color.alpha,
            )),
            _ => None,
        }
    }
}

impl FromTiledProperty for Vec2 {
    const KIND: &'static str = "string (\"x,y\")";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        let PropertyValue::StringValue(s) = value else {
            return None;
        };
        let [x, y] = parse_components::<2>(s)?;
        Some(Vec2::new(x, y))
    }
}

impl FromTiledProperty for Vec3 {
    const KIND: &'static str = "string (\"x,y,z\")";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        let PropertyValue::StringValue(s) = value else {
            return None;
        };
        let [x, y, z] = parse_components::<3>(s)?;
        Some(Vec3::new(x, y, z))
    }
}

impl FromTiledProperty for Properties {
    const KIND: &'static str = "class";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::ClassValue { properties, .. } => Some(properties.clone()),
            _ => None,
        }
    }
}

impl FromTiledProperty for PropertyValue {
    const KIND: &'static str = "any";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        Some(value.clone())
    }
}

/// Parse exactly `N` comma separated floats.
fn parse_components<const N: usize>(s: &str) -> Option<[f32; N]> {
    let mut out = [0.0; N];
    let mut parts = s.split(',');
    for slot in &mut out {
        *slot = parts.next()?.trim().parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

/// Name of the kind stored in a property value.
pub fn value_kind(value: &PropertyValue) -> &'static str {
    match value {
        PropertyValue::BoolValue(_) => "bool",
        PropertyValue::FloatValue(_) => "float",
        PropertyValue::IntValue(_) => "int",
        PropertyValue::ColorValue(_) => "color",
        PropertyValue::StringValue(_) => "string",
        PropertyValue::FileValue(_) => "file",
        PropertyValue::ObjectValue(_) => "object",
        PropertyValue::ClassValue { .. } => "class",
    }
}

/// Anything in a Tiled map that carries a custom property table.
pub trait PropertyOwner {
    /// The raw property table.
    fn properties(&self) -> &Properties;

    /// Human readable description used in error messages, e.g. `layer ground`.
    fn owner_label(&self) -> String;
}

impl PropertyOwner for tiled::LayerData {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn owner_label(&self) -> String {
        format!("layer {}", self.name)
    }
}

impl PropertyOwner for tiled::Map {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn owner_label(&self) -> String {
        "map".to_string()
    }
}

impl PropertyOwner for tiled::ObjectData {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn owner_label(&self) -> String {
        format!("object {} (id {})", self.name, self.id())
    }
}

impl PropertyOwner for tiled::TileData {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn owner_label(&self) -> String {
        match &self.user_type {
            Some(class) => format!("tile of class {class}"),
            None => "tile".to_string(),
        }
    }
}

impl PropertyOwner for Properties {
    fn properties(&self) -> &Properties {
        self
    }

    fn owner_label(&self) -> String {
        "property table".to_string()
    }
}

/// Typed lookups for every [`PropertyOwner`].
pub trait PropertyOwnerExt: PropertyOwner {
    /// Read a required property.
    ///
    /// # Errors
    ///
    /// [`PropertyError::Missing`] when the key is not defined,
    /// [`PropertyError::TypeMismatch`] when it holds a value that does not convert to `T`.
    fn property<T: FromTiledProperty>(&self, key: &str) -> Result<T, PropertyError> {
        let Some(value) = self.properties().get(key) else {
            return Err(PropertyError::Missing {
                key: key.to_string(),
                owner: self.owner_label(),
            });
        };
        T::from_property(value).ok_or_else(|| PropertyError::TypeMismatch {
            key: key.to_string(),
            owner: self.owner_label(),
            expected: T::KIND,
            found: value_kind(value),
        })
    }

    /// Read a property, falling back to `default` when it is missing.
    ///
    /// A value of the wrong kind also yields `default` and logs a warning.
    fn property_or<T: FromTiledProperty>(&self, key: &str, default: T) -> T {
        self.property_opt(key).unwrap_or(default)
    }

    /// Read a property, returning `None` when it is missing or of the wrong kind.
    fn property_opt<T: FromTiledProperty>(&self, key: &str) -> Option<T> {
        let value = self.properties().get(key)?;
        let converted = T::from_property(value);
        if converted.is_none() {
            warn!(
                "Property '{}' of {} is a {} value, expected {}; ignoring it",
                key,
                self.owner_label(),
                value_kind(value),
                T::KIND
            );
        }
        converted
    }

    /// Whether the property table defines `key`, whatever its kind.
    fn contains_property(&self, key: &str) -> bool {
        self.properties().contains_key(key)
    }
}

impl<O: PropertyOwner + ?Sized> PropertyOwnerExt for O {}
