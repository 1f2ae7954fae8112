//! Typed key/value metadata attached to maps, layers, tiles and objects.
//!
//! A [`Property`] keeps its value as the text Tiled wrote. The declared
//! [`PropertyType`] is stored verbatim; interpreting the text is left to the
//! consumer through the `as_*` accessors.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{ErrorSeverity, GameError};

/// Property collection keyed by property name.
pub type Properties = BTreeMap<String, Property>;

/// Value type tags understood by Tiled.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PropertyType {
    #[default]
    String,
    Int,
    Float,
    Bool,
    Color,
    File,
    Object,
    Class,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    #[error("property '{name}' has unknown type '{tag}'")]
    UnknownType { name: String, tag: String },
}

impl GameError for PropertyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownType { .. } => "PROPERTY_UNKNOWN_TYPE",
        }
    }
}

/// Named metadata entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    name: String,
    value: String,
    ty: PropertyType,
}

impl Property {
    /// Creates a string property.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_type(name, value, PropertyType::String)
    }

    /// Creates a property with an explicit type tag.
    pub fn with_type(name: impl Into<String>, value: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ty,
        }
    }

    /// Parses a `(name, value, type)` triple as found in map files.
    ///
    /// A missing or empty tag means string, matching Tiled's own default.
    pub fn parse(
        name: impl Into<String>,
        value: impl Into<String>,
        tag: Option<&str>,
    ) -> Result<Self, PropertyError> {
        let name = name.into();
        let ty = match tag.map(str::trim) {
            None | Some("") => PropertyType::String,
            Some(tag) => PropertyType::from_str(tag).map_err(|_| PropertyError::UnknownType {
                name: name.clone(),
                tag: tag.to_owned(),
            })?,
        };
        Ok(Self::with_type(name, value, ty))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn ty(&self) -> PropertyType {
        self.ty
    }

    /// Interprets the value as a boolean (`true`/`false`, case-insensitive).
    pub fn as_bool(&self) -> Option<bool> {
        match self.value.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        self.value.trim().parse().ok()
    }

    pub fn as_float(&self) -> Option<f64> {
        self.value.trim().parse().ok()
    }
}

/// Inserts a property keyed by its own name, replacing any previous entry.
pub fn insert_property(properties: &mut Properties, property: Property) {
    properties.insert(property.name.clone(), property);
}
