use super::Properties;
use crate::position::Position;

/// Free-standing map object (spawn marker, exit, trigger area).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapObject {
    pub name: String,
    /// Tiled class (formerly "type") of the object.
    pub kind: String,
    /// Tile the object's anchor falls on.
    pub position: Position,
    pub properties: Properties,
}

impl MapObject {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            position,
            properties: Properties::new(),
        }
    }

    #[must_use]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}

/// Named collection of objects (a Tiled object layer).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectGroup {
    pub name: String,
    pub objects: Vec<MapObject>,
    pub properties: Properties,
}

impl ObjectGroup {
    pub fn new(name: impl Into<String>, objects: Vec<MapObject>) -> Self {
        Self {
            name: name.into(),
            objects,
            properties: Properties::new(),
        }
    }
}
