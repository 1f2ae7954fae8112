//! Exits and entrances connecting levels.

use crate::map::ObjectGroup;
use crate::position::Position;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPoint {
    pub name: String,
    pub position: Position,
    /// Level (usually a map path) this point leads to, when declared.
    pub destination: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPointManager {
    points: Vec<TransitionPoint>,
}

impl TransitionPointManager {
    pub fn new(points: Vec<TransitionPoint>) -> Self {
        Self { points }
    }

    /// One transition point per object; the destination is read from
    /// `destination_property`.
    pub fn from_group(group: &ObjectGroup, destination_property: &str) -> Self {
        let points = group
            .objects
            .iter()
            .map(|object| TransitionPoint {
                name: object.name.clone(),
                position: object.position,
                destination: object
                    .properties
                    .get(destination_property)
                    .map(|property| property.value().to_owned())
                    .filter(|value| !value.is_empty()),
            })
            .collect();

        Self { points }
    }

    pub fn points(&self) -> &[TransitionPoint] {
        &self.points
    }

    pub fn at(&self, position: Position) -> Option<&TransitionPoint> {
        self.points.iter().find(|point| point.position == position)
    }

    pub fn by_name(&self, name: &str) -> Option<&TransitionPoint> {
        self.points.iter().find(|point| point.name == name)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{MapObject, Properties, Property, property};

    #[test]
    fn objects_become_transition_points() {
        let mut props = Properties::new();
        property::insert_property(&mut props, Property::new("Destination", "cellar.tmx"));
        let group = ObjectGroup::new(
            "Transitions",
            vec![
                MapObject::new("Stairs", "Transition", Position::new(4, 2)).with_properties(props),
                MapObject::new("Sealed", "Transition", Position::new(0, 0)),
            ],
        );

        let manager = TransitionPointManager::from_group(&group, "Destination");

        assert_eq!(manager.len(), 2);
        let stairs = manager.at(Position::new(4, 2)).unwrap();
        assert_eq!(stairs.destination.as_deref(), Some("cellar.tmx"));
        assert_eq!(manager.by_name("Sealed").unwrap().destination, None);
        assert!(manager.at(Position::new(1, 1)).is_none());
    }
}
