//! Character roster derived from a map's characters layer.

use std::fmt;

use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::map::{TileGid, TileLayer, TileMap};
use crate::position::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Character placed on a level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: CharacterId,
    pub position: Position,
    /// Tile gid the character was drawn with.
    pub tile: TileGid,
    pub is_player: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    #[error("character {0} not found")]
    NotFound(CharacterId),

    #[error("tile {0} is already occupied")]
    Occupied(Position),
}

impl GameError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) => ErrorSeverity::Validation,
            Self::Occupied(_) => ErrorSeverity::Recoverable,
        }
    }

    fn context(&self) -> Option<ErrorContext> {
        match self {
            Self::Occupied(position) => Some(ErrorContext::new().with_position(*position)),
            Self::NotFound(_) => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "CHARACTER_NOT_FOUND",
            Self::Occupied(_) => "CHARACTER_TILE_OCCUPIED",
        }
    }
}

/// Owns every character placed on a level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterManager {
    characters: Vec<Character>,
}

impl CharacterManager {
    pub fn new(characters: Vec<Character>) -> Self {
        Self { characters }
    }

    /// Builds the roster from the occupied tiles of `layer`.
    ///
    /// Ids follow row-major tile order. A character is the player when its tile
    /// carries `player_property` with a value of `true`.
    pub fn from_layer(map: &TileMap, layer: &TileLayer, player_property: &str) -> Self {
        let characters = layer
            .occupied()
            .enumerate()
            .map(|(index, (position, tile))| Character {
                id: CharacterId(index as u32),
                position,
                tile,
                is_player: map
                    .tile_property(tile, player_property)
                    .and_then(|property| property.as_bool())
                    .unwrap_or(false),
            })
            .collect();

        Self { characters }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|character| character.id == id)
    }

    /// First character flagged as the player.
    pub fn player(&self) -> Option<&Character> {
        self.characters.iter().find(|character| character.is_player)
    }

    pub fn character_at(&self, position: Position) -> Option<&Character> {
        self.characters
            .iter()
            .find(|character| character.position == position)
    }

    pub fn move_character(&mut self, id: CharacterId, to: Position) -> Result<(), CharacterError> {
        if let Some(occupant) = self.character_at(to) {
            if occupant.id == id {
                return Ok(());
            }
            return Err(CharacterError::Occupied(to));
        }

        let character = self
            .characters
            .iter_mut()
            .find(|character| character.id == id)
            .ok_or(CharacterError::NotFound(id))?;
        character.position = to;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{MapDimensions, Properties, Property, PropertyType, TileSize, property};

    fn map_with_characters() -> TileMap {
        let dims = MapDimensions::new(3, 3);
        let mut map = TileMap::new(dims, TileSize::new(16, 16));
        let mut layer = TileLayer::new("Characters", dims);
        layer.set_tile(Position::new(2, 0), 9);
        layer.set_tile(Position::new(1, 2), 5);
        map.push_layer(layer);

        let mut props = Properties::new();
        property::insert_property(
            &mut props,
            Property::with_type("IsPlayer", "true", PropertyType::Bool),
        );
        map.set_tile_properties(5, props);
        map
    }

    fn roster() -> CharacterManager {
        let map = map_with_characters();
        let layer = map.layer("Characters").unwrap();
        CharacterManager::from_layer(&map, layer, "IsPlayer")
    }

    #[test]
    fn builds_one_character_per_occupied_tile() {
        let roster = roster();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.characters()[0].position, Position::new(2, 0));
        assert_eq!(roster.characters()[0].id, CharacterId(0));
        assert_eq!(roster.characters()[1].tile, 5);
    }

    #[test]
    fn player_is_identified_by_tile_property() {
        let roster = roster();
        let player = roster.player().unwrap();

        assert_eq!(player.position, Position::new(1, 2));
        assert!(!roster.get(CharacterId(0)).unwrap().is_player);
    }

    #[test]
    fn moves_respect_occupancy() {
        let mut roster = roster();

        roster.move_character(CharacterId(0), Position::new(0, 0)).unwrap();
        assert!(roster.character_at(Position::new(0, 0)).is_some());

        let err = roster
            .move_character(CharacterId(0), Position::new(1, 2))
            .unwrap_err();
        assert_eq!(err, CharacterError::Occupied(Position::new(1, 2)));

        let err = roster
            .move_character(CharacterId(7), Position::new(2, 2))
            .unwrap_err();
        assert_eq!(err.error_code(), "CHARACTER_NOT_FOUND");
    }
}
