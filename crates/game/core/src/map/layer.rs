use super::{MapDimensions, Properties, TileGid};
use crate::position::Position;

/// Grid of tile gids addressed in tile coordinates, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileLayer {
    name: String,
    dimensions: MapDimensions,
    tiles: Vec<Option<TileGid>>,
    properties: Properties,
}

impl TileLayer {
    /// Creates an empty layer.
    pub fn new(name: impl Into<String>, dimensions: MapDimensions) -> Self {
        Self {
            name: name.into(),
            dimensions,
            tiles: vec![None; dimensions.area()],
            properties: Properties::new(),
        }
    }

    /// Creates a layer from row-major tile data.
    ///
    /// Data shorter than the layer is padded with empty tiles, longer data is
    /// truncated.
    pub fn from_tiles(
        name: impl Into<String>,
        dimensions: MapDimensions,
        mut tiles: Vec<Option<TileGid>>,
    ) -> Self {
        tiles.resize(dimensions.area(), None);
        Self {
            name: name.into(),
            dimensions,
            tiles,
            properties: Properties::new(),
        }
    }

    #[must_use]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn tile(&self, position: Position) -> Option<TileGid> {
        self.index(position).and_then(|index| self.tiles[index])
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.tile(position).is_some()
    }

    /// Writes a tile. Returns false when the position lies outside the layer.
    pub fn set_tile(&mut self, position: Position, gid: TileGid) -> bool {
        self.write(position, Some(gid))
    }

    pub fn clear_tile(&mut self, position: Position) -> bool {
        self.write(position, None)
    }

    /// Occupied tiles in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, TileGid)> + '_ {
        self.tiles.iter().enumerate().filter_map(|(index, tile)| {
            tile.map(|gid| (self.position_of(index), gid))
        })
    }

    /// Empty tiles in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_none())
            .map(|(index, _)| self.position_of(index))
            .collect()
    }

    /// Number of occupied tiles.
    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_some()).count()
    }

    fn write(&mut self, position: Position, tile: Option<TileGid>) -> bool {
        match self.index(position) {
            Some(index) => {
                self.tiles[index] = tile;
                true
            }
            None => false,
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.dimensions
            .contains(position)
            .then(|| position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    fn position_of(&self, index: usize) -> Position {
        let width = self.dimensions.width as usize;
        Position::new((index % width) as i32, (index / width) as i32)
    }
}
