//! In-memory tile map assembled from a Tiled source.
//!
//! The map is owned by the level it belongs to and stays mutable so that
//! randomizers can scatter tiles after loading. Loading itself happens in
//! `turnable-content`; this module only defines the resulting data.
mod layer;
mod object;
pub mod property;

use std::collections::BTreeMap;

pub use layer::TileLayer;
pub use object::{MapObject, ObjectGroup};
pub use property::{Properties, Property, PropertyError, PropertyType};

use crate::position::Position;

/// Global tile identifier. Gids start at 1; empty tiles are `None`.
pub type TileGid = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Pixel size of one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

impl TileSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    dimensions: MapDimensions,
    tile_size: TileSize,
    layers: Vec<TileLayer>,
    object_groups: Vec<ObjectGroup>,
    properties: Properties,
    tile_properties: BTreeMap<TileGid, Properties>,
    tile_count: u32,
}

impl TileMap {
    pub fn new(dimensions: MapDimensions, tile_size: TileSize) -> Self {
        Self {
            dimensions,
            tile_size,
            layers: Vec::new(),
            object_groups: Vec::new(),
            properties: Properties::new(),
            tile_properties: BTreeMap::new(),
            tile_count: 0,
        }
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    /// Total number of tiles across all tilesets; valid gids are `1..=tile_count`.
    pub fn tile_count(&self) -> u32 {
        self.tile_count
    }

    pub fn set_tile_count(&mut self, tile_count: u32) {
        self.tile_count = tile_count;
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    // ===== layers =====

    /// Appends a tile layer. Layers keep their source order (bottom first).
    pub fn push_layer(&mut self, layer: TileLayer) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[TileLayer] {
        &self.layers
    }

    pub fn layer(&self, name: &str) -> Option<&TileLayer> {
        self.layers.iter().find(|layer| layer.name() == name)
    }

    pub fn layer_mut(&mut self, name: &str) -> Option<&mut TileLayer> {
        self.layers.iter_mut().find(|layer| layer.name() == name)
    }

    // ===== objects =====

    pub fn push_object_group(&mut self, group: ObjectGroup) {
        self.object_groups.push(group);
    }

    pub fn object_groups(&self) -> &[ObjectGroup] {
        &self.object_groups
    }

    pub fn object_group(&self, name: &str) -> Option<&ObjectGroup> {
        self.object_groups.iter().find(|group| group.name == name)
    }

    // ===== per-tile metadata =====

    pub fn set_tile_properties(&mut self, gid: TileGid, properties: Properties) {
        if properties.is_empty() {
            self.tile_properties.remove(&gid);
        } else {
            self.tile_properties.insert(gid, properties);
        }
    }

    pub fn tile_properties(&self, gid: TileGid) -> Option<&Properties> {
        self.tile_properties.get(&gid)
    }

    pub fn tile_property(&self, gid: TileGid, name: &str) -> Option<&Property> {
        self.tile_properties(gid)?.get(name)
    }
}
