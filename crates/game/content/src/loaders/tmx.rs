//! Tiled map (`.tmx`) loader.
//!
//! Parses maps with the `tiled` crate and converts them into the owned,
//! mutable [`TileMap`] used by levels:
//! - Tile layers become gid grids (group layers are flattened in source order)
//! - Object layers become [`ObjectGroup`]s with tile-space anchors
//! - Map, layer, tile and object properties become typed [`Property`] entries
//!
//! Image layers carry nothing a level needs and are skipped.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tiled::{LayerType, ObjectShape, PropertyValue};
use turnable_core::map::property::insert_property;
use turnable_core::{
    ErrorSeverity, GameError, MapDimensions, MapObject, ObjectGroup, Position, Properties,
    Property, PropertyType, TileGid, TileLayer, TileMap, TileSize,
};

/// Failure to turn a `.tmx` file into a [`TileMap`].
#[derive(Debug, Error)]
pub enum MapLoadError {
    #[error("map file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to load map {path}: {source}")]
    Tiled {
        path: PathBuf,
        #[source]
        source: tiled::Error,
    },

    #[error("map {0} is infinite; only finite maps can back a level")]
    InfiniteMap(PathBuf),
}

impl GameError for MapLoadError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "MAP_NOT_FOUND",
            Self::Tiled { .. } => "MAP_PARSE_FAILED",
            Self::InfiniteMap(_) => "MAP_INFINITE",
        }
    }
}

/// Loader for Tiled maps.
pub struct TmxLoader;

impl TmxLoader {
    /// Load a map from a `.tmx` file.
    ///
    /// External tilesets (`.tsx`) are resolved relative to the map file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a finite orthogonal Tiled map
    ///
    /// # Returns
    ///
    /// Returns the converted TileMap, or [`MapLoadError::NotFound`],
    /// [`MapLoadError::Tiled`] or [`MapLoadError::InfiniteMap`].
    pub fn load(path: &Path) -> Result<TileMap, MapLoadError> {
        if !path.is_file() {
            return Err(MapLoadError::NotFound(path.to_path_buf()));
        }

        let mut loader = tiled::Loader::new();
        let map = loader
            .load_tmx_map(path)
            .map_err(|source| MapLoadError::Tiled {
                path: path.to_path_buf(),
                source,
            })?;

        if map.infinite() {
            return Err(MapLoadError::InfiniteMap(path.to_path_buf()));
        }

        let tile_map = convert_map(&map);
        tracing::debug!(
            "Parsed {}: {}x{} tiles, {} tile layers, {} object groups",
            path.display(),
            map.width,
            map.height,
            tile_map.layers().len(),
            tile_map.object_groups().len()
        );

        Ok(tile_map)
    }
}

fn convert_map(map: &tiled::Map) -> TileMap {
    let dimensions = MapDimensions::new(map.width, map.height);
    let tile_size = TileSize::new(map.tile_width, map.tile_height);
    let mut tile_map = TileMap::new(dimensions, tile_size);
    *tile_map.properties_mut() = convert_properties(&map.properties);

    // First gid of each tileset, in tileset_index order. Gids start at 1.
    let first_gids = first_gids(map.tilesets());
    let mut tile_count = 0;
    for (tileset, first_gid) in map.tilesets().iter().zip(&first_gids) {
        for (tile_id, tile) in tileset.tiles() {
            let properties = convert_properties(&tile.properties);
            tile_map.set_tile_properties(first_gid + tile_id, properties);
        }
        tile_count += tileset.tilecount;
    }
    tile_map.set_tile_count(tile_count);

    collect_layers(map.layers(), &first_gids, tile_size, &mut tile_map);
    tile_map
}

fn first_gids(tilesets: &[Arc<tiled::Tileset>]) -> Vec<TileGid> {
    let mut next = 1;
    tilesets
        .iter()
        .map(|tileset| {
            let first = next;
            next += tileset.tilecount;
            first
        })
        .collect()
}

fn collect_layers<'map>(
    layers: impl Iterator<Item = tiled::Layer<'map>>,
    first_gids: &[TileGid],
    tile_size: TileSize,
    tile_map: &mut TileMap,
) {
    for layer in layers {
        match layer.layer_type() {
            LayerType::Tiles(tiles) => {
                let (Some(width), Some(height)) = (tiles.width(), tiles.height()) else {
                    tracing::warn!("Skipping infinite tile layer '{}'", layer.name);
                    continue;
                };
                let dimensions = MapDimensions::new(width, height);

                let mut data = Vec::with_capacity(dimensions.area());
                for y in 0..height as i32 {
                    for x in 0..width as i32 {
                        data.push(tiles.get_tile(x, y).and_then(|tile| {
                            first_gids
                                .get(tile.tileset_index())
                                .map(|first_gid| first_gid + tile.id())
                        }));
                    }
                }

                tile_map.push_layer(
                    TileLayer::from_tiles(layer.name.clone(), dimensions, data)
                        .with_properties(convert_properties(&layer.properties)),
                );
            }
            LayerType::Objects(objects) => {
                let objects = objects
                    .objects()
                    .map(|object| {
                        MapObject::new(
                            object.name.clone(),
                            object.user_type.clone(),
                            anchor_tile(
                                object.x,
                                object.y,
                                &object.shape,
                                object.tile_data().is_some(),
                                tile_size,
                            ),
                        )
                        .with_properties(convert_properties(&object.properties))
                    })
                    .collect();

                let mut group = ObjectGroup::new(layer.name.clone(), objects);
                group.properties = convert_properties(&layer.properties);
                tile_map.push_object_group(group);
            }
            LayerType::Group(group) => {
                collect_layers(group.layers(), first_gids, tile_size, tile_map);
            }
            LayerType::Image(_) => {}
        }
    }
}

/// Tile an object sits on: the center tile for rectangles, the anchor tile otherwise.
///
/// # Arguments
///
/// * `x`, `y` - Object position in pixels
/// * `shape` - Object shape as parsed by `tiled`
/// * `tile_object` - Whether the object was placed with a `gid`
/// * `tile_size` - Map tile size in pixels
///
/// # Returns
///
/// The tile coordinate under the object's center or anchor point
fn anchor_tile(
    x: f32,
    y: f32,
    shape: &ObjectShape,
    tile_object: bool,
    tile_size: TileSize,
) -> Position {
    // Tile objects are anchored at their bottom-left corner.
    let (x, y) = match shape {
        ObjectShape::Rect { width, height } if tile_object => {
            (x + width / 2.0, y - height / 2.0)
        }
        ObjectShape::Rect { width, height } => (x + width / 2.0, y + height / 2.0),
        _ => (x, y),
    };
    Position::new(
        (x / tile_size.width.max(1) as f32).floor() as i32,
        (y / tile_size.height.max(1) as f32).floor() as i32,
    )
}

fn convert_properties(properties: &tiled::Properties) -> Properties {
    let mut converted = Properties::new();
    for (name, value) in properties {
        insert_property(&mut converted, convert_property(name, value));
    }
    converted
}

/// Converts a parsed Tiled value back to its textual form plus type tag.
pub fn convert_property(name: &str, value: &PropertyValue) -> Property {
    let (text, ty) = match value {
        PropertyValue::BoolValue(b) => (b.to_string(), PropertyType::Bool),
        PropertyValue::IntValue(i) => (i.to_string(), PropertyType::Int),
        PropertyValue::FloatValue(f) => (f.to_string(), PropertyType::Float),
        PropertyValue::StringValue(s) => (s.clone(), PropertyType::String),
        PropertyValue::FileValue(path) => (path.clone(), PropertyType::File),
        PropertyValue::ObjectValue(id) => (id.to_string(), PropertyType::Object),
        PropertyValue::ColorValue(color) => (
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                color.alpha, color.red, color.green, color.blue
            ),
            PropertyType::Color,
        ),
        PropertyValue::ClassValue { property_type, .. } => {
            (property_type.clone(), PropertyType::Class)
        }
    };
    Property::with_type(name, text, ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_scalar_values_to_text() {
        let prop = convert_property("Hp", &PropertyValue::IntValue(42));
        assert_eq!(prop.value(), "42");
        assert_eq!(prop.ty(), PropertyType::Int);
        assert_eq!(prop.as_int(), Some(42));

        let prop = convert_property("IsPlayer", &PropertyValue::BoolValue(true));
        assert_eq!(prop.as_bool(), Some(true));
        assert_eq!(prop.ty(), PropertyType::Bool);
    }

    #[test]
    fn colors_render_as_argb_hex() {
        let color = tiled::Color {
            alpha: 0xff,
            red: 0x33,
            green: 0x66,
            blue: 0x99,
        };
        let prop = convert_property("Ambient", &PropertyValue::ColorValue(color));
        assert_eq!(prop.value(), "#ff336699");
        assert_eq!(prop.ty(), PropertyType::Color);
    }

    #[test]
    fn rectangle_objects_anchor_on_their_center_tile() {
        let shape = ObjectShape::Rect {
            width: 16.0,
            height: 16.0,
        };
        let tile_size = TileSize::new(16, 16);
        assert_eq!(
            anchor_tile(112.0, 80.0, &shape, false, tile_size),
            Position::new(7, 5)
        );
        assert_eq!(
            anchor_tile(40.0, 8.0, &ObjectShape::Point(40.0, 8.0), false, tile_size),
            Position::new(2, 0)
        );
    }

    #[test]
    fn tile_objects_anchor_from_their_bottom_edge() {
        let shape = ObjectShape::Rect {
            width: 16.0,
            height: 16.0,
        };
        let tile_size = TileSize::new(16, 16);
        assert_eq!(
            anchor_tile(48.0, 80.0, &shape, true, tile_size),
            Position::new(3, 4)
        );
        // A tile object resting on the map's bottom edge stays on the last row.
        assert_eq!(
            anchor_tile(0.0, 96.0, &shape, true, tile_size),
            Position::new(0, 5)
        );
    }

    #[test]
    fn missing_file_is_reported_before_parsing() {
        let err = TmxLoader::load(Path::new("/definitely/not/here.tmx")).unwrap_err();
        assert!(matches!(err, MapLoadError::NotFound(_)));
        assert_eq!(err.error_code(), "MAP_NOT_FOUND");
    }
}
