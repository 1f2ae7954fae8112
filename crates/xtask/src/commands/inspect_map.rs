//! Inspect Tiled maps
//!
//! Loads a `.tmx` file the same way levels do and prints what the level
//! pipeline sees: tile layers, object groups and typed properties.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use turnable_content::{ContentFactory, TmxLoader};
use turnable_core::{Properties, TileMap};

use crate::dirs;

/// Print the contents of a Tiled map
#[derive(Parser)]
pub struct InspectMap {
    /// Path to a .tmx file, or the name of a map under <data-dir>/maps
    #[arg(value_name = "MAP")]
    map: String,

    /// Custom data directory (defaults to TURNABLE_DATA_DIR or the platform location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Also list per-tile properties
    #[arg(long)]
    tiles: bool,
}

impl InspectMap {
    pub fn execute(self) -> Result<()> {
        let candidate = PathBuf::from(&self.map);
        let (path, map) = if candidate.is_file() {
            let map = TmxLoader::load(&candidate)
                .with_context(|| format!("Failed to load map: {}", candidate.display()))?;
            (candidate, map)
        } else {
            let factory = ContentFactory::new(dirs::data_dir(self.data_dir));
            let map = factory.load_map(&self.map)?;
            (factory.map_path(&self.map), map)
        };

        println!("{} {}", style("Map File:").bold().cyan(), path.display());
        print_map(&map, self.tiles);
        Ok(())
    }
}

fn print_map(map: &TileMap, with_tiles: bool) {
    let dims = map.dimensions();
    let tile_size = map.tile_size();
    println!(
        "{} {}x{} tiles ({}x{} px each), {} tileset tiles",
        style("Size:").bold().cyan(),
        dims.width,
        dims.height,
        tile_size.width,
        tile_size.height,
        map.tile_count()
    );
    print_properties("Map Properties", map.properties(), "");
    println!();

    println!("{}", style("Tile Layers:").bold().yellow());
    for layer in map.layers() {
        println!(
            "  {} ({} occupied / {})",
            style(layer.name()).bold(),
            layer.tile_count(),
            layer.dimensions().area()
        );
        print_properties("Properties", layer.properties(), "    ");
    }
    println!();

    println!("{}", style("Object Groups:").bold().yellow());
    for group in map.object_groups() {
        println!("  {} ({} objects)", style(&group.name).bold(), group.objects.len());
        for object in &group.objects {
            println!("    {} [{}] at {}", object.name, object.kind, object.position);
            print_properties("Properties", &object.properties, "      ");
        }
    }

    if with_tiles {
        println!();
        println!("{}", style("Tile Properties:").bold().yellow());
        for gid in 1..=map.tile_count() {
            if let Some(props) = map.tile_properties(gid) {
                print_properties(&format!("gid {}", gid), props, "  ");
            }
        }
    }
}

fn print_properties(label: &str, properties: &Properties, indent: &str) {
    if properties.is_empty() {
        return;
    }
    println!("{}{}:", indent, label);
    for property in properties.values() {
        println!(
            "{}  {} = {} ({})",
            indent,
            property.name(),
            property.value(),
            property.ty()
        );
    }
}
