//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile set files

use serde_json;
use std::collections::HashSet;
use std::fs::File;
use std::io::prelude::*;
use tile_grid::Tile;

#[derive(Serialize, Deserialize, Debug)]
struct TileSetsJson {
    explored: Vec<[i32; 2]>,
    #[serde(default)]
    recent: Vec<[i32; 2]>,
}

fn to_tiles(coords: &[[i32; 2]]) -> HashSet<Tile> {
    coords.iter().map(|c| Tile::new(c[0], c[1])).collect()
}

fn to_coords(tiles: &HashSet<Tile>) -> Vec<[i32; 2]> {
    let mut sorted: Vec<&Tile> = tiles.iter().collect();
    sorted.sort();
    sorted.iter().map(|t| [t.x, t.y]).collect()
}

/// Explored and recently explored tiles
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileSets {
    pub explored: HashSet<Tile>,
    pub recent: HashSet<Tile>,
}

impl TileSets {
    /// Parse `{"explored": [[x, y], ...], "recent": [[x, y], ...]}`
    pub fn from_json(json: &str) -> Result<TileSets, String> {
        let parsed: TileSetsJson =
            serde_json::from_str(json).map_err(|e| format!("Invalid tile file: {}", e))?;
        Ok(TileSets {
            explored: to_tiles(&parsed.explored),
            recent: to_tiles(&parsed.recent),
        })
    }
    /// Serialize with tiles ordered by column, then row
    pub fn to_json(&self) -> String {
        let json = TileSetsJson {
            explored: to_coords(&self.explored),
            recent: to_coords(&self.recent),
        };
        // Vectors of integer pairs always serialize
        serde_json::to_string(&json).unwrap_or_default()
    }
}

/// Load tile sets from a JSON file
pub fn read_tile_sets(path: &str) -> Result<TileSets, String> {
    let mut file = File::open(path).map_err(|e| format!("Could not open tile file {}: {}", path, e))?;
    let mut json = String::new();
    file.read_to_string(&mut json)
        .map_err(|e| format!("Error while reading tile file {}: {}", path, e))?;
    TileSets::from_json(&json).map_err(|e| format!("{} - {}", path, e))
}
