//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Exploration tracking

use std::collections::HashSet;
use tile_grid::{length_to_degrees, tile_for_coordinate, GeoPoint, Square, Tile};
use tile_hunt_core::core::{ApplicationCfg, Config};
use tile_hunt_core::square::largest_square;

#[derive(Clone, Debug, PartialEq)]
pub struct ExploreSettings {
    /// Distance in meters a position must keep from the tile border
    pub margin: f64,
}

impl<'a> Config<'a, ApplicationCfg> for ExploreSettings {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        if config.explore.margin < 0.0 {
            return Err(format!("Negative explore margin {}", config.explore.margin));
        }
        Ok(ExploreSettings {
            margin: config.explore.margin,
        })
    }
    fn gen_config() -> String {
        TOML_EXPLORE.to_string()
    }
}

const TOML_EXPLORE: &'static str = r#"
[explore]
# Meters a position has to be inside a tile to explore it
margin = 5.0
"#;

/// Explored tiles together with their largest square
pub struct ExploreTracker {
    explored: HashSet<Tile>,
    square: Option<Square>,
    margin: f64,
}

impl ExploreTracker {
    pub fn new(explored: HashSet<Tile>, settings: &ExploreSettings) -> ExploreTracker {
        let square = largest_square(&explored);
        ExploreTracker {
            explored,
            square,
            margin: length_to_degrees(settings.margin),
        }
    }
    pub fn explored(&self) -> &HashSet<Tile> {
        &self.explored
    }
    pub fn square(&self) -> Option<&Square> {
        self.square.as_ref()
    }
    /// Register a position, returning the tile it newly explored
    ///
    /// Positions closer to the tile border than the margin are ignored.
    pub fn visit(&mut self, lat: f64, lon: f64) -> Option<Tile> {
        let tile = tile_for_coordinate(lat, lon);
        if self.explored.contains(&tile) {
            return None;
        }
        if !tile.is_inside_with_margin(&GeoPoint::new(lon, lat), self.margin) {
            debug!("{},{} too close to the border of {:?}", lat, lon, tile);
            return None;
        }
        self.explored.insert(tile);
        self.square = largest_square(&self.explored);
        info!("explored tile {}/{}", tile.x, tile.y);
        Some(tile)
    }
}
