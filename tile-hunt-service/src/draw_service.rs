//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::collections::HashSet;
use std::fmt;
use std::time::Instant;
use tile_grid::{length_to_degrees, Square, Tile};
use tile_hunt_core::cluster::cluster_tiles;
use tile_hunt_core::core::config::InsetCfg;
use tile_hunt_core::core::geom::{Polyline, Segment};
use tile_hunt_core::core::stats::Statistics;
use tile_hunt_core::core::{ApplicationCfg, Config};
use tile_hunt_core::gridlines::grid_lines;
use tile_hunt_core::outline::cluster_outlines;

pub const DEFAULT_RADIUS: i32 = 3;
pub const MIN_RADIUS: i32 = 2;
pub const MAX_RADIUS: i32 = 5;

/// Outline inset in meters for a bucketed map zoom level
pub fn default_inset_meters(zoom: u8) -> f64 {
    match zoom {
        0..=10 => 175.0,
        11 => 125.0,
        12 => 75.0,
        13 => 37.5,
        14 => 25.0,
        15 => 15.0,
        16 => 10.0,
        _ => 5.0,
    }
}

/// Map zoom rounded to the nearest even level
pub fn bucket_zoom(zoom: f64) -> u8 {
    let bucket = (zoom / 2.0).round() * 2.0;
    if bucket <= 0.0 {
        0
    } else if bucket >= u8::MAX as f64 {
        u8::MAX
    } else {
        bucket as u8
    }
}

/// Draw radius in tiles
pub fn clamp_radius(radius: Option<i32>) -> i32 {
    match radius {
        Some(r) if r > 0 => r.max(MIN_RADIUS).min(MAX_RADIUS),
        _ => DEFAULT_RADIUS,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawSettings {
    pub radius: i32,
    pub grid_lines: bool,
    /// Inset overrides, sorted by `max_zoom`
    pub insets: Vec<InsetCfg>,
}

impl Default for DrawSettings {
    fn default() -> DrawSettings {
        DrawSettings {
            radius: DEFAULT_RADIUS,
            grid_lines: true,
            insets: Vec::new(),
        }
    }
}

impl DrawSettings {
    /// Outline inset in meters at map zoom `zoom`
    pub fn inset_meters(&self, zoom: f64) -> f64 {
        let bucket = bucket_zoom(zoom);
        self.insets
            .iter()
            .find(|inset| bucket <= inset.max_zoom)
            .map(|inset| inset.meters)
            .unwrap_or_else(|| default_inset_meters(bucket))
    }
    /// Outline inset in degrees at map zoom `zoom`
    pub fn inset_degrees(&self, zoom: f64) -> f64 {
        length_to_degrees(self.inset_meters(zoom))
    }
}

impl<'a> Config<'a, ApplicationCfg> for DrawSettings {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let mut insets = config.draw.inset.clone();
        if let Some(inset) = insets.iter().find(|inset| inset.meters < 0.0) {
            return Err(format!(
                "Negative inset {} for max_zoom {}",
                inset.meters, inset.max_zoom
            ));
        }
        insets.sort_by_key(|inset| inset.max_zoom);
        Ok(DrawSettings {
            radius: clamp_radius(config.draw.radius),
            grid_lines: config.draw.grid_lines,
            insets,
        })
    }
    fn gen_config() -> String {
        TOML_DRAW.to_string()
    }
}

const TOML_DRAW: &'static str = r#"# tile hunt configuration

[draw]
# Number of tiles drawn around the current position (2-5)
radius = 3
# Draw lines between adjacent tiles
grid_lines = true

# Outline inset in meters up to the given map zoom level
#[[draw.inset]]
#max_zoom = 10
#meters = 175.0
"#;

/// Tile categories of one draw cycle
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Category {
    Recent,
    Square,
    Surrounded,
    Explored,
    Unexplored,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Recent,
        Category::Square,
        Category::Surrounded,
        Category::Explored,
        Category::Unexplored,
    ];
    pub fn name(&self) -> &'static str {
        match self {
            Category::Recent => "recent",
            Category::Square => "square",
            Category::Surrounded => "surrounded",
            Category::Explored => "explored",
            Category::Unexplored => "unexplored",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drawable geometries of one category
#[derive(Clone, Debug)]
pub struct Layer {
    pub category: Category,
    pub outlines: Vec<Polyline>,
    pub grid_lines: Vec<Segment>,
}

/// Result of a draw cycle, one layer per category in `Category::ALL` order
#[derive(Clone, Debug)]
pub struct DrawCycle {
    pub center: Tile,
    pub view: Square,
    pub square: Option<Square>,
    pub layers: Vec<Layer>,
}

impl DrawCycle {
    pub fn layer(&self, category: Category) -> Option<&Layer> {
        self.layers.iter().find(|l| l.category == category)
    }
}

/// Tile sets of one draw cycle, split into disjoint categories
#[derive(Clone, Debug, Default)]
pub struct Categories {
    pub recent: HashSet<Tile>,
    pub square: HashSet<Tile>,
    pub surrounded: HashSet<Tile>,
    pub explored: HashSet<Tile>,
    pub unexplored: HashSet<Tile>,
}

impl Categories {
    pub fn get(&self, category: Category) -> &HashSet<Tile> {
        match category {
            Category::Recent => &self.recent,
            Category::Square => &self.square,
            Category::Surrounded => &self.surrounded,
            Category::Explored => &self.explored,
            Category::Unexplored => &self.unexplored,
        }
    }
}

/// Composes the tile geometry drawn around the current position
pub struct DrawService {
    pub settings: DrawSettings,
}

impl DrawService {
    pub fn new(settings: DrawSettings) -> DrawService {
        DrawService { settings }
    }
    /// Visible tile window around `center`
    pub fn view(&self, center: &Tile) -> Square {
        let r = self.settings.radius;
        Square::new(center.x.saturating_sub(r), center.y.saturating_sub(r), 2 * r)
    }
    fn in_range(&self, tile: &Tile, center: &Tile) -> bool {
        let r = self.settings.radius as i64;
        (tile.x as i64 - center.x as i64).abs() <= r && (tile.y as i64 - center.y as i64).abs() <= r
    }
    /// Split the tiles around `center` into categories
    pub fn categorize(
        &self,
        explored: &HashSet<Tile>,
        recent: &HashSet<Tile>,
        square: Option<&Square>,
        center: &Tile,
    ) -> Categories {
        let mut categories = Categories::default();
        categories.recent = recent
            .iter()
            .filter(|t| self.in_range(t, center))
            .cloned()
            .collect();
        for tile in explored.iter().filter(|t| self.in_range(t, center)) {
            if categories.recent.contains(tile) {
                continue;
            }
            if square.map_or(false, |sq| sq.contains(tile)) {
                categories.square.insert(*tile);
            } else if tile.is_surrounded(explored) {
                categories.surrounded.insert(*tile);
            } else {
                categories.explored.insert(*tile);
            }
        }
        categories.unexplored = self
            .view(center)
            .tiles()
            .filter(|t| !explored.contains(t) && !recent.contains(t))
            .collect();
        categories
    }
    /// Outlines and grid lines of all categories around `center`
    pub fn draw(
        &self,
        explored: &HashSet<Tile>,
        recent: &HashSet<Tile>,
        square: Option<&Square>,
        center: &Tile,
        zoom: f64,
        mut stats: Option<&mut Statistics>,
    ) -> DrawCycle {
        let inset = self.settings.inset_degrees(zoom);
        debug!(
            "draw cycle at {:?} zoom {} (inset {:.8} deg)",
            center, zoom, inset
        );
        let categories = self.categorize(explored, recent, square, center);
        let mut layers = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL.iter() {
            let now = Instant::now();
            let mut layer = Layer {
                category: *category,
                outlines: Vec::new(),
                grid_lines: Vec::new(),
            };
            let clusters = cluster_tiles(categories.get(*category));
            for cluster in &clusters {
                layer.outlines.extend(cluster_outlines(cluster, inset));
                if self.settings.grid_lines {
                    layer.grid_lines.extend(grid_lines(cluster));
                }
                if let Some(ref mut stats) = stats {
                    stats.add(&format!("{}.cluster_tiles", category), cluster.len() as u64);
                }
            }
            if let Some(ref mut stats) = stats {
                stats.add(&format!("{}.clusters", category), clusters.len() as u64);
                stats.add(&format!("{}.rings", category), layer.outlines.len() as u64);
                stats.add_duration(&format!("{}.time_us", category), now.elapsed());
            }
            debug!(
                "{}: {} clusters, {} rings, {} grid lines",
                category,
                clusters.len(),
                layer.outlines.len(),
                layer.grid_lines.len()
            );
            layers.push(layer);
        }
        DrawCycle {
            center: *center,
            view: self.view(center),
            square: square.cloned(),
            layers,
        }
    }
}
