//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//!Slippy map tile grid

use std::collections::HashSet;
use std::f64::consts;

/// Zoom level of the tile grid
pub const DEFAULT_ZOOM: u8 = 14;

/// Mean earth radius used for length conversions (turf convention)
const EARTH_RADIUS: f64 = 6371008.8;

/// Tolerance for comparing geographic coordinates, in degrees
pub const EPSILON: f64 = 1e-6;

/// Number of tiles per axis at `DEFAULT_ZOOM`
fn tiles_per_axis() -> f64 {
    2f64.powi(DEFAULT_ZOOM as i32)
}

/// Geographic position in degrees
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint { lon, lat }
    }
    /// Equality within `EPSILON` on both axes
    pub fn approx_eq(&self, other: &GeoPoint) -> bool {
        (self.lon - other.lon).abs() < EPSILON && (self.lat - other.lat).abs() < EPSILON
    }
}

/// Tile corners
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Grid cell at `DEFAULT_ZOOM` in XYZ adressing scheme
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub fn new(x: i32, y: i32) -> Tile {
        Tile { x, y }
    }
    /// Neighbours sharing an edge, ordered north, east, south, west
    ///
    /// Neighbours outside the `i32` coordinate range are `None`.
    pub fn neighbours(&self) -> [Option<Tile>; 4] {
        let (x, y) = (self.x, self.y);
        [
            y.checked_sub(1).map(|y| Tile::new(x, y)),
            x.checked_add(1).map(|x| Tile::new(x, y)),
            y.checked_add(1).map(|y| Tile::new(x, y)),
            x.checked_sub(1).map(|x| Tile::new(x, y)),
        ]
    }
    /// True if `other` differs by exactly one step along a single axis
    pub fn is_neighbour(&self, other: &Tile) -> bool {
        let dx = (self.x as i64 - other.x as i64).abs();
        let dy = (self.y as i64 - other.y as i64).abs();
        dx + dy == 1
    }
    /// True if all four edge neighbours are contained in `tiles`
    pub fn is_surrounded(&self, tiles: &HashSet<Tile>) -> bool {
        self.neighbours()
            .iter()
            .all(|n| n.map_or(false, |t| tiles.contains(&t)))
    }
    pub fn corner(&self, corner: Corner) -> GeoPoint {
        // Right and bottom edges belong to the next tile index
        let (x, y) = (self.x as i64, self.y as i64);
        match corner {
            Corner::TopLeft => vertex_point(x, y),
            Corner::TopRight => vertex_point(x + 1, y),
            Corner::BottomLeft => vertex_point(x, y + 1),
            Corner::BottomRight => vertex_point(x + 1, y + 1),
        }
    }
    /// Corners in drawing order top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [GeoPoint; 4] {
        [
            self.corner(Corner::TopLeft),
            self.corner(Corner::TopRight),
            self.corner(Corner::BottomRight),
            self.corner(Corner::BottomLeft),
        ]
    }
    pub fn center(&self) -> GeoPoint {
        let tl = self.corner(Corner::TopLeft);
        let br = self.corner(Corner::BottomRight);
        GeoPoint::new((tl.lon + br.lon) / 2.0, (tl.lat + br.lat) / 2.0)
    }
    /// True if `point` lies strictly inside the tile shrunk by `margin` degrees on every side
    pub fn is_inside_with_margin(&self, point: &GeoPoint, margin: f64) -> bool {
        let tl = self.corner(Corner::TopLeft);
        let br = self.corner(Corner::BottomRight);
        let lon = normalize_longitude(point.lon);
        lon > normalize_longitude(tl.lon) + margin
            && lon < normalize_longitude(br.lon) - margin
            && point.lat < tl.lat - margin
            && point.lat > br.lat + margin
    }
}

/// Tile containing the given position
///
/// Standard slippy map formulas:
///   x = floor((lon + 180) / 360 * n)
///   y = floor((1 - ln(tan(lat_rad) + sec(lat_rad)) / pi) / 2 * n)
pub fn tile_for_coordinate(lat: f64, lon: f64) -> Tile {
    let n = tiles_per_axis();
    let lat_rad = lat.to_radians();
    let x = ((lon + 180.0) / 360.0 * n).floor();
    let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / consts::PI) / 2.0 * n).floor();
    Tile::new(x as i32, y as i32)
}

/// Longitude of the western edge of tile column `x`
pub fn lon_of_x(x: i64) -> f64 {
    x as f64 / tiles_per_axis() * 360.0 - 180.0
}

/// Latitude of the northern edge of tile row `y`
pub fn lat_of_y(y: i64) -> f64 {
    let n = tiles_per_axis();
    let lat_rad = (consts::PI * (1.0 - 2.0 * y as f64 / n)).sinh().atan();
    lat_rad.to_degrees()
}

/// Position of the grid vertex between tiles (x-1, y-1) and (x, y)
pub fn vertex_point(x: i64, y: i64) -> GeoPoint {
    GeoPoint::new(lon_of_x(x), lat_of_y(y))
}

/// Longitude wrapped into [-180, 180)
pub fn normalize_longitude(lon: f64) -> f64 {
    ((lon + 180.0) % 360.0 + 360.0) % 360.0 - 180.0
}

/// Converts a length in meters to degrees of arc
pub fn length_to_degrees(meters: f64) -> f64 {
    (meters / EARTH_RADIUS).to_degrees()
}
