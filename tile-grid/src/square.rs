//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid::{tile_for_coordinate, Tile};
use crate::grid_iterator::TileIterator;
use std::fmt;

/// Axis-aligned square of tiles, anchored at its top-left tile
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Square {
    pub x: i32,
    pub y: i32,
    /// Side length in tiles
    pub size: i32,
}

impl Square {
    pub fn new(x: i32, y: i32, size: i32) -> Square {
        Square { x, y, size }
    }
    pub fn contains(&self, tile: &Tile) -> bool {
        let (x, y, size) = (self.x as i64, self.y as i64, self.size as i64);
        let (tx, ty) = (tile.x as i64, tile.y as i64);
        tx >= x && tx < x + size && ty >= y && ty < y + size
    }
    /// True if all tiles of the square lie within the `i32` tile coordinate range
    pub fn fits_grid(&self) -> bool {
        let last = self.size as i64 - 1;
        self.x as i64 + last <= i32::MAX as i64 && self.y as i64 + last <= i32::MAX as i64
    }
    /// True if the tile of the given position is part of the square
    pub fn contains_coordinate(&self, lat: f64, lon: f64) -> bool {
        self.contains(&tile_for_coordinate(lat, lon))
    }
    /// All tiles covered by the square
    pub fn tiles(&self) -> TileIterator {
        let (x, y, size) = (self.x as i64, self.y as i64, self.size as i64);
        TileIterator::new(x, y, x + size, y + size)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{} at {}/{}", self.size, self.size, self.x, self.y)
    }
}
