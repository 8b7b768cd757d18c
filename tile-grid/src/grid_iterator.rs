//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid iterators

use crate::grid::Tile;

/// Row-by-row iterator over a rectangular tile range
pub struct TileIterator {
    x: i64,
    y: i64,
    minx: i64,
    maxx: i64,
    maxy: i64,
    finished: bool,
}

impl TileIterator {
    /// Tiles with `minx <= x < maxx` and `miny <= y < maxy`.
    /// Ranges are clipped to the `i32` tile coordinate range.
    pub fn new(minx: i64, miny: i64, maxx: i64, maxy: i64) -> TileIterator {
        let lower = i32::MIN as i64;
        let upper = i32::MAX as i64 + 1;
        let (minx, miny) = (minx.max(lower), miny.max(lower));
        let (maxx, maxy) = (maxx.min(upper), maxy.min(upper));
        TileIterator {
            x: minx,
            y: miny,
            minx,
            maxx,
            maxy,
            // Return "empty" iterator for empty ranges
            finished: minx >= maxx || miny >= maxy,
        }
    }
}

impl Iterator for TileIterator {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = Tile::new(self.x as i32, self.y as i32);
        if self.x < self.maxx - 1 {
            self.x += 1;
        } else if self.y < self.maxy - 1 {
            self.x = self.minx;
            self.y += 1;
        } else {
            self.finished = true;
        }
        Some(current)
    }
}
