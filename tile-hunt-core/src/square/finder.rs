//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Largest fully explored square

use std::collections::{HashMap, HashSet};
use tile_grid::{Square, Tile};

fn is_covered(tiles: &HashSet<Tile>, square: &Square) -> bool {
    square.fits_grid() && square.tiles().all(|t| tiles.contains(&t))
}

/// Largest square whose tiles are all contained in `tiles`
///
/// Every tile is tried as top-left corner of a square growing to the right and
/// downwards. Tiles are visited ordered by column, then row; the first square
/// found with the maximal size wins. Returns `None` for an empty set.
pub fn largest_square(tiles: &HashSet<Tile>) -> Option<Square> {
    let mut candidates: Vec<&Tile> = tiles.iter().collect();
    candidates.sort();

    let mut best: Option<Square> = None;
    for tile in candidates {
        // Only squares beating the current best are of interest
        let mut size = best.map_or(1, |sq| sq.size + 1);
        while is_covered(tiles, &Square::new(tile.x, tile.y, size)) {
            best = Some(Square::new(tile.x, tile.y, size));
            size += 1;
        }
    }
    if let Some(ref square) = best {
        debug!("largest square of {} tiles: {}", tiles.len(), square);
    }
    best
}

/// Largest square using dynamic programming over the tile set
///
/// Same size as `largest_square`, but O(n log n) in the number of tiles and
/// independent of how far apart they lie. Ties are resolved towards the
/// smallest row, then column of the top-left corner.
pub fn largest_square_dense(tiles: &HashSet<Tile>) -> Option<Square> {
    let mut ordered: Vec<&Tile> = tiles.iter().collect();
    ordered.sort_by_key(|t| (t.y, t.x));

    // side of the largest square with its bottom-right corner at the tile
    let mut sizes: HashMap<Tile, i32> = HashMap::with_capacity(tiles.len());
    let mut best: Option<Square> = None;
    for tile in ordered {
        let size_at = |x: Option<i32>, y: Option<i32>| match (x, y) {
            (Some(x), Some(y)) => sizes.get(&Tile::new(x, y)).cloned().unwrap_or(0),
            _ => 0,
        };
        let (left, up) = (tile.x.checked_sub(1), tile.y.checked_sub(1));
        let size = 1 + size_at(left, Some(tile.y))
            .min(size_at(Some(tile.x), up))
            .min(size_at(left, up));
        sizes.insert(*tile, size);
        let top_left = Square::new(tile.x - (size - 1), tile.y - (size - 1), size);
        match best {
            Some(sq) if sq.size > size => {}
            Some(sq) if sq.size == size && (sq.y, sq.x) <= (top_left.y, top_left.x) => {}
            _ => best = Some(top_left),
        }
    }
    if let Some(ref square) = best {
        debug!("largest square of {} tiles: {}", tiles.len(), square);
    }
    best
}
