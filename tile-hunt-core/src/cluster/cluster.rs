//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Connected tile clusters

use std::collections::{HashSet, VecDeque};
use tile_grid::Tile;

/// Maximal group of tiles connected through shared edges
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Cluster {
    tiles: HashSet<Tile>,
}

impl Cluster {
    pub fn tiles(&self) -> &HashSet<Tile> {
        &self.tiles
    }
    pub fn contains(&self, tile: &Tile) -> bool {
        self.tiles.contains(tile)
    }
    pub fn len(&self) -> usize {
        self.tiles.len()
    }
    /// Tiles ordered by row, then column
    pub fn sorted_tiles(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = self.tiles.iter().cloned().collect();
        tiles.sort_by_key(|t| (t.y, t.x));
        tiles
    }
}

/// Partition `tiles` into 4-connected clusters
///
/// Every tile ends up in exactly one cluster. Cluster order follows the
/// iteration order of `tiles`.
pub fn cluster_tiles(tiles: &HashSet<Tile>) -> Vec<Cluster> {
    let mut remaining = tiles.clone();
    let mut clusters = Vec::new();
    let mut queue = VecDeque::new();

    for seed in tiles {
        if !remaining.remove(seed) {
            continue;
        }
        let mut members = HashSet::new();
        members.insert(*seed);
        queue.push_back(*seed);
        while let Some(tile) = queue.pop_front() {
            for neighbour in tile.neighbours().iter().flatten() {
                if remaining.remove(neighbour) {
                    members.insert(*neighbour);
                    queue.push_back(*neighbour);
                }
            }
        }
        debug!("cluster of {} tiles seeded at {:?}", members.len(), seed);
        clusters.push(Cluster { tiles: members });
    }
    clusters
}
