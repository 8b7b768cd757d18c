//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Internal grid lines of a cluster

use crate::cluster::Cluster;
use crate::core::geom::Segment;
use std::cmp::Ordering;
use tile_grid::{vertex_point, GeoPoint, Tile, EPSILON};

/// Orientation of an axis-parallel segment
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Axis {
    /// Fixed longitude, extending over latitudes
    Vertical,
    /// Fixed latitude, extending over longitudes
    Horizontal,
}

/// Axis-parallel segment with `start <= end`
#[derive(PartialEq, Clone, Debug)]
pub struct AxisSegment {
    pub axis: Axis,
    /// Longitude of vertical, latitude of horizontal segments
    pub fixed: f64,
    pub start: f64,
    pub end: f64,
}

impl AxisSegment {
    pub fn new(axis: Axis, fixed: f64, a: f64, b: f64) -> AxisSegment {
        AxisSegment {
            axis,
            fixed,
            start: a.min(b),
            end: a.max(b),
        }
    }
    /// Build from two positions on a common meridian or parallel
    fn between(axis: Axis, p1: GeoPoint, p2: GeoPoint) -> AxisSegment {
        match axis {
            Axis::Vertical => AxisSegment::new(axis, p1.lon, p1.lat, p2.lat),
            Axis::Horizontal => AxisSegment::new(axis, p1.lat, p1.lon, p2.lon),
        }
    }
    pub fn to_segment(&self) -> Segment {
        match self.axis {
            Axis::Vertical => Segment::new(
                GeoPoint::new(self.fixed, self.start),
                GeoPoint::new(self.fixed, self.end),
            ),
            Axis::Horizontal => Segment::new(
                GeoPoint::new(self.start, self.fixed),
                GeoPoint::new(self.end, self.fixed),
            ),
        }
    }
}

/// Edges shared by two tiles of the cluster, one per tile pair
///
/// Vertical edges towards the east neighbour, horizontal edges towards the
/// south neighbour.
pub fn internal_edges(cluster: &Cluster) -> Vec<AxisSegment> {
    let mut edges = Vec::new();
    for tile in cluster.sorted_tiles() {
        let (x, y) = (tile.x as i64, tile.y as i64);
        let member = |n: Option<Tile>| n.map_or(false, |t| cluster.contains(&t));
        let [_, east, south, _] = tile.neighbours();
        if member(east) {
            edges.push(AxisSegment::between(
                Axis::Vertical,
                vertex_point(x + 1, y),
                vertex_point(x + 1, y + 1),
            ));
        }
        if member(south) {
            edges.push(AxisSegment::between(
                Axis::Horizontal,
                vertex_point(x, y + 1),
                vertex_point(x + 1, y + 1),
            ));
        }
    }
    edges
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Merge collinear touching or overlapping segments into maximal runs
///
/// Segments are grouped by axis and fixed coordinate (within `EPSILON`) and
/// sorted by start. Output is ordered vertical before horizontal, then by fixed
/// coordinate and start.
pub fn merge_segments(mut segments: Vec<AxisSegment>) -> Vec<AxisSegment> {
    segments.sort_by(|a, b| {
        a.axis
            .cmp(&b.axis)
            .then(cmp_f64(a.fixed, b.fixed))
            .then(cmp_f64(a.start, b.start))
    });
    let mut merged: Vec<AxisSegment> = Vec::with_capacity(segments.len());
    for seg in segments {
        if let Some(last) = merged.last_mut() {
            let same_line = last.axis == seg.axis && (last.fixed - seg.fixed).abs() < EPSILON;
            if same_line && (seg.start <= last.end || (seg.start - last.end).abs() < EPSILON) {
                last.end = last.end.max(seg.end);
                continue;
            }
        }
        merged.push(seg);
    }
    merged
}

/// Minimal set of grid lines between adjacent tiles of the cluster
pub fn grid_lines(cluster: &Cluster) -> Vec<Segment> {
    merge_segments(internal_edges(cluster))
        .iter()
        .map(AxisSegment::to_segment)
        .collect()
}
