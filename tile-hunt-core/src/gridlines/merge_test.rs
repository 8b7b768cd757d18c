//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::cluster::{cluster_tiles, Cluster};
use crate::gridlines::{grid_lines, internal_edges, merge_segments, Axis, AxisSegment};
use std::collections::HashSet;
use tile_grid::{lat_of_y, lon_of_x, GeoPoint, Tile};

fn cluster(coords: &[(i32, i32)]) -> Cluster {
    let tiles: HashSet<Tile> = coords.iter().map(|&(x, y)| Tile::new(x, y)).collect();
    let mut clusters = cluster_tiles(&tiles);
    assert_eq!(clusters.len(), 1);
    clusters.remove(0)
}

#[test]
fn test_single_tile_has_no_grid() {
    let c = cluster(&[(8815, 5481)]);
    assert!(internal_edges(&c).is_empty());
    assert!(grid_lines(&c).is_empty());
}

#[test]
fn test_two_tiles() {
    let c = cluster(&[(8815, 5481), (8816, 5481)]);
    let lines = grid_lines(&c);
    assert_eq!(lines.len(), 1);
    let line = lines[0];
    assert_eq!(line.start, GeoPoint::new(lon_of_x(8816), lat_of_y(5482)));
    assert_eq!(line.end, GeoPoint::new(lon_of_x(8816), lat_of_y(5481)));
}

#[test]
fn test_block_merges_runs() {
    // 3x3 block: 2 vertical and 2 horizontal full-length lines
    let mut coords = Vec::new();
    for x in 0..3 {
        for y in 0..3 {
            coords.push((100 + x, 200 + y));
        }
    }
    let c = cluster(&coords);
    assert_eq!(internal_edges(&c).len(), 12);

    let merged = merge_segments(internal_edges(&c));
    assert_eq!(merged.len(), 4);
    let vertical: Vec<&AxisSegment> = merged.iter().filter(|s| s.axis == Axis::Vertical).collect();
    assert_eq!(vertical.len(), 2);
    assert_eq!(vertical[0].fixed, lon_of_x(101));
    assert_eq!(vertical[1].fixed, lon_of_x(102));
    for v in vertical {
        assert_eq!(v.start, lat_of_y(203));
        assert_eq!(v.end, lat_of_y(200));
    }
    let horizontal: Vec<&AxisSegment> = merged
        .iter()
        .filter(|s| s.axis == Axis::Horizontal)
        .collect();
    assert_eq!(horizontal.len(), 2);
    for h in horizontal {
        assert_eq!(h.start, lon_of_x(100));
        assert_eq!(h.end, lon_of_x(103));
    }
}

#[test]
fn test_gap_splits_runs() {
    // U-shape: the line between the arms is interrupted at the open row
    let c = cluster(&[(0, 0), (1, 0), (0, 1), (0, 2), (1, 2)]);
    let merged = merge_segments(internal_edges(&c));
    let vertical: Vec<&AxisSegment> = merged.iter().filter(|s| s.axis == Axis::Vertical).collect();
    assert_eq!(vertical.len(), 2);
    assert_eq!(vertical[0].fixed, vertical[1].fixed);
    assert!(vertical[0].end < vertical[1].start);
}

#[test]
fn test_merge_overlapping() {
    let segments = vec![
        AxisSegment::new(Axis::Horizontal, 1.0, 3.0, 5.0),
        AxisSegment::new(Axis::Horizontal, 1.0, 0.0, 2.0),
        AxisSegment::new(Axis::Horizontal, 1.0, 2.0000005, 2.5),
        AxisSegment::new(Axis::Horizontal, 1.0, 1.0, 3.5),
        AxisSegment::new(Axis::Horizontal, 2.0, 0.0, 1.0),
        AxisSegment::new(Axis::Vertical, 1.0, 7.0, 6.0),
    ];
    let merged = merge_segments(segments);
    assert_eq!(
        merged,
        vec![
            AxisSegment::new(Axis::Vertical, 1.0, 6.0, 7.0),
            AxisSegment::new(Axis::Horizontal, 1.0, 0.0, 5.0),
            AxisSegment::new(Axis::Horizontal, 2.0, 0.0, 1.0),
        ]
    );
}

#[test]
fn test_merge_keeps_disjoint() {
    let segments = vec![
        AxisSegment::new(Axis::Vertical, 1.0, 0.0, 1.0),
        AxisSegment::new(Axis::Vertical, 1.0, 1.1, 2.0),
    ];
    assert_eq!(merge_segments(segments.clone()), segments);
}

#[test]
fn test_merge_idempotent() {
    let mut coords = Vec::new();
    for x in 0..6 {
        for y in 0..4 {
            if (x + y) % 5 != 0 {
                coords.push((8815 + x, 5481 + y));
            }
        }
    }
    let tiles: HashSet<Tile> = coords.iter().map(|&(x, y)| Tile::new(x, y)).collect();
    for c in cluster_tiles(&tiles) {
        let once = merge_segments(internal_edges(&c));
        let twice = merge_segments(once.clone());
        assert_eq!(once, twice);
    }
}

#[test]
fn test_to_segment() {
    let v = AxisSegment::new(Axis::Vertical, 13.0, 52.0, 51.0).to_segment();
    assert_eq!(v.start, GeoPoint::new(13.0, 51.0));
    assert_eq!(v.end, GeoPoint::new(13.0, 52.0));
    let h = AxisSegment::new(Axis::Horizontal, 51.0, 13.0, 14.0).to_segment();
    assert_eq!(h.start, GeoPoint::new(13.0, 51.0));
    assert_eq!(h.end, GeoPoint::new(14.0, 51.0));
}

#[test]
fn test_grid_limits() {
    let c = cluster(&[(i32::MAX - 1, 5481), (i32::MAX, 5481)]);
    let edges = internal_edges(&c);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].axis, Axis::Vertical);
    assert_eq!(edges[0].fixed, lon_of_x(i32::MAX as i64));

    let c = cluster(&[(i32::MIN, 5481), (i32::MIN, 5482)]);
    let edges = internal_edges(&c);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].axis, Axis::Horizontal);
    assert_eq!(edges[0].fixed, lat_of_y(5482));
}
