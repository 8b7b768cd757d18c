//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Geometry types in geographic coordinates

use tile_grid::GeoPoint;

/// Straight line between two positions, e.g. one tile edge
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Segment {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl Segment {
    pub fn new(start: GeoPoint, end: GeoPoint) -> Segment {
        Segment { start, end }
    }
}

/// Bounding box of a polyline
#[derive(PartialEq, Clone, Debug)]
pub struct BBox {
    pub minlon: f64,
    pub minlat: f64,
    pub maxlon: f64,
    pub maxlat: f64,
}

/// Sequence of positions, usually a closed ring
#[derive(PartialEq, Clone, Debug, Default)]
pub struct Polyline {
    pub points: Vec<GeoPoint>,
}

impl Polyline {
    pub fn new(points: Vec<GeoPoint>) -> Polyline {
        Polyline { points }
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// First and last point coincide
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first.approx_eq(last),
            _ => false,
        }
    }
    /// Points of a closed ring without the closing point
    pub fn ring_points(&self) -> &[GeoPoint] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points[..]
        }
    }
    /// Number of pairwise distinct points
    pub fn distinct_points(&self) -> usize {
        let mut distinct: Vec<&GeoPoint> = Vec::with_capacity(self.points.len());
        for p in &self.points {
            if !distinct.iter().any(|d| d.approx_eq(p)) {
                distinct.push(p);
            }
        }
        distinct.len()
    }
    /// Signed area (shoelace formula, lon as x and lat as y)
    ///
    /// Positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        let pts = self.ring_points();
        if pts.len() < 3 {
            return 0.0;
        }
        let mut a = 0.0;
        for i in 0..pts.len() {
            let p1 = &pts[i];
            let p2 = &pts[(i + 1) % pts.len()];
            a += p1.lon * p2.lat - p2.lon * p1.lat;
        }
        a / 2.0
    }
    pub fn bbox(&self) -> Option<BBox> {
        let first = self.points.first()?;
        let init = BBox {
            minlon: first.lon,
            minlat: first.lat,
            maxlon: first.lon,
            maxlat: first.lat,
        };
        Some(self.points.iter().fold(init, |b, p| BBox {
            minlon: b.minlon.min(p.lon),
            minlat: b.minlat.min(p.lat),
            maxlon: b.maxlon.max(p.lon),
            maxlat: b.maxlat.max(p.lat),
        }))
    }
}
