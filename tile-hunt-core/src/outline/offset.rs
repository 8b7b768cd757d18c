//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Miter-join ring offsetting

use crate::core::geom::Polyline;
use tile_grid::GeoPoint;

/// Maximum miter length as a multiple of the offset distance
pub const MITER_LIMIT: f64 = 2.0;

const TOLERANCE: f64 = 1e-12;

type Vector = (f64, f64);

fn normalize(v: Vector) -> Option<Vector> {
    let len = (v.0 * v.0 + v.1 * v.1).sqrt();
    if len < TOLERANCE {
        None
    } else {
        Some((v.0 / len, v.1 / len))
    }
}

/// Unit normal of direction `d`, rotated clockwise or counter-clockwise
fn normal(d: Vector, clockwise: bool) -> Vector {
    if clockwise {
        (d.1, -d.0)
    } else {
        (-d.1, d.0)
    }
}

/// Ring vertices without closing point and without repeated points
fn ring_vertices(ring: &Polyline) -> Vec<GeoPoint> {
    let mut vertices: Vec<GeoPoint> = Vec::with_capacity(ring.points.len());
    for p in ring.ring_points() {
        if vertices.last().map_or(true, |last| !last.approx_eq(p)) {
            vertices.push(*p);
        }
    }
    while vertices.len() > 1 && vertices[0].approx_eq(&vertices[vertices.len() - 1]) {
        vertices.pop();
    }
    vertices
}

/// True for rings with negative signed area, i.e. holes as traced around a cluster
pub fn is_hole(ring: &Polyline) -> bool {
    ring.signed_area() < 0.0
}

/// Offset a closed ring by `distance` degrees using miter joins
///
/// A positive distance grows the area covered by the cluster: outer rings move
/// outwards, holes shrink. Negative distances inset the outline. The result is
/// independent of the winding direction of `ring`. Rings with less than 3
/// distinct vertices are returned unchanged.
pub fn offset_ring(ring: &Polyline, distance: f64, hole: bool) -> Polyline {
    let vertices = ring_vertices(ring);
    let n = vertices.len();
    if n < 3 {
        return ring.clone();
    }
    // Outer rings: counter-clockwise rings grow along the clockwise rotated normal.
    // Holes: the opposite side.
    let counter_clockwise = ring.signed_area() > 0.0;
    let clockwise_normal = counter_clockwise != hole;

    let mut points = Vec::with_capacity(n + 1);
    for i in 0..n {
        let p = vertices[(i + n - 1) % n];
        let v = vertices[i];
        let nx = vertices[(i + 1) % n];
        let d1 = normalize((v.lon - p.lon, v.lat - p.lat));
        let d2 = normalize((nx.lon - v.lon, nx.lat - v.lat));
        let (d1, d2) = match (d1, d2) {
            (Some(d1), Some(d2)) => (d1, d2),
            _ => {
                points.push(v);
                continue;
            }
        };
        let n1 = normal(d1, clockwise_normal);
        let n2 = normal(d2, clockwise_normal);
        let offset = match normalize((n1.0 + n2.0, n1.1 + n2.1)) {
            Some(bisector) => {
                // sine of the angle between incoming edge and bisector
                let sin = n1.0 * bisector.0 + n1.1 * bisector.1;
                let limit = MITER_LIMIT * distance.abs();
                let scale = if sin.abs() < TOLERANCE {
                    limit.copysign(distance)
                } else {
                    (distance / sin).max(-limit).min(limit)
                };
                (bisector.0 * scale, bisector.1 * scale)
            }
            // 180° turn
            None => (n1.0 * distance, n1.1 * distance),
        };
        points.push(GeoPoint::new(v.lon + offset.0, v.lat + offset.1));
    }
    points.push(points[0]);
    Polyline::new(points)
}

/// Offset a ring, deriving the hole flag from its winding
pub fn offset_traced_ring(ring: &Polyline, distance: f64) -> Polyline {
    offset_ring(ring, distance, is_hole(ring))
}

/// Shrink a traced cluster outline by `inset` degrees
pub fn inset_ring(ring: &Polyline, inset: f64) -> Polyline {
    offset_traced_ring(ring, -inset)
}
