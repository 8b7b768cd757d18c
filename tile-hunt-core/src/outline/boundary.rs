//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Cluster boundary tracing

use crate::cluster::Cluster;
use crate::core::geom::{Polyline, Segment};
use std::collections::HashMap;
use std::f64::consts;
use tile_grid::{vertex_point, GeoPoint, Tile, EPSILON};

/// Exposed tile edges of a cluster
///
/// Edges are directed with the cluster interior on their left side, so outer
/// rings run counter-clockwise and holes clockwise. Tiles are visited row by
/// row, each emitting its north, east, south and west edge in that order.
pub fn exposed_edges(cluster: &Cluster) -> Vec<Segment> {
    let mut segments = Vec::new();
    for tile in cluster.sorted_tiles() {
        let (x, y) = (tile.x as i64, tile.y as i64);
        let member = |n: Option<Tile>| n.map_or(false, |t| cluster.contains(&t));
        let [north, east, south, west] = tile.neighbours();
        if !member(north) {
            segments.push(Segment::new(vertex_point(x + 1, y), vertex_point(x, y)));
        }
        if !member(east) {
            segments.push(Segment::new(vertex_point(x + 1, y + 1), vertex_point(x + 1, y)));
        }
        if !member(south) {
            segments.push(Segment::new(vertex_point(x, y + 1), vertex_point(x + 1, y + 1)));
        }
        if !member(west) {
            segments.push(Segment::new(vertex_point(x, y), vertex_point(x, y + 1)));
        }
    }
    segments
}

/// Closed boundary rings of a cluster
///
/// One outer ring plus one ring per hole, degenerate rings omitted.
pub fn trace_rings(cluster: &Cluster) -> Vec<Polyline> {
    let rings = chain_segments(&exposed_edges(cluster));
    debug!(
        "traced {} rings around cluster of {} tiles",
        rings.len(),
        cluster.len()
    );
    rings
}

type Bucket = (i64, i64);

fn bucket(p: &GeoPoint) -> Bucket {
    ((p.lon / EPSILON).floor() as i64, (p.lat / EPSILON).floor() as i64)
}

/// Segment indices by endpoint bucket
struct EndpointIndex {
    buckets: HashMap<Bucket, Vec<usize>>,
}

impl EndpointIndex {
    fn new<'a, I: Iterator<Item = &'a GeoPoint>>(points: I) -> EndpointIndex {
        let mut buckets: HashMap<Bucket, Vec<usize>> = HashMap::new();
        for (i, p) in points.enumerate() {
            buckets.entry(bucket(p)).or_insert_with(Vec::new).push(i);
        }
        EndpointIndex { buckets }
    }
    /// Indices of all segments whose endpoint may lie within `EPSILON` of `p`
    fn near(&self, p: &GeoPoint) -> Vec<usize> {
        let (bx, by) = bucket(p);
        let mut found = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(ids) = self.buckets.get(&(bx + dx, by + dy)) {
                    found.extend_from_slice(ids);
                }
            }
        }
        found.sort();
        found
    }
}

/// Turn angle from direction `from` to direction `to`, left turns positive
///
/// A full reversal ranks lowest.
fn turn(from: (f64, f64), to: (f64, f64)) -> f64 {
    let cross = from.0 * to.1 - from.1 * to.0;
    let dot = from.0 * to.0 + from.1 * to.1;
    let angle = cross.atan2(dot);
    if angle > consts::PI - 1e-9 {
        -consts::PI
    } else {
        angle
    }
}

fn direction(from: &GeoPoint, to: &GeoPoint) -> (f64, f64) {
    (to.lon - from.lon, to.lat - from.lat)
}

/// A candidate segment and the point it adds to the ring
struct Extension {
    idx: usize,
    point: GeoPoint,
    dir: (f64, f64),
}

struct Chainer<'a> {
    segments: &'a [Segment],
    starts: EndpointIndex,
    ends: EndpointIndex,
    consumed: Vec<bool>,
}

impl<'a> Chainer<'a> {
    fn new(segments: &'a [Segment]) -> Chainer<'a> {
        Chainer {
            segments,
            starts: EndpointIndex::new(segments.iter().map(|s| &s.start)),
            ends: EndpointIndex::new(segments.iter().map(|s| &s.end)),
            consumed: vec![false; segments.len()],
        }
    }

    /// Unconsumed segments leaving the ring at its tail
    ///
    /// Segments starting at `tail` keep their direction, segments ending there
    /// are reversed. Direction-preserving matches win, then the left-most turn.
    fn tail_extension(&self, tail: &GeoPoint, incoming: (f64, f64)) -> Option<Extension> {
        let forward = self.starts.near(tail).into_iter().filter_map(|i| {
            let s = &self.segments[i];
            if self.consumed[i] || !s.start.approx_eq(tail) {
                return None;
            }
            Some(Extension {
                idx: i,
                point: s.end,
                dir: direction(&s.start, &s.end),
            })
        });
        let reversed = self.ends.near(tail).into_iter().filter_map(|i| {
            let s = &self.segments[i];
            if self.consumed[i] || !s.end.approx_eq(tail) {
                return None;
            }
            Some(Extension {
                idx: i,
                point: s.start,
                dir: direction(&s.end, &s.start),
            })
        });
        let forward: Vec<Extension> = forward.collect();
        if !forward.is_empty() {
            return best_turn(forward, |e| turn(incoming, e.dir));
        }
        best_turn(reversed.collect(), |e| turn(incoming, e.dir))
    }

    /// Unconsumed segments entering the ring at its head
    fn head_extension(&self, head: &GeoPoint, outgoing: (f64, f64)) -> Option<Extension> {
        let forward: Vec<Extension> = self
            .ends
            .near(head)
            .into_iter()
            .filter_map(|i| {
                let s = &self.segments[i];
                if self.consumed[i] || !s.end.approx_eq(head) {
                    return None;
                }
                Some(Extension {
                    idx: i,
                    point: s.start,
                    dir: direction(&s.start, &s.end),
                })
            })
            .collect();
        if !forward.is_empty() {
            return best_turn(forward, |e| turn(e.dir, outgoing));
        }
        let reversed: Vec<Extension> = self
            .starts
            .near(head)
            .into_iter()
            .filter_map(|i| {
                let s = &self.segments[i];
                if self.consumed[i] || !s.start.approx_eq(head) {
                    return None;
                }
                Some(Extension {
                    idx: i,
                    point: s.end,
                    dir: direction(&s.end, &s.start),
                })
            })
            .collect();
        best_turn(reversed, |e| turn(e.dir, outgoing))
    }

    /// Grow a ring from segment `first` until it closes or gets stuck
    fn chain_from(&mut self, first: usize) -> (Vec<GeoPoint>, bool) {
        self.consumed[first] = true;
        let seg = self.segments[first];
        let mut points = vec![seg.start, seg.end];
        let mut tail_dir = direction(&seg.start, &seg.end);
        let mut head_dir = tail_dir;
        loop {
            let (head, tail) = (points[0], points[points.len() - 1]);
            if head.approx_eq(&tail) {
                let last = points.len() - 1;
                points[last] = head;
                return (points, true);
            }
            if let Some(ext) = self.tail_extension(&tail, tail_dir) {
                self.consumed[ext.idx] = true;
                points.push(ext.point);
                tail_dir = ext.dir;
            } else if let Some(ext) = self.head_extension(&head, head_dir) {
                self.consumed[ext.idx] = true;
                points.insert(0, ext.point);
                head_dir = ext.dir;
            } else {
                return (points, false);
            }
        }
    }
}

/// Pick the candidate with the largest turn angle, first one on ties
fn best_turn<F>(candidates: Vec<Extension>, angle: F) -> Option<Extension>
where
    F: Fn(&Extension) -> f64,
{
    let mut best: Option<(f64, Extension)> = None;
    for ext in candidates {
        let a = angle(&ext);
        match best {
            Some((best_angle, _)) if a <= best_angle + 1e-12 => {}
            _ => best = Some((a, ext)),
        }
    }
    best.map(|(_, ext)| ext)
}

/// Chain segments into rings by joining endpoints within `EPSILON`
///
/// Rings are extended at their tail first, then at their head. Rings which
/// cannot be closed are reported and dropped, rings with less than 3 distinct
/// points are dropped silently.
pub fn chain_segments(segments: &[Segment]) -> Vec<Polyline> {
    let mut chainer = Chainer::new(segments);
    let mut rings = Vec::new();
    for first in 0..segments.len() {
        if chainer.consumed[first] {
            continue;
        }
        let (points, closed) = chainer.chain_from(first);
        let ring = Polyline::new(points);
        if !closed {
            warn!(
                "Dropping unclosed ring with {} points starting at {:?}",
                ring.points.len(),
                ring.points[0]
            );
            continue;
        }
        if ring.distinct_points() < 3 {
            debug!("Dropping degenerate ring {:?}", ring.points);
            continue;
        }
        rings.push(ring);
    }
    rings
}
