//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! GeoJSON export of draw cycles

use crate::draw_service::DrawCycle;
use serde_json;
use tile_grid::{vertex_point, GeoPoint, Square};
use tile_hunt_core::core::geom::{Polyline, Segment};

fn position(p: &GeoPoint) -> serde_json::Value {
    json!([p.lon, p.lat])
}

fn line_string(points: &[GeoPoint], category: &str, kind: &str) -> serde_json::Value {
    let coordinates: Vec<serde_json::Value> = points.iter().map(position).collect();
    json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": coordinates
        },
        "properties": {
            "category": category,
            "kind": kind
        }
    })
}

fn outline_feature(outline: &Polyline, category: &str) -> serde_json::Value {
    line_string(&outline.points, category, "outline")
}

fn grid_feature(segment: &Segment, category: &str) -> serde_json::Value {
    line_string(&[segment.start, segment.end], category, "grid")
}

/// Counter-clockwise polygon around the tiles of `square`
pub fn square_feature(square: &Square) -> serde_json::Value {
    let (x, y, s) = (square.x as i64, square.y as i64, square.size as i64);
    let ring: Vec<serde_json::Value> = [
        vertex_point(x, y),
        vertex_point(x, y + s),
        vertex_point(x + s, y + s),
        vertex_point(x + s, y),
        vertex_point(x, y),
    ]
    .iter()
    .map(position)
    .collect();
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [ring]
        },
        "properties": {
            "category": "square",
            "kind": "square",
            "size": s
        }
    })
}

/// FeatureCollection with all outlines, grid lines and the square of a draw cycle
pub fn draw_cycle_to_geojson(cycle: &DrawCycle) -> serde_json::Value {
    let mut features = Vec::new();
    for layer in &cycle.layers {
        let category = layer.category.name();
        features.extend(layer.outlines.iter().map(|o| outline_feature(o, category)));
        features.extend(layer.grid_lines.iter().map(|s| grid_feature(s, category)));
    }
    if let Some(ref square) = cycle.square {
        features.push(square_feature(square));
    }
    json!({
        "type": "FeatureCollection",
        "features": features
    })
}
