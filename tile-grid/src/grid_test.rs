//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid::{
    lat_of_y, length_to_degrees, lon_of_x, normalize_longitude, tile_for_coordinate, Corner,
    GeoPoint, Tile,
};
use crate::square::Square;
use std::collections::HashSet;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[test]
fn test_tile_for_coordinate() {
    assert_eq!(tile_for_coordinate(0.0, 0.0), Tile::new(8192, 8192));
    assert_eq!(tile_for_coordinate(51.05, 13.7), Tile::new(8815, 5481));
    assert_eq!(tile_for_coordinate(-33.8688, 151.2093), Tile::new(15073, 9831));
}

#[test]
fn test_tile_edges() {
    assert_close(lon_of_x(0), -180.0);
    assert_close(lon_of_x(8192), 0.0);
    assert_close(lon_of_x(16384), 180.0);
    assert_close(lat_of_y(8192), 0.0);
    assert_close(lat_of_y(0), 85.0511287798066);
    assert_close(lat_of_y(16384), -85.0511287798066);

    assert_close(lon_of_x(8815), 13.68896484375);
    assert_close(lon_of_x(8816), 13.7109375);
    assert_close(lat_of_y(5481), 51.055207338584964);
    assert_close(lat_of_y(5482), 51.04139389812637);
}

#[test]
fn test_corners() {
    let tile = Tile::new(8815, 5481);
    let tl = tile.corner(Corner::TopLeft);
    let tr = tile.corner(Corner::TopRight);
    let bl = tile.corner(Corner::BottomLeft);
    let br = tile.corner(Corner::BottomRight);
    assert_eq!(tl, GeoPoint::new(lon_of_x(8815), lat_of_y(5481)));
    assert_eq!(tr, GeoPoint::new(lon_of_x(8816), lat_of_y(5481)));
    assert_eq!(bl, GeoPoint::new(lon_of_x(8815), lat_of_y(5482)));
    assert_eq!(br, GeoPoint::new(lon_of_x(8816), lat_of_y(5482)));
    assert!(tl.lat > bl.lat);
    assert!(tl.lon < tr.lon);

    assert_eq!(tile.corners(), [tl, tr, br, bl]);

    // Shared corners of adjacent tiles are identical
    let east = Tile::new(8816, 5481);
    assert_eq!(east.corner(Corner::TopLeft), tr);
    let south = Tile::new(8815, 5482);
    assert_eq!(south.corner(Corner::TopRight), br);
}

#[test]
fn test_center_round_trip() {
    for tile in &[
        Tile::new(8815, 5481),
        Tile::new(0, 0),
        Tile::new(16383, 16383),
        Tile::new(8192, 8191),
        Tile::new(15073, 9831),
    ] {
        let center = tile.center();
        assert_eq!(tile_for_coordinate(center.lat, center.lon), *tile);
    }
}

#[test]
fn test_neighbours() {
    let tile = Tile::new(10, 10);
    assert_eq!(
        tile.neighbours(),
        [
            Some(Tile::new(10, 9)),
            Some(Tile::new(11, 10)),
            Some(Tile::new(10, 11)),
            Some(Tile::new(9, 10))
        ]
    );
    for n in tile.neighbours().iter().flatten() {
        assert!(tile.is_neighbour(n));
        assert!(n.is_neighbour(&tile));
    }
    assert!(!tile.is_neighbour(&tile));
    assert!(!tile.is_neighbour(&Tile::new(11, 11)));
    assert!(!tile.is_neighbour(&Tile::new(12, 10)));
    assert!(!Tile::new(11, 11).is_neighbour(&tile));

    // Symmetry over a small neighbourhood
    for x in 8..13 {
        for y in 8..13 {
            let other = Tile::new(x, y);
            assert_eq!(tile.is_neighbour(&other), other.is_neighbour(&tile));
        }
    }

    // No overflow at the integer limits
    assert!(!Tile::new(i32::MAX, 0).is_neighbour(&Tile::new(i32::MIN, 0)));
}

#[test]
fn test_neighbours_at_limits() {
    assert_eq!(
        Tile::new(i32::MAX, i32::MIN).neighbours(),
        [
            None,
            None,
            Some(Tile::new(i32::MAX, i32::MIN + 1)),
            Some(Tile::new(i32::MAX - 1, i32::MIN))
        ]
    );
    assert_eq!(
        Tile::new(i32::MIN, i32::MAX).neighbours(),
        [
            Some(Tile::new(i32::MIN, i32::MAX - 1)),
            Some(Tile::new(i32::MIN + 1, i32::MAX)),
            None,
            None
        ]
    );
    // missing neighbours never count as present
    let tile = Tile::new(i32::MAX, 0);
    let tiles: HashSet<Tile> = tile.neighbours().iter().flatten().cloned().collect();
    assert_eq!(tiles.len(), 3);
    assert!(!tile.is_surrounded(&tiles));

    let corner = Tile::new(i32::MAX, i32::MAX).corner(Corner::BottomRight);
    assert!(corner.lon.is_finite());
    assert_eq!(corner.lon, lon_of_x(i32::MAX as i64 + 1));
}

#[test]
fn test_surrounded() {
    let tile = Tile::new(5, 5);
    let mut tiles: HashSet<Tile> = tile.neighbours().iter().flatten().cloned().collect();
    assert!(tile.is_surrounded(&tiles));
    tiles.remove(&Tile::new(4, 5));
    assert!(!tile.is_surrounded(&tiles));
}

#[test]
fn test_normalize_longitude() {
    assert_close(normalize_longitude(0.0), 0.0);
    assert_close(normalize_longitude(13.7), 13.7);
    assert_close(normalize_longitude(190.0), -170.0);
    assert_close(normalize_longitude(-190.0), 170.0);
    assert_close(normalize_longitude(180.0), -180.0);
    assert_close(normalize_longitude(540.0), -180.0);
}

#[test]
fn test_inside_with_margin() {
    let margin = length_to_degrees(5.0);
    assert_close(margin, 4.49660181862269e-05);

    let inbounds = |lon: f64, lat: f64| {
        let tile = tile_for_coordinate(lat, lon);
        tile.is_inside_with_margin(&GeoPoint::new(lon, lat), margin)
    };
    // bottom border
    assert!(!inbounds(13.739522, 51.055204));
    assert!(inbounds(13.739594, 51.055322));
    // left border
    assert!(!inbounds(13.732887, 51.05889));
    assert!(inbounds(13.73349, 51.058903));
    // top border
    assert!(!inbounds(13.743467, 51.069003));
    assert!(inbounds(13.743478, 51.068706));
    // right border
    assert!(!inbounds(13.754872, 51.065113));
    assert!(inbounds(13.754545, 51.065116));

    // Wrapped longitudes are compared after normalization
    let tile = Tile::new(8815, 5481);
    let center = tile.center();
    assert!(tile.is_inside_with_margin(&GeoPoint::new(center.lon + 360.0, center.lat), margin));
    assert!(!tile.is_inside_with_margin(&tile.corner(Corner::TopLeft), 0.0));
}

#[test]
fn test_square() {
    let square = Square::new(10, 20, 3);
    assert!(square.contains(&Tile::new(10, 20)));
    assert!(square.contains(&Tile::new(12, 22)));
    assert!(!square.contains(&Tile::new(13, 22)));
    assert!(!square.contains(&Tile::new(12, 23)));
    assert!(!square.contains(&Tile::new(9, 20)));

    let tiles: Vec<Tile> = square.tiles().collect();
    assert_eq!(tiles.len(), 9);
    assert_eq!(tiles[0], Tile::new(10, 20));
    assert_eq!(tiles[1], Tile::new(11, 20));
    assert_eq!(tiles[3], Tile::new(10, 21));
    assert_eq!(tiles[8], Tile::new(12, 22));
    assert!(tiles.iter().all(|t| square.contains(t)));

    assert_eq!(Square::new(0, 0, 0).tiles().count(), 0);
    assert_eq!(Square::new(0, 0, 1).tiles().collect::<Vec<_>>(), vec![Tile::new(0, 0)]);

    let dresden = Square::new(8815, 5481, 1);
    assert!(dresden.contains_coordinate(51.05, 13.7));
    assert!(!dresden.contains_coordinate(51.06, 13.7));
    assert_eq!(format!("{}", dresden), "1x1 at 8815/5481");
}

#[test]
fn test_square_at_limits() {
    let square = Square::new(i32::MAX, i32::MAX, 1);
    assert!(square.fits_grid());
    assert!(square.contains(&Tile::new(i32::MAX, i32::MAX)));
    assert!(!square.contains(&Tile::new(i32::MAX - 1, i32::MAX)));
    assert_eq!(square.tiles().collect::<Vec<_>>(), vec![Tile::new(i32::MAX, i32::MAX)]);

    // clipped to the grid
    let square = Square::new(i32::MAX, 0, 2);
    assert!(!square.fits_grid());
    assert_eq!(
        square.tiles().collect::<Vec<_>>(),
        vec![Tile::new(i32::MAX, 0), Tile::new(i32::MAX, 1)]
    );

    let square = Square::new(i32::MIN, i32::MIN, 2);
    assert!(square.fits_grid());
    assert_eq!(square.tiles().count(), 4);
}
