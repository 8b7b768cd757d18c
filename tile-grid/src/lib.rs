//! A library for slippy map tile grid calculations
//!
//! ## Tiles and coordinates
//!
//! ```rust
//! use tile_grid::{tile_for_coordinate, Corner, Tile};
//!
//! let tile = tile_for_coordinate(51.05, 13.7);
//! assert_eq!(tile, Tile::new(8815, 5481));
//! let tl = tile.corner(Corner::TopLeft);
//! assert!(tl.lon < 13.7 && tl.lat > 51.05);
//! ```
//!
//! ## Squares
//!
//! ```rust
//! use tile_grid::{Square, Tile};
//!
//! let square = Square::new(10, 20, 2);
//! assert!(square.contains(&Tile::new(11, 21)));
//! for tile in square.tiles() {
//!     println!("Tile {}/{}", tile.x, tile.y);
//! }
//! ```

mod grid;
mod grid_iterator;
#[cfg(test)]
mod grid_test;
mod square;

pub use grid::{
    lat_of_y, length_to_degrees, lon_of_x, normalize_longitude, tile_for_coordinate,
    vertex_point, Corner, GeoPoint, Tile, DEFAULT_ZOOM, EPSILON,
};
pub use grid_iterator::TileIterator;
pub use square::Square;
