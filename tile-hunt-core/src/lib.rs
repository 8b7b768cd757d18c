//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Geometry kernel for drawing explored map tiles: clusters, outlines,
//! grid lines and the largest explored square.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod cluster;
pub mod core;
pub mod gridlines;
pub mod outline;
pub mod square;
