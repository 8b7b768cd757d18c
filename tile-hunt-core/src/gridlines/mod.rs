//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

mod merge;
#[cfg(test)]
mod merge_test;

pub use self::merge::{grid_lines, internal_edges, merge_segments, Axis, AxisSegment};
