//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Cluster outlines

mod boundary;
mod offset;

pub use self::boundary::{chain_segments, exposed_edges, trace_rings};
pub use self::offset::{inset_ring, is_hole, offset_ring, offset_traced_ring, MITER_LIMIT};

use crate::cluster::Cluster;
use crate::core::geom::Polyline;

/// Traced rings of a cluster, inset by `inset` degrees
pub fn cluster_outlines(cluster: &Cluster, inset: f64) -> Vec<Polyline> {
    trace_rings(cluster)
        .iter()
        .map(|ring| inset_ring(ring, inset))
        .collect()
}
