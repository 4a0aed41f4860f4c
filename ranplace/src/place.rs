// RANPlace: Placing Disaggregated RAN Service Chains
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! Convenience entry point for placing one batch

use crate::descriptor::{
    ChainRequest, DisaggregationProfile, NodeCapacity, RequestedCompute, TopologyDescriptor,
};
use crate::placement::{Placer, PlacementOutcome};
use crate::Error;

use std::collections::BTreeMap;

/// Place one batch of chain requests on a fresh graph.
///
/// This builds a [`Placer`](crate::placement::Placer) from the descriptors, runs the batch and
/// discards the working graph, which is the shape the enclosing reconciliation loop wants: every
/// invocation starts from freshly read topology and capacity figures. Keep a `Placer` directly
/// to inspect residual state after the batch.
///
/// The requests are mutated in place: every placed chain gets its CU node, DU node, path and
/// profile key filled in. See [`Placer::place`](crate::placement::Placer::place) for the exact
/// semantics, including what happens to a partially placed batch.
pub fn place(
    topology: &TopologyDescriptor,
    disaggregations: BTreeMap<String, DisaggregationProfile>,
    capacities: &BTreeMap<String, NodeCapacity>,
    compute: RequestedCompute,
    requests: &mut [ChainRequest],
) -> Result<PlacementOutcome, Error> {
    let mut placer = Placer::new(topology, disaggregations, capacities, compute)?;
    placer.place(requests)
}
