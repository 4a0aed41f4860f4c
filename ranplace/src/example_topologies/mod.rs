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

//! Topologies for testing

use crate::descriptor::{
    DisaggregationProfile, NodeCapacity, RequestedCompute, TopologyDescriptor,
};
use std::collections::BTreeMap;

mod chain_fabric;
pub use chain_fabric::ChainFabric;

mod edge_fabric;
pub use edge_fabric::EdgeFabric;

/// Trait for easier access to example topologies.
///
/// Each topology comes with matching disaggregation profiles, capacity figures and a uniform
/// compute request, so tests and experiments can feed all four pieces straight into
/// [`place`](crate::place). The descriptors are plain values; tweak a returned copy (for
/// example a link delay) to derive a variant.
pub trait ExampleTopology {
    /// The topology descriptor, with exactly one core node.
    fn topology() -> TopologyDescriptor;
    /// The disaggregation profiles, including the profile `"1"` the driver operates on.
    fn disaggregations() -> BTreeMap<String, DisaggregationProfile>;
    /// Capacity figures for every topology node.
    fn capacities() -> BTreeMap<String, NodeCapacity>;
    /// The uniform per-component compute request.
    fn requested_compute() -> RequestedCompute;
}
