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

//! # ChainFabric Topology

use super::ExampleTopology;
use crate::descriptor::{
    DisaggregationProfile, Endpoint, LinkDescriptor, NetworkRequirement, NodeCapacity,
    NodeDescriptor, ProtocolLayer::*, ProtocolStack, RequestedCompute, TopologyDescriptor,
};
use crate::quantity::Quantity;
use std::collections::BTreeMap;

/// # ChainFabric
///
/// A five-node line from the core to a single cell site:
///
/// ```text
/// core --- hub --- metro --- street --- cell
///      1.0     1.0       0.5        0.5
/// ```
///
/// All links have capacity 1000. With profile `"1"` (backhaul 100, midhaul 100 within 30,
/// fronthaul 100 within 2) a chain pinned to `cell` lands its CU on `hub` and its DU on `metro`,
/// leaving the fronthaul at an accumulated delay of 1.0. There is exactly one path, which makes
/// this topology the place to probe segment boundaries and latency budgets: tweak a link delay
/// on a copy of the descriptor and the verdict flips.
pub struct ChainFabric {}

impl ExampleTopology for ChainFabric {
    fn topology() -> TopologyDescriptor {
        let mut nodes: BTreeMap<String, NodeDescriptor> = BTreeMap::new();
        nodes.insert("core".into(), NodeDescriptor { interfaces: vec![], core: true, hops: 0 });
        for (name, hops) in &[("hub", 1), ("metro", 2), ("street", 3), ("cell", 4)] {
            nodes.insert(
                name.to_string(),
                NodeDescriptor { interfaces: vec![], core: false, hops: *hops },
            );
        }

        let mut links: BTreeMap<String, LinkDescriptor> = BTreeMap::new();
        links.insert("hub--core".into(), line_link(1.0, "hub", "core"));
        links.insert("metro--hub".into(), line_link(1.0, "metro", "hub"));
        links.insert("street--metro".into(), line_link(0.5, "street", "metro"));
        links.insert("cell--street".into(), line_link(0.5, "cell", "street"));

        TopologyDescriptor { nodes, links }
    }

    fn disaggregations() -> BTreeMap<String, DisaggregationProfile> {
        let mut profiles: BTreeMap<String, DisaggregationProfile> = BTreeMap::new();
        profiles.insert(
            "1".into(),
            DisaggregationProfile {
                protocol_stack: ProtocolStack {
                    cu: vec![Rrc, Pdcp],
                    du: vec![RlcHigh, RlcLow, MacHigh, MacLow],
                    ru: vec![PhyHigh, PhyLow, Rf],
                },
                backhaul: Some(NetworkRequirement { bandwidth: 100.0, latency: 0.0 }),
                midhaul: Some(NetworkRequirement { bandwidth: 100.0, latency: 30.0 }),
                fronthaul: Some(NetworkRequirement { bandwidth: 100.0, latency: 2.0 }),
            },
        );
        profiles
    }

    fn capacities() -> BTreeMap<String, NodeCapacity> {
        ["core", "hub", "metro", "street", "cell"]
            .iter()
            .map(|name| {
                (
                    name.to_string(),
                    NodeCapacity {
                        cpu_capacity: quantity("5000m"),
                        memory_capacity: quantity("8Gi"),
                        cpu_allocatable: quantity("4000m"),
                        memory_allocatable: quantity("4Gi"),
                    },
                )
            })
            .collect()
    }

    fn requested_compute() -> RequestedCompute {
        RequestedCompute { cpu: quantity("500m"), memory: quantity("512Mi") }
    }
}

fn line_link(delay: f32, source: &str, destination: &str) -> LinkDescriptor {
    LinkDescriptor {
        link_capacity: 1000.0,
        link_delay: delay,
        source: Endpoint { node: source.into(), interface: "eth0".into() },
        destination: Endpoint { node: destination.into(), interface: "eth1".into() },
    }
}

fn quantity(s: &str) -> Quantity {
    s.parse().unwrap()
}
