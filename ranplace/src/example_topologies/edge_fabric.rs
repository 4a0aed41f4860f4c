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

//! # EdgeFabric Topology

use super::ExampleTopology;
use crate::descriptor::{
    DisaggregationProfile, Endpoint, LinkDescriptor, NetworkRequirement, NodeCapacity,
    NodeDescriptor, ProtocolLayer::*, ProtocolStack, RequestedCompute, TopologyDescriptor,
};
use crate::quantity::Quantity;
use crate::topology::{Bandwidth, Delay};
use std::collections::BTreeMap;

/// # EdgeFabric
///
/// A 14-node edge network rooted at `node14` (the packet core). Two aggregation nodes (`node1`,
/// `node2`) fan out to three metro nodes (`node3`, `node4`, `node5`) over 1200-capacity links;
/// behind those sit the access nodes (`node6` .. `node13`) on 300-capacity links, with `node13`
/// at the end of a five-hop branch. Ships with four disaggregation profiles; the driver uses
/// profile `"1"` (backhaul 151, midhaul 151 within 30, fronthaul 152 within 2).
///
/// ```text
///                    node14
///                   /      \
///               node1      node2
///              /  |  \    /  |  \
///         node3 node4 node5 ...(full bipartite)
///         / | \    | \     \
///       n6 n7 n8  n10 n11   n7,n11
///              |   |   |
///             n9  n9  n12
///                      |
///                     n13
/// ```
pub struct EdgeFabric {}

impl ExampleTopology for EdgeFabric {
    fn topology() -> TopologyDescriptor {
        let mut nodes: BTreeMap<String, NodeDescriptor> = BTreeMap::new();

        nodes.insert("node1".into(), node(&["eth0", "eth1", "eth2", "eth3"], false, 1));
        nodes.insert("node2".into(), node(&["eth0", "eth1", "eth2", "eth3", "eth4"], false, 1));
        nodes.insert("node3".into(), node(&["eth0", "eth1", "eth2", "eth3", "eth4"], false, 2));
        nodes.insert("node4".into(), node(&["eth0", "eth1", "eth2", "eth3"], false, 2));
        nodes.insert("node5".into(), node(&["eth0", "eth1"], false, 2));
        nodes.insert("node6".into(), node(&["eth0", "eth1"], false, 3));
        nodes.insert("node7".into(), node(&["eth0", "eth1"], false, 3));
        nodes.insert("node8".into(), node(&["eth0", "eth1"], false, 3));
        nodes.insert("node9".into(), node(&["eth0", "eth1"], false, 4));
        nodes.insert("node10".into(), node(&["eth0", "eth1", "eth2"], false, 3));
        nodes.insert("node11".into(), node(&["eth0", "eth1"], false, 3));
        nodes.insert("node12".into(), node(&["eth0", "eth1"], false, 4));
        nodes.insert("node13".into(), node(&["eth0", "eth1"], false, 5));
        nodes.insert("node14".into(), node(&["eth0", "eth1"], true, 0));

        let mut links: BTreeMap<String, LinkDescriptor> = BTreeMap::new();

        // access layer
        links.insert("node6--node3".into(), link(300.0, 0.25, "node6", "eth0", "node3", "eth2"));
        links.insert("node6--node4".into(), link(300.0, 1.0, "node6", "eth1", "node4", "eth2"));
        links.insert("node7--node3".into(), link(300.0, 0.25, "node7", "eth0", "node3", "eth3"));
        links.insert("node7--node5".into(), link(300.0, 1.0, "node7", "eth1", "node5", "eth2"));
        links.insert("node8--node3".into(), link(300.0, 0.25, "node8", "eth0", "node3", "eth4"));
        links.insert("node9--node8".into(), link(300.0, 1.0, "node9", "eth0", "node8", "eth1"));
        links.insert("node10--node9".into(), link(300.0, 0.25, "node10", "eth1", "node9", "eth1"));
        links.insert("node10--node4".into(), link(300.0, 1.0, "node10", "eth0", "node4", "eth3"));
        links.insert("node11--node4".into(), link(300.0, 0.25, "node11", "eth0", "node4", "eth4"));
        links.insert("node11--node5".into(), link(300.0, 1.0, "node11", "eth1", "node5", "eth3"));
        links
            .insert("node12--node11".into(), link(300.0, 0.25, "node12", "eth0", "node11", "eth2"));
        links.insert("node13--node12".into(), link(300.0, 1.0, "node13", "eth0", "node12", "eth1"));

        // metro layer
        links.insert("node3--node1".into(), link(1200.0, 3.0, "node3", "eth0", "node1", "eth1"));
        links.insert("node3--node2".into(), link(1200.0, 4.0, "node3", "eth1", "node2", "eth1"));
        links.insert("node4--node1".into(), link(1200.0, 5.0, "node4", "eth0", "node1", "eth2"));
        links.insert("node4--node2".into(), link(1200.0, 6.0, "node4", "eth1", "node2", "eth2"));
        links.insert("node5--node1".into(), link(1200.0, 3.0, "node5", "eth0", "node1", "eth3"));
        links.insert("node5--node2".into(), link(1200.0, 4.0, "node5", "eth1", "node2", "eth3"));

        // core layer
        links.insert("node1--node14".into(), link(1200.0, 2.0, "node1", "eth0", "node14", "eth0"));
        links.insert("node2--node14".into(), link(1200.0, 3.0, "node2", "eth0", "node14", "eth1"));

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
                backhaul: Some(requirement(151.0, 0.0)),
                midhaul: Some(requirement(151.0, 30.0)),
                fronthaul: Some(requirement(152.0, 2.0)),
            },
        );

        profiles.insert(
            "2".into(),
            DisaggregationProfile {
                protocol_stack: ProtocolStack {
                    cu: vec![Rrc, Pdcp],
                    du: vec![],
                    ru: vec![RlcHigh, RlcLow, MacHigh, MacLow, PhyHigh, PhyLow, Rf],
                },
                backhaul: Some(requirement(151.0, 0.0)),
                midhaul: Some(requirement(0.0, 0.0)),
                fronthaul: Some(requirement(151.0, 0.0)),
            },
        );

        profiles.insert(
            "3".into(),
            DisaggregationProfile {
                protocol_stack: ProtocolStack {
                    cu: vec![Rrc, Pdcp, RlcHigh, RlcLow, MacHigh, MacLow],
                    du: vec![],
                    ru: vec![PhyHigh, PhyLow, Rf],
                },
                backhaul: Some(requirement(151.0, 0.0)),
                midhaul: Some(requirement(0.0, 0.0)),
                fronthaul: Some(requirement(152.0, 2.0)),
            },
        );

        profiles.insert(
            "4".into(),
            DisaggregationProfile {
                protocol_stack: ProtocolStack {
                    cu: vec![Rrc, Pdcp, RlcHigh, RlcLow, MacHigh, MacLow, PhyHigh, PhyLow, Rf],
                    du: vec![],
                    ru: vec![],
                },
                backhaul: Some(requirement(0.0, 0.0)),
                midhaul: Some(requirement(0.0, 0.0)),
                fronthaul: Some(requirement(0.0, 0.0)),
            },
        );

        profiles
    }

    fn capacities() -> BTreeMap<String, NodeCapacity> {
        (1..=14).map(|i| (format!("node{}", i), capacity())).collect()
    }

    fn requested_compute() -> RequestedCompute {
        RequestedCompute { cpu: quantity("500m"), memory: quantity("512Mi") }
    }
}

fn node(interfaces: &[&str], core: bool, hops: u32) -> NodeDescriptor {
    NodeDescriptor {
        interfaces: interfaces.iter().map(|i| i.to_string()).collect(),
        core,
        hops,
    }
}

fn link(
    capacity: Bandwidth,
    delay: Delay,
    source: &str,
    source_interface: &str,
    destination: &str,
    destination_interface: &str,
) -> LinkDescriptor {
    LinkDescriptor {
        link_capacity: capacity,
        link_delay: delay,
        source: Endpoint { node: source.into(), interface: source_interface.into() },
        destination: Endpoint {
            node: destination.into(),
            interface: destination_interface.into(),
        },
    }
}

fn requirement(bandwidth: Bandwidth, latency: Delay) -> NetworkRequirement {
    NetworkRequirement { bandwidth, latency }
}

fn capacity() -> NodeCapacity {
    NodeCapacity {
        cpu_capacity: quantity("5000m"),
        memory_capacity: quantity("8192Mi"),
        cpu_allocatable: quantity("4000m"),
        memory_allocatable: quantity("6144Mi"),
    }
}

fn quantity(s: &str) -> Quantity {
    s.parse().unwrap()
}
