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

//! Test the resource model and the graph builder, without placing anything.

use crate::example_topologies::{EdgeFabric, ExampleTopology};
use crate::quantity::Quantity;
use crate::topology::{TopologyError, TopologyGraph};

use assert_approx_eq::assert_approx_eq;

fn quantity(s: &str) -> Quantity {
    s.parse().unwrap()
}

fn edge_fabric() -> TopologyGraph {
    TopologyGraph::build(&EdgeFabric::topology(), &EdgeFabric::capacities()).unwrap()
}

#[test]
fn test_build_edge_fabric() {
    let graph = edge_fabric();
    assert_eq!(graph.num_nodes(), 14);
    assert_eq!(graph.num_links(), 20);

    let root = graph.root();
    assert_eq!(graph.node(root).unwrap().name(), "node14");
    assert_eq!(graph.get_node_id("node14").unwrap(), root);

    // starting residuals are the allocatable figures, not the capacity figures
    let node1 = graph.node(graph.get_node_id("node1").unwrap()).unwrap();
    assert_eq!(node1.cpu(), quantity("4000m"));
    assert_eq!(node1.memory(), quantity("6144Mi"));
}

#[test]
fn test_neighbors_are_name_sorted() {
    let graph = edge_fabric();
    let node4 = graph.get_node_id("node4").unwrap();
    let neighbors: Vec<String> = graph
        .neighbors_sorted(node4)
        .into_iter()
        .map(|id| graph.node(id).unwrap().name().to_string())
        .collect();
    assert_eq!(neighbors, vec!["node1", "node10", "node11", "node2", "node6"]);
}

#[test]
fn test_link_is_shared_between_endpoints() {
    let mut graph = edge_fabric();
    let node6 = graph.get_node_id("node6").unwrap();
    let node3 = graph.get_node_id("node3").unwrap();

    assert_approx_eq!(graph.find_link(node6, node3).unwrap().bandwidth(), 300.0);
    assert_approx_eq!(graph.find_link(node6, node3).unwrap().delay(), 0.25);

    // a reservation made through one endpoint is visible from the other
    graph.find_link_mut(node6, node3).unwrap().reserve_bandwidth(152.0).unwrap();
    assert_approx_eq!(graph.find_link(node3, node6).unwrap().bandwidth(), 148.0);
    assert_approx_eq!(graph.find_link(node6, node3).unwrap().bandwidth(), 148.0);
}

#[test]
fn test_clone_is_a_deep_copy() {
    let mut graph = edge_fabric();
    let copy = graph.clone();

    let node6 = graph.get_node_id("node6").unwrap();
    let node3 = graph.get_node_id("node3").unwrap();
    graph.find_link_mut(node6, node3).unwrap().reserve_bandwidth(152.0).unwrap();
    graph.node_mut(node6).unwrap().reserve_compute(quantity("512Mi"), quantity("500m")).unwrap();

    assert_approx_eq!(copy.find_link(node6, node3).unwrap().bandwidth(), 300.0);
    assert_eq!(copy.node(node6).unwrap().cpu(), quantity("4000m"));
}

#[test]
fn test_compute_sufficiency_is_strict() {
    let mut graph = edge_fabric();
    let node6 = graph.get_node_id("node6").unwrap();
    let node = graph.node_mut(node6).unwrap();

    assert!(node.has_compute(quantity("512Mi"), quantity("500m")));
    // a residual exactly equal to the request is not sufficient
    assert!(!node.has_compute(quantity("6144Mi"), quantity("500m")));
    assert!(!node.has_compute(quantity("512Mi"), quantity("4000m")));

    // a failed reservation reports the error and keeps the subtracted state
    assert!(node.reserve_compute(quantity("512Mi"), quantity("4000m")).is_ok());
    let result = node.reserve_compute(quantity("512Mi"), quantity("500m"));
    assert_eq!(
        result,
        Err(TopologyError::InsufficientCompute {
            node: "node6".to_string(),
            cpu: Quantity::from_milli(-500),
            memory: quantity("5120Mi"),
        })
    );
    assert!(node.cpu().is_negative());
}

#[test]
fn test_bandwidth_admits_equality() {
    let mut graph = edge_fabric();
    let node6 = graph.get_node_id("node6").unwrap();
    let node3 = graph.get_node_id("node3").unwrap();
    let link = graph.find_link_mut(node6, node3).unwrap();

    assert!(link.has_bandwidth(300.0));
    assert!(!link.has_bandwidth(300.1));
    link.reserve_bandwidth(300.0).unwrap();
    assert!(link.has_bandwidth(0.0));
    assert!(link.reserve_bandwidth(1.0).is_err());
}

#[test]
fn test_build_requires_exactly_one_core() {
    let capacities = EdgeFabric::capacities();

    let mut no_core = EdgeFabric::topology();
    no_core.nodes.get_mut("node14").unwrap().core = false;
    assert_eq!(
        TopologyGraph::build(&no_core, &capacities).unwrap_err(),
        TopologyError::NoCore
    );

    let mut two_cores = EdgeFabric::topology();
    two_cores.nodes.get_mut("node1").unwrap().core = true;
    assert_eq!(
        TopologyGraph::build(&two_cores, &capacities).unwrap_err(),
        TopologyError::MultipleCores("node1".to_string(), "node14".to_string())
    );
}

#[test]
fn test_build_rejects_unknown_link_endpoint() {
    let mut topology = EdgeFabric::topology();
    topology.links.get_mut("node6--node3").unwrap().destination.node = "node99".to_string();
    assert_eq!(
        TopologyGraph::build(&topology, &EdgeFabric::capacities()).unwrap_err(),
        TopologyError::NodeNameNotFound("node99".to_string())
    );
}

#[test]
fn test_build_rejects_missing_capacity() {
    let mut capacities = EdgeFabric::capacities();
    capacities.remove("node7");
    assert_eq!(
        TopologyGraph::build(&EdgeFabric::topology(), &capacities).unwrap_err(),
        TopologyError::MissingCapacity("node7".to_string())
    );
}

#[test]
fn test_build_rejects_duplicate_link() {
    let mut topology = EdgeFabric::topology();
    let mut duplicate = topology.links["node6--node3"].clone();
    duplicate.source.interface = "eth7".to_string();
    topology.links.insert("node6--node3-b".to_string(), duplicate);
    assert_eq!(
        TopologyGraph::build(&topology, &EdgeFabric::capacities()).unwrap_err(),
        TopologyError::DuplicateLink {
            link: "node6--node3-b".to_string(),
            src: "node6".to_string(),
            destination: "node3".to_string(),
        }
    );
}

#[test]
fn test_remaining_bandwidth_report() {
    let mut graph = edge_fabric();
    let node13 = graph.get_node_id("node13").unwrap();
    let node12 = graph.get_node_id("node12").unwrap();
    graph.find_link_mut(node13, node12).unwrap().reserve_bandwidth(152.0).unwrap();

    let report = graph.remaining_bandwidth();
    assert_eq!(report.len(), 20);
    assert_approx_eq!(report["node13--node12"], 148.0);
    assert_approx_eq!(report["node1--node14"], 1200.0);
}
