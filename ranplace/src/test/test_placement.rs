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

//! Test the placement driver end to end on the example topologies.

use crate::descriptor::{ChainRequest, TopologyDescriptor};
use crate::example_topologies::{ChainFabric, EdgeFabric, ExampleTopology};
use crate::placement::{Placer, PlacementOutcome};
use crate::quantity::Quantity;
use crate::topology::TopologyError;
use crate::Error;

use assert_approx_eq::assert_approx_eq;
use maplit::btreemap;

fn quantity(s: &str) -> Quantity {
    s.parse().unwrap()
}

fn generate_requests(nodes: &[&str]) -> Vec<ChainRequest> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| ChainRequest::new(format!("split{}", i), node.to_string()))
        .collect()
}

fn edge_placer() -> Placer {
    super::init_logger();
    Placer::new(
        &EdgeFabric::topology(),
        EdgeFabric::disaggregations(),
        &EdgeFabric::capacities(),
        EdgeFabric::requested_compute(),
    )
    .unwrap()
}

fn chain_placer(topology: &TopologyDescriptor) -> Placer {
    super::init_logger();
    Placer::new(
        topology,
        ChainFabric::disaggregations(),
        &ChainFabric::capacities(),
        ChainFabric::requested_compute(),
    )
    .unwrap()
}

fn assert_chain(request: &ChainRequest, cu: &str, du: &str, path: &[&str]) {
    assert_eq!(request.cu_node, cu);
    assert_eq!(request.du_node, du);
    assert_eq!(request.path, path.iter().map(|n| n.to_string()).collect::<Vec<_>>());
    assert_eq!(request.disaggregation, "1");
}

#[test]
fn test_two_chains_on_node6() {
    let mut placer = edge_placer();
    let mut requests = generate_requests(&["node6", "node6"]);

    let outcome = placer.place(&mut requests).unwrap();
    assert!(outcome.is_placed());

    assert_chain(&requests[0], "node1", "node3", &["node14", "node1", "node3", "node6"]);
    assert_chain(&requests[1], "node1", "node4", &["node14", "node1", "node4", "node6"]);

    let remaining = placer.remaining_bandwidth();
    assert_approx_eq!(remaining["node1--node14"], 1200.0 - 2.0 * 151.0);
    assert_approx_eq!(remaining["node3--node1"], 1200.0 - 151.0);
    assert_approx_eq!(remaining["node4--node1"], 1200.0 - 151.0);
    assert_approx_eq!(remaining["node6--node3"], 300.0 - 152.0);
    assert_approx_eq!(remaining["node6--node4"], 300.0 - 152.0);
    // untouched links keep their full capacity
    assert_approx_eq!(remaining["node2--node14"], 1200.0);
    assert_approx_eq!(remaining["node13--node12"], 300.0);

    // compute residuals shrink once per hosted component
    let graph = placer.graph();
    let cpu_of = |name: &str| graph.node(graph.get_node_id(name).unwrap()).unwrap().cpu();
    let memory_of = |name: &str| graph.node(graph.get_node_id(name).unwrap()).unwrap().memory();
    assert_eq!(cpu_of("node6"), quantity("3000m"));
    assert_eq!(cpu_of("node1"), quantity("3000m"));
    assert_eq!(cpu_of("node3"), quantity("3500m"));
    assert_eq!(cpu_of("node4"), quantity("3500m"));
    assert_eq!(cpu_of("node14"), quantity("4000m"));
    assert_eq!(memory_of("node6"), quantity("5120Mi"));
    assert_eq!(memory_of("node1"), quantity("5120Mi"));
}

#[test]
fn test_third_chain_on_node6_is_infeasible() {
    let mut placer = edge_placer();
    let mut requests = generate_requests(&["node6", "node6", "node6"]);

    let outcome = placer.place(&mut requests).unwrap();
    assert_eq!(outcome, PlacementOutcome::Infeasible { split: "split2".to_string() });

    // the first two chains keep their placements and deductions, the third stays untouched
    assert!(requests[0].is_placed());
    assert!(requests[1].is_placed());
    assert!(!requests[2].is_placed());
    assert!(requests[2].cu_node.is_empty());
    assert!(requests[2].du_node.is_empty());
    assert!(requests[2].path.is_empty());
    assert!(requests[2].disaggregation.is_empty());

    let remaining = placer.remaining_bandwidth();
    assert_approx_eq!(remaining["node6--node3"], 148.0);
    assert_approx_eq!(remaining["node6--node4"], 148.0);

    // the radio-unit pre-reservation of the failed chain is not rolled back
    let graph = placer.graph();
    let node6 = graph.node(graph.get_node_id("node6").unwrap()).unwrap();
    assert_eq!(node6.cpu(), quantity("2500m"));
    assert_eq!(node6.memory(), quantity("4608Mi"));
}

#[test]
fn test_single_chain_on_node13() {
    let mut placer = edge_placer();
    let mut requests = generate_requests(&["node13"]);

    let outcome = placer.place(&mut requests).unwrap();
    assert!(outcome.is_placed());

    // node13 sits five hops from the core; the path reflects that depth
    assert_chain(
        &requests[0],
        "node1",
        "node4",
        &["node14", "node1", "node4", "node11", "node12", "node13"],
    );

    let remaining = placer.remaining_bandwidth();
    assert_approx_eq!(remaining["node1--node14"], 1200.0 - 151.0);
    assert_approx_eq!(remaining["node4--node1"], 1200.0 - 151.0);
    assert_approx_eq!(remaining["node11--node4"], 300.0 - 152.0);
    assert_approx_eq!(remaining["node12--node11"], 300.0 - 152.0);
    assert_approx_eq!(remaining["node13--node12"], 300.0 - 152.0);
}

#[test]
fn test_second_chain_on_node13_is_infeasible() {
    let mut placer = edge_placer();
    let mut requests = generate_requests(&["node13", "node13"]);

    let outcome = placer.place(&mut requests).unwrap();
    assert_eq!(outcome, PlacementOutcome::Infeasible { split: "split1".to_string() });

    // the deep branch shares its last hop across every candidate path, so the first chain
    // exhausts it
    assert!(requests[0].is_placed());
    assert!(!requests[1].is_placed());
    assert_approx_eq!(placer.remaining_bandwidth()["node13--node12"], 148.0);
}

#[test]
fn test_unknown_radio_unit_node_fails_before_any_reservation() {
    let mut placer = edge_placer();
    let mut requests = generate_requests(&["node6", "node99"]);

    let error = placer.place(&mut requests).unwrap_err();
    match error {
        Error::TopologyError(TopologyError::NodeNameNotFound(name)) => {
            assert_eq!(name, "node99")
        }
        e => panic!("unexpected error: {}", e),
    }

    // nothing was reserved, not even for the request listed first
    assert!(!requests[0].is_placed());
    let graph = placer.graph();
    let node6 = graph.node(graph.get_node_id("node6").unwrap()).unwrap();
    assert_eq!(node6.cpu(), quantity("4000m"));
    assert_eq!(node6.memory(), quantity("6144Mi"));
    assert_approx_eq!(placer.remaining_bandwidth()["node6--node3"], 300.0);
}

#[test]
fn test_radio_unit_without_compute_is_an_error_not_infeasible() {
    let mut capacities = EdgeFabric::capacities();
    capacities.get_mut("node6").unwrap().cpu_allocatable = quantity("400m");

    let mut placer = Placer::new(
        &EdgeFabric::topology(),
        EdgeFabric::disaggregations(),
        &capacities,
        EdgeFabric::requested_compute(),
    )
    .unwrap();

    let mut requests = generate_requests(&["node6"]);
    let error = placer.place(&mut requests).unwrap_err();
    assert!(error.is_radio_unit_infeasible());
    match error {
        Error::RadioUnitInfeasible { split, node } => {
            assert_eq!(split, "split0");
            assert_eq!(node, "node6");
        }
        e => panic!("unexpected error: {}", e),
    }
    assert!(!requests[0].is_placed());
}

#[test]
fn test_driver_requires_its_profile() {
    let profiles = btreemap! {
        "7".to_string() => EdgeFabric::disaggregations()["1"].clone(),
    };
    let mut placer = Placer::new(
        &EdgeFabric::topology(),
        profiles,
        &EdgeFabric::capacities(),
        EdgeFabric::requested_compute(),
    )
    .unwrap();

    let mut requests = generate_requests(&["node6"]);
    match placer.place(&mut requests).unwrap_err() {
        Error::UnknownDisaggregation(key) => assert_eq!(key, "1"),
        e => panic!("unexpected error: {}", e),
    }
}

#[test]
fn test_wildcard_segments_consume_no_bandwidth() {
    // profile "2" constrains neither latency axis and leaves the midhaul fully unconstrained
    let profiles = btreemap! {
        "1".to_string() => EdgeFabric::disaggregations()["2"].clone(),
    };
    let mut placer = Placer::new(
        &EdgeFabric::topology(),
        profiles,
        &EdgeFabric::capacities(),
        EdgeFabric::requested_compute(),
    )
    .unwrap();

    let mut requests = generate_requests(&["node6", "node6"]);
    let outcome = placer.place(&mut requests).unwrap();
    assert!(outcome.is_placed());
    assert_eq!(requests[0].cu_node, "node1");
    assert_eq!(requests[0].du_node, "node3");
    assert_eq!(requests[1].du_node, "node4");

    let remaining = placer.remaining_bandwidth();
    // fronthaul took 151 per chain, the wildcard midhaul took nothing
    assert_approx_eq!(remaining["node6--node3"], 300.0 - 151.0);
    assert_approx_eq!(remaining["node6--node4"], 300.0 - 151.0);
    assert_approx_eq!(remaining["node3--node1"], 1200.0);
    assert_approx_eq!(remaining["node4--node1"], 1200.0);
    assert_approx_eq!(remaining["node1--node14"], 1200.0 - 2.0 * 151.0);
}

#[test]
fn test_chain_fabric_baseline_is_feasible() {
    let mut placer = chain_placer(&ChainFabric::topology());

    let mut requests = generate_requests(&["cell"]);
    let outcome = placer.place(&mut requests).unwrap();
    assert!(outcome.is_placed());
    assert_eq!(requests[0].cu_node, "hub");
    assert_eq!(requests[0].du_node, "metro");
    assert_eq!(requests[0].path, vec!["core", "hub", "metro", "street", "cell"]);

    let remaining = placer.remaining_bandwidth();
    assert_approx_eq!(remaining["hub--core"], 900.0);
    assert_approx_eq!(remaining["metro--hub"], 900.0);
    assert_approx_eq!(remaining["street--metro"], 900.0);
    assert_approx_eq!(remaining["cell--street"], 900.0);
}

#[test]
fn test_last_hop_delay_alone_can_break_the_fronthaul_budget() {
    // fronthaul latency budget is 2; a single hop of delay 3 exceeds it even though every link
    // has plenty of bandwidth
    let mut topology = ChainFabric::topology();
    topology.links.get_mut("cell--street").unwrap().link_delay = 3.0;

    let mut placer = chain_placer(&topology);
    let mut requests = generate_requests(&["cell"]);
    let outcome = placer.place(&mut requests).unwrap();
    assert_eq!(outcome, PlacementOutcome::Infeasible { split: "split0".to_string() });
    assert!(!requests[0].is_placed());
}

#[test]
fn test_segment_latency_is_cumulative() {
    // each fronthaul hop alone fits the budget of 2, their sum does not
    let mut topology = ChainFabric::topology();
    topology.links.get_mut("street--metro").unwrap().link_delay = 1.2;
    topology.links.get_mut("cell--street").unwrap().link_delay = 1.2;

    let mut placer = chain_placer(&topology);
    let mut requests = generate_requests(&["cell"]);
    let outcome = placer.place(&mut requests).unwrap();
    assert_eq!(outcome, PlacementOutcome::Infeasible { split: "split0".to_string() });
}

#[test]
fn test_latency_counter_resets_at_segment_boundaries() {
    // a slow midhaul and an unconstrained backhaul must not count against the fronthaul budget
    let mut topology = ChainFabric::topology();
    topology.links.get_mut("hub--core").unwrap().link_delay = 100.0;
    topology.links.get_mut("metro--hub").unwrap().link_delay = 25.0;

    let mut placer = chain_placer(&topology);
    let mut requests = generate_requests(&["cell"]);
    let outcome = placer.place(&mut requests).unwrap();
    assert!(outcome.is_placed());
}

#[test]
fn test_core_adjacent_radio_unit_has_no_du_slot() {
    // the only enumerated path to node1 is the direct hop, which leaves no interior node for
    // the DU
    let mut placer = edge_placer();
    let mut requests = generate_requests(&["node1"]);

    let outcome = placer.place(&mut requests).unwrap();
    assert_eq!(outcome, PlacementOutcome::Infeasible { split: "split0".to_string() });
    assert!(!requests[0].is_placed());
}

#[test]
fn test_empty_batch_is_trivially_placed() {
    let mut placer = edge_placer();
    let outcome = placer.place(&mut []).unwrap();
    assert!(outcome.is_placed());
    assert_approx_eq!(placer.remaining_bandwidth()["node1--node14"], 1200.0);
}

#[test]
fn test_residuals_stay_nonnegative_on_accepted_batches() {
    let mut placer = edge_placer();
    let mut requests = generate_requests(&["node6", "node6", "node13", "node9"]);

    let outcome = placer.place(&mut requests).unwrap();
    assert!(outcome.is_placed());

    let graph = placer.graph();
    for id in graph.node_ids() {
        let node = graph.node(id).unwrap();
        assert!(!node.cpu().is_negative(), "negative cpu on {}", node.name());
        assert!(!node.memory().is_negative(), "negative memory on {}", node.name());
    }
    for (link, bandwidth) in placer.remaining_bandwidth() {
        assert!(bandwidth >= 0.0, "negative bandwidth on {}", link);
    }
}

#[test]
fn test_placement_positions_sit_on_the_path() {
    let mut placer = edge_placer();
    let mut requests = generate_requests(&["node6", "node13", "node9"]);

    let outcome = placer.place(&mut requests).unwrap();
    assert!(outcome.is_placed());

    for request in &requests {
        assert_eq!(request.path[0], "node14");
        assert_eq!(request.path[request.path.len() - 1], request.ru_node);
        assert_eq!(request.path[1], request.cu_node);
        let interior = &request.path[2..request.path.len() - 1];
        assert!(interior.contains(&request.du_node));
    }
}

#[test]
fn test_placement_is_deterministic() {
    let run = || {
        let mut placer = edge_placer();
        let mut requests = generate_requests(&["node6", "node6", "node13", "node9", "node6"]);
        let outcome = placer.place(&mut requests).unwrap();
        (outcome, requests, placer.remaining_bandwidth())
    };

    let (first_outcome, first_requests, first_remaining) = run();
    let (second_outcome, second_requests, second_remaining) = run();

    assert_eq!(first_outcome, second_outcome);
    assert_eq!(first_requests, second_requests);
    assert_eq!(first_remaining, second_remaining);
}
