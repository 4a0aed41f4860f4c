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

//! # Top-level topology graph module
//!
//! This module merges the topology descriptor with the cluster-reported capacity figures into
//! the in-memory graph the placement engine mutates.

use crate::descriptor::{NodeCapacity, TopologyDescriptor};
use crate::topology::types::PhysicalNetwork;
use crate::topology::{Bandwidth, Link, Node, NodeId, TopologyError};

use log::*;
use petgraph::visit::IntoEdgeReferences;
use std::collections::{BTreeMap, HashMap};

/// # TopologyGraph
///
/// The undirected physical network with one distinguished root (the packet core). Nodes carry
/// residual compute, edges carry one shared [`Link`] record each. The graph is exclusively owned
/// by one placement driver for the duration of a batch; it is not safe for concurrent mutation.
///
/// Cloning the graph clones every node and link, so a clone is a fully independent scratch copy
/// whose reservations do not leak back.
#[derive(Debug, Clone)]
pub struct TopologyGraph {
    net: PhysicalNetwork,
    ids: HashMap<String, NodeId>,
    root: NodeId,
}

impl TopologyGraph {
    /// Build the graph from a topology descriptor and the per-node capacity figures.
    ///
    /// Every topology node must have a capacity entry, exactly one node must carry the core
    /// flag, every link endpoint must name a declared node, and at most one link may connect
    /// the same pair of nodes. Anything else is an invalid-input error, raised before any
    /// residual state exists.
    pub fn build(
        topology: &TopologyDescriptor,
        capacities: &BTreeMap<String, NodeCapacity>,
    ) -> Result<Self, TopologyError> {
        let mut net = PhysicalNetwork::with_capacity(topology.nodes.len(), topology.links.len());
        let mut ids: HashMap<String, NodeId> = HashMap::new();
        let mut core: Option<(String, NodeId)> = None;

        for (name, meta) in &topology.nodes {
            let capacity = capacities
                .get(name)
                .ok_or_else(|| TopologyError::MissingCapacity(name.clone()))?;
            let id = net.add_node(Node::new(name.clone(), capacity));
            ids.insert(name.clone(), id);

            if meta.core {
                match core {
                    None => core = Some((name.clone(), id)),
                    Some((ref first, _)) => {
                        return Err(TopologyError::MultipleCores(first.clone(), name.clone()))
                    }
                }
            }
        }

        let (root_name, root) = core.ok_or(TopologyError::NoCore)?;

        for (name, link) in &topology.links {
            let source = ids
                .get(&link.source.node)
                .copied()
                .ok_or_else(|| TopologyError::NodeNameNotFound(link.source.node.clone()))?;
            let destination = ids
                .get(&link.destination.node)
                .copied()
                .ok_or_else(|| TopologyError::NodeNameNotFound(link.destination.node.clone()))?;

            if net.find_edge(source, destination).is_some() {
                return Err(TopologyError::DuplicateLink {
                    link: name.clone(),
                    src: link.source.node.clone(),
                    destination: link.destination.node.clone(),
                });
            }

            net.add_edge(
                source,
                destination,
                Link::new(name.clone(), link.link_capacity, link.link_delay),
            );
        }

        debug!(
            "built topology graph with {} nodes and {} links, rooted at {}",
            net.node_count(),
            net.edge_count(),
            root_name
        );

        Ok(Self { net, ids, root })
    }

    /// The root of the topology (the packet core).
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node by name.
    pub fn get_node_id(&self, name: &str) -> Result<NodeId, TopologyError> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| TopologyError::NodeNameNotFound(name.to_string()))
    }

    /// Access a node.
    pub fn node(&self, id: NodeId) -> Result<&Node, TopologyError> {
        self.net.node_weight(id).ok_or(TopologyError::NodeNotFound(id))
    }

    /// Access a node mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, TopologyError> {
        self.net.node_weight_mut(id).ok_or(TopologyError::NodeNotFound(id))
    }

    /// The shared link record between two adjacent nodes, regardless of which endpoint is named
    /// first.
    pub fn find_link(&self, a: NodeId, b: NodeId) -> Result<&Link, TopologyError> {
        let edge = self.net.find_edge(a, b).ok_or(TopologyError::NotConnected(a, b))?;
        self.net.edge_weight(edge).ok_or(TopologyError::NotConnected(a, b))
    }

    /// The shared link record between two adjacent nodes, mutably.
    pub fn find_link_mut(&mut self, a: NodeId, b: NodeId) -> Result<&mut Link, TopologyError> {
        let edge = self.net.find_edge(a, b).ok_or(TopologyError::NotConnected(a, b))?;
        self.net.edge_weight_mut(edge).ok_or(TopologyError::NotConnected(a, b))
    }

    /// All neighbors of a node, in ascending node-name order.
    ///
    /// The placement engine iterates adjacency exclusively through this accessor; the fixed
    /// order is what makes path enumeration, and with it the whole engine, deterministic.
    pub fn neighbors_sorted(&self, id: NodeId) -> Vec<NodeId> {
        let mut neighbors: Vec<NodeId> = self.net.neighbors(id).collect();
        neighbors.sort_by(|a, b| self.net[*a].name().cmp(self.net[*b].name()));
        neighbors
    }

    /// All node ids of the graph.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.net.node_indices().collect()
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.net.node_count()
    }

    /// Number of links.
    pub fn num_links(&self) -> usize {
        self.net.edge_count()
    }

    /// Residual bandwidth per link, keyed by link name, in deterministic order. This is the
    /// figure surfaced to operators after a batch.
    pub fn remaining_bandwidth(&self) -> BTreeMap<String, Bandwidth> {
        self.net
            .edge_references()
            .map(|edge| (edge.weight().name().to_string(), edge.weight().bandwidth()))
            .collect()
    }
}
