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

//! Module containing all type definitions

use crate::quantity::Quantity;
use crate::topology::link::Link;
use crate::topology::node::Node;
use petgraph::prelude::*;
use petgraph::stable_graph::StableGraph;
use thiserror::Error;

type IndexType = u32;
/// Node identification (and index into the graph)
pub type NodeId = NodeIndex<IndexType>;
/// Link bandwidth, in the same unit the topology descriptor uses
pub type Bandwidth = f32;
/// Link propagation delay, in the same unit the topology descriptor uses
pub type Delay = f32;
/// The physical network graph
pub type PhysicalNetwork = StableGraph<Node, Link, Undirected, IndexType>;

/// Topology Errors
#[derive(Error, Debug, PartialEq)]
pub enum TopologyError {
    /// No node carries the core flag
    #[error("The topology declares no core node!")]
    NoCore,
    /// More than one node carries the core flag
    #[error("The topology declares more than one core node: {0}, {1}")]
    MultipleCores(String, String),
    /// Node name is not present in the topology
    #[error("Node name was not found in topology: {0}")]
    NodeNameNotFound(String),
    /// Node is not present in the topology
    #[error("Node was not found in topology: {0:?}")]
    NodeNotFound(NodeId),
    /// Two nodes are not adjacent
    #[error("Topology link does not exist: {0:?} -> {1:?}")]
    NotConnected(NodeId, NodeId),
    /// A second physical link was declared between the same pair of nodes
    #[error("Duplicate link {link} between {src} and {destination}")]
    DuplicateLink {
        /// Name of the offending link entry
        link: String,
        /// First endpoint node
        src: String,
        /// Second endpoint node
        destination: String,
    },
    /// The capacity mapping has no entry for a node named in the topology
    #[error("No capacity figures for topology node: {0}")]
    MissingCapacity(String),
    /// A compute reservation went below zero. The node keeps the subtracted state.
    #[error("Node {node} has insufficient compute: cpu {cpu}, memory {memory}")]
    InsufficientCompute {
        /// Name of the node
        node: String,
        /// CPU residual after the subtraction
        cpu: Quantity,
        /// Memory residual after the subtraction
        memory: Quantity,
    },
    /// A bandwidth reservation went below zero. The link keeps the subtracted state.
    #[error("Link {link} has insufficient bandwidth: {remaining}")]
    InsufficientBandwidth {
        /// Name of the link
        link: String,
        /// Bandwidth residual after the subtraction
        remaining: Bandwidth,
    },
}
