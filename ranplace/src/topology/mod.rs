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

//! # Topology
//!
//! The in-memory resource model the placement engine works on: an undirected graph of
//! [`Nodes`](Node) with residual compute and [`Links`](Link) with residual bandwidth, rooted at
//! the packet core. See the main structure [`TopologyGraph`].
//!
//! A link is one record per physical connection. Both endpoint nodes reach the same record
//! through the graph, so a bandwidth reservation made while walking the path in one direction is
//! visible from the other. Cloning the graph deep-clones nodes and links, which makes a clone a
//! fully independent scratch copy.

mod graph;
mod link;
mod node;
mod types;

pub use graph::TopologyGraph;
pub use link::Link;
pub use node::Node;
pub use types::{Bandwidth, Delay, NodeId, PhysicalNetwork, TopologyError};
