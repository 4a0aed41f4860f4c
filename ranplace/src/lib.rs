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

#![deny(missing_docs)]

//! # RANPlace: Placing Disaggregated RAN Service Chains
//!
//! This is a library for placing the functional components of a disaggregated Radio Access
//! Network, the Radio Unit (RU), Distributed Unit (DU) and Centralized Unit (CU), onto the nodes
//! of a datacenter or edge topology. Each service chain pins its RU to a node; the placer chooses
//! the CU and DU nodes and a physical path from the packet core to the RU, such that every node
//! has enough compute left, and every transport segment (backhaul, midhaul, fronthaul) stays
//! within its bandwidth and latency budget.
//!
//! ## Structure
//!
//! This library is structured in the following way:
//!
//! - **[`Topology`](topology)**: The in-memory resource model. The main structure is the
//!   [`TopologyGraph`](topology::TopologyGraph), an undirected graph of
//!   [`Nodes`](topology::Node) (residual CPU and memory) and [`Links`](topology::Link) (residual
//!   bandwidth and a constant propagation delay), rooted at the packet core. A link is a single
//!   record visible from both of its endpoints, so a reservation made through one endpoint is
//!   seen by the other.
//!
//! - **[`Placement`](placement)**: The placement engine. The
//!   [`PathEnumerator`](placement::PathEnumerator) walks the graph breadth-first from the core
//!   and enumerates candidate paths to an RU node. The [`Disaggregation`](placement::Disaggregation)
//!   seam, implemented by [`SplitProfile`](placement::SplitProfile), picks CU and DU nodes along
//!   a candidate path and validates the per-segment network requirements. The
//!   [`Placer`](placement::Placer) drives one batch of [`ChainRequests`](descriptor::ChainRequest)
//!   to completion, committing resources chain by chain.
//!
//! - **[`Descriptor`](descriptor)**: The typed wire model for topology descriptors,
//!   disaggregation profiles, node capacities and chain requests, together with YAML and JSON
//!   loaders.
//!
//! - **[`Quantity`](quantity)**: Cluster-native CPU and memory figures (`"500m"`, `"512Mi"`),
//!   stored and subtracted as scaled integers, never as floats.
//!
//! - **[`ExampleTopologies`](example_topologies)**: Prepared topologies and disaggregation
//!   profiles for tests and experiments, including the 14-node edge fabric rooted at `node14`.
//!
//! - **[`Printer`](printer)**: Render placed chains and the remaining-bandwidth report for
//!   humans.
//!
//! ## Usage
//!
//! Load (or build) a topology descriptor, the disaggregation profiles and the per-node capacity
//! figures, then hand the batch of chain requests to [`place`]:
//!
//! ```
//! use ranplace::descriptor::ChainRequest;
//! use ranplace::example_topologies::{EdgeFabric, ExampleTopology};
//!
//! fn main() -> Result<(), ranplace::Error> {
//!     let mut requests = vec![ChainRequest::new("split0", "node6")];
//!
//!     let outcome = ranplace::place(
//!         &EdgeFabric::topology(),
//!         EdgeFabric::disaggregations(),
//!         &EdgeFabric::capacities(),
//!         EdgeFabric::requested_compute(),
//!         &mut requests,
//!     )?;
//!
//!     assert!(outcome.is_placed());
//!     assert_eq!(requests[0].cu_node, "node1");
//!     assert_eq!(requests[0].path[0], "node14");
//!
//!     Ok(())
//! }
//! ```

// test modules
pub mod example_topologies;
mod test;

pub mod descriptor;
mod error;
pub mod placement;
pub mod printer;
pub mod quantity;
pub mod topology;

mod place;
pub use place::place;

pub use error::Error;
