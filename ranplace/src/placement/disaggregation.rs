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

//! Disaggregation validation and commit
//!
//! Relative to one disaggregation profile, this module decides whether a chain fits along one of
//! the candidate paths, and if so where its CU and DU go. Validation only reads residual state;
//! all mutation happens in the separate commit walk, so a failed validation never leaves a trace.

use crate::descriptor::{DisaggregationProfile, NetworkRequirement, RequestedCompute};
use crate::topology::{Delay, NodeId, TopologyGraph};
use crate::Error;

use itertools::Itertools;
use log::*;
use std::collections::VecDeque;

/// An accepted assignment of one chain: the CU and DU nodes and the full path from the core to
/// the RU node.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Node hosting the centralized unit; always the core-adjacent hop of the path.
    pub cu: NodeId,
    /// Node hosting the distributed unit; an interior node of the path.
    pub du: NodeId,
    /// The full path, starting at the core and ending at the RU node.
    pub path: Vec<NodeId>,
    /// Key of the disaggregation profile the chain was validated against.
    pub disaggregation: String,
}

/// Interface of one disaggregation option.
///
/// An implementation owns the network requirements of its profile and answers two questions:
/// does any candidate path admit the chain, and, once the driver accepted the answer, commit
/// the corresponding reservations.
pub trait Disaggregation {
    /// Key of the underlying profile, recorded on every accepted placement.
    fn key(&self) -> &str;

    /// Find the first feasible placement among the candidate paths, in path order. Validation
    /// never mutates residual state.
    fn validate(&self, graph: &TopologyGraph, paths: &[Vec<NodeId>]) -> Option<Placement>;

    /// Reserve CU and DU compute and the per-segment bandwidth of an accepted placement. The RU
    /// compute was already reserved by the driver. Commit immediately follows a successful
    /// validation on the same residual state, so a failure here is an internal inconsistency.
    fn commit(&self, graph: &mut TopologyGraph, placement: &Placement) -> Result<(), Error>;
}

/// The shipped [`Disaggregation`] implementation, validating a chain against the backhaul,
/// midhaul and fronthaul requirements of one profile.
///
/// ## Candidate selection
///
/// For every path (ordered core → RU): the CU goes on the core-adjacent hop (index 1); the DU
/// goes on the first interior node (index 2 up to the next-to-last) with sufficient compute. A
/// path whose CU hop lacks compute, or which offers no DU slot, is discarded. In particular a
/// path with fewer than four nodes yields no candidate, so core, CU, DU and RU are pairwise
/// distinct on every placement this validator produces.
///
/// ## Network validation
///
/// The three placement nodes split the path into backhaul (core→CU), midhaul (CU→DU) and
/// fronthaul (DU→RU). Walking the path edge by edge, entering a placement node pops the next
/// requirement off the {backhaul, midhaul, fronthaul} queue and resets the latency counter; each
/// edge then accumulates its delay and is checked against the active requirement: the link must
/// have the required bandwidth available, and if the requirement constrains latency, the
/// accumulated delay of the segment must not exceed it. A missing requirement, or a zero on
/// either axis, is a wildcard.
#[derive(Debug)]
pub struct SplitProfile<'a> {
    key: &'a str,
    profile: &'a DisaggregationProfile,
    compute: &'a RequestedCompute,
}

impl<'a> SplitProfile<'a> {
    /// Create the validator for one profile and the batch-uniform compute request.
    pub fn new(
        key: &'a str,
        profile: &'a DisaggregationProfile,
        compute: &'a RequestedCompute,
    ) -> Self {
        Self { key, profile, compute }
    }

    /// The requirement queue, consumed front to back while walking a path.
    fn requirements(&self) -> VecDeque<Option<&'a NetworkRequirement>> {
        VecDeque::from(vec![
            self.profile.backhaul.as_ref(),
            self.profile.midhaul.as_ref(),
            self.profile.fronthaul.as_ref(),
        ])
    }

    /// Check bandwidth and cumulative latency along a candidate path without mutating anything.
    fn check_network(&self, graph: &TopologyGraph, path: &[NodeId], cu: NodeId, du: NodeId) -> bool {
        let root = path[0];
        let mut queue = self.requirements();
        let mut requirement: Option<&NetworkRequirement> = None;
        let mut elapsed: Delay = 0.0;

        for (&a, &b) in path.iter().tuple_windows() {
            if a == root || a == cu || a == du {
                requirement = queue.pop_front().flatten();
                elapsed = 0.0;
            }

            let link = match graph.find_link(a, b) {
                Ok(link) => link,
                Err(_) => return false,
            };
            elapsed += link.delay();

            if let Some(requirement) = requirement {
                if !link.has_bandwidth(requirement.bandwidth) {
                    return false;
                }
                if requirement.latency > 0.0 && elapsed > requirement.latency {
                    return false;
                }
            }
        }

        true
    }
}

impl Disaggregation for SplitProfile<'_> {
    fn key(&self) -> &str {
        self.key
    }

    fn validate(&self, graph: &TopologyGraph, paths: &[Vec<NodeId>]) -> Option<Placement> {
        let memory = self.compute.memory;
        let cpu = self.compute.cpu;

        let mut candidates: Vec<(&Vec<NodeId>, NodeId, NodeId)> = Vec::new();
        for path in paths {
            if path.len() < 4 {
                // no interior node left to host the DU
                continue;
            }

            let cu = path[1];
            if !graph.node(cu).map(|n| n.has_compute(memory, cpu)).unwrap_or(false) {
                continue;
            }

            let mut du = None;
            for &interior in &path[2..path.len() - 1] {
                if graph.node(interior).map(|n| n.has_compute(memory, cpu)).unwrap_or(false) {
                    du = Some(interior);
                    break;
                }
            }

            match du {
                Some(du) => candidates.push((path, cu, du)),
                None => continue,
            }
        }

        if candidates.is_empty() {
            debug!("no candidate position for profile {}", self.key);
            return None;
        }

        for (path, cu, du) in candidates {
            if self.check_network(graph, path, cu, du) {
                return Some(Placement {
                    cu,
                    du,
                    path: path.clone(),
                    disaggregation: self.key.to_string(),
                });
            }
        }

        None
    }

    fn commit(&self, graph: &mut TopologyGraph, placement: &Placement) -> Result<(), Error> {
        let memory = self.compute.memory;
        let cpu = self.compute.cpu;

        graph
            .node_mut(placement.du)
            .and_then(|du| du.reserve_compute(memory, cpu))
            .map_err(Error::Inconsistency)?;
        graph
            .node_mut(placement.cu)
            .and_then(|cu| cu.reserve_compute(memory, cpu))
            .map_err(Error::Inconsistency)?;

        let path = &placement.path;
        let root = path[0];
        let mut queue = self.requirements();
        let mut requirement: Option<&NetworkRequirement> = None;

        for (&a, &b) in path.iter().tuple_windows() {
            if a == root || a == placement.cu || a == placement.du {
                requirement = queue.pop_front().flatten();
            }

            if let Some(requirement) = requirement {
                graph
                    .find_link_mut(a, b)
                    .and_then(|link| link.reserve_bandwidth(requirement.bandwidth))
                    .map_err(Error::Inconsistency)?;
            }
        }

        Ok(())
    }
}
