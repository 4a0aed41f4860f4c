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

//! The placement driver

use crate::descriptor::{
    ChainRequest, DisaggregationProfile, NodeCapacity, RequestedCompute, TopologyDescriptor,
};
use crate::placement::disaggregation::{Disaggregation, Placement, SplitProfile};
use crate::placement::paths::PathEnumerator;
use crate::placement::PlacementOutcome;
use crate::topology::{Bandwidth, NodeId, TopologyGraph};
use crate::Error;

use log::*;
use std::collections::BTreeMap;

/// Key of the disaggregation profile the driver operates on.
pub const DEFAULT_DISAGGREGATION: &str = "1";

/// # Placement driver
///
/// Owns the in-memory graph, the disaggregation profiles, the batch-uniform compute request and
/// the path cache, and drives one batch of chain requests to completion. Construct a fresh
/// driver from freshly read descriptors for every batch; the driver holds no state beyond the
/// graph it was built with, and the graph is discarded with it.
#[derive(Debug)]
pub struct Placer {
    graph: TopologyGraph,
    disaggregations: BTreeMap<String, DisaggregationProfile>,
    compute: RequestedCompute,
    paths: PathEnumerator,
}

impl Placer {
    /// Build the driver: merge the topology descriptor with the capacity figures into the
    /// in-memory graph and keep the profiles and the compute request for the batch.
    pub fn new(
        topology: &TopologyDescriptor,
        disaggregations: BTreeMap<String, DisaggregationProfile>,
        capacities: &BTreeMap<String, NodeCapacity>,
        compute: RequestedCompute,
    ) -> Result<Self, Error> {
        let graph = TopologyGraph::build(topology, capacities)?;
        Ok(Self { graph, disaggregations, compute, paths: PathEnumerator::new() })
    }

    /// The working graph, carrying the residual state of the batch so far.
    pub fn graph(&self) -> &TopologyGraph {
        &self.graph
    }

    /// Residual bandwidth per link, keyed by link name.
    pub fn remaining_bandwidth(&self) -> BTreeMap<String, Bandwidth> {
        self.graph.remaining_bandwidth()
    }

    /// Place one batch of chain requests, in list order.
    ///
    /// First, every radio unit is pinned down: all RU node names are resolved (an unknown name
    /// fails the batch before any residual is touched), then RU compute is reserved request by
    /// request; a node that cannot host its radio unit fails the batch with
    /// [`Error::RadioUnitInfeasible`].
    ///
    /// Then each request in turn gets the candidate paths to its RU node and the first feasible
    /// (path, CU, DU) triple under profile [`DEFAULT_DISAGGREGATION`]; on success the
    /// reservations are committed and the request's output fields are filled. A request without
    /// a feasible placement ends the batch with [`PlacementOutcome::Infeasible`].
    ///
    /// Requests earlier in the list consume resources later ones cannot see; the driver does not
    /// reorder, backtrack or bin-pack. On a mid-batch infeasibility the requests placed earlier
    /// keep their filled output fields and their deductions in the working graph: the partially
    /// mutated batch is what the caller gets to inspect.
    pub fn place(&mut self, requests: &mut [ChainRequest]) -> Result<PlacementOutcome, Error> {
        let ru_nodes = self.resolve_radio_units(requests)?;
        self.reserve_radio_units(requests, &ru_nodes)?;

        let profile = self
            .disaggregations
            .get(DEFAULT_DISAGGREGATION)
            .ok_or_else(|| Error::UnknownDisaggregation(DEFAULT_DISAGGREGATION.to_string()))?;
        let disaggregation = SplitProfile::new(DEFAULT_DISAGGREGATION, profile, &self.compute);

        for (request, &ru) in requests.iter_mut().zip(ru_nodes.iter()) {
            let paths = self.paths.paths_to(&self.graph, ru);

            match disaggregation.validate(&self.graph, paths) {
                Some(placement) => {
                    disaggregation.commit(&mut self.graph, &placement)?;
                    fulfill(request, &placement, &self.graph)?;
                    info!(
                        "placed chain {} with profile {}: {}",
                        request.split_name,
                        disaggregation.key(),
                        request.path.join(" -> ")
                    );
                }
                None => {
                    warn!("no feasible placement for chain {}", request.split_name);
                    return Ok(PlacementOutcome::Infeasible { split: request.split_name.clone() });
                }
            }
        }

        info!("placed all {} chains", requests.len());
        Ok(PlacementOutcome::Placed { remaining_bandwidth: self.graph.remaining_bandwidth() })
    }

    /// Resolve every RU node name before the first reservation.
    fn resolve_radio_units(&self, requests: &[ChainRequest]) -> Result<Vec<NodeId>, Error> {
        let mut ru_nodes = Vec::with_capacity(requests.len());
        for request in requests {
            ru_nodes.push(self.graph.get_node_id(&request.ru_node)?);
        }
        Ok(ru_nodes)
    }

    /// Reserve RU compute for every request, in list order.
    fn reserve_radio_units(
        &mut self,
        requests: &[ChainRequest],
        ru_nodes: &[NodeId],
    ) -> Result<(), Error> {
        for (request, &ru) in requests.iter().zip(ru_nodes.iter()) {
            let node = self.graph.node_mut(ru)?;
            if node.reserve_compute(self.compute.memory, self.compute.cpu).is_err() {
                return Err(Error::RadioUnitInfeasible {
                    split: request.split_name.clone(),
                    node: request.ru_node.clone(),
                });
            }
            info!("reserved radio unit of chain {} on {}", request.split_name, request.ru_node);
        }

        info!("reserved all {} radio units", requests.len());
        Ok(())
    }
}

/// Write the accepted placement back into the request. This is the only point where a request
/// is mutated, and it happens exactly once per placed chain.
fn fulfill(
    request: &mut ChainRequest,
    placement: &Placement,
    graph: &TopologyGraph,
) -> Result<(), Error> {
    request.cu_node = graph.node(placement.cu)?.name().to_string();
    request.du_node = graph.node(placement.du)?.name().to_string();
    request.path = placement
        .path
        .iter()
        .map(|&id| graph.node(id).map(|n| n.name().to_string()))
        .collect::<Result<_, _>>()?;
    request.disaggregation = placement.disaggregation.clone();
    Ok(())
}
