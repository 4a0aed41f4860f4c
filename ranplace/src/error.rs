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

//! Module containing all error types

use crate::descriptor::DescriptorError;
use crate::topology::TopologyError;
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error propagated from the topology model (invalid input, unknown nodes, missing core, ...)
    #[error("Topology Error: {0}")]
    TopologyError(#[from] TopologyError),
    /// Error while loading or decoding a descriptor document
    #[error("Descriptor Error: {0}")]
    DescriptorError(#[from] DescriptorError),
    /// A radio unit was pinned to a node that cannot host it. This is raised during the
    /// pre-reservation phase, before any chain is placed, and fails the entire batch.
    #[error("chain {split}: radio unit does not fit on node {node}")]
    RadioUnitInfeasible {
        /// Name of the chain whose radio unit could not be reserved
        split: String,
        /// Node the radio unit was pinned to
        node: String,
    },
    /// The disaggregation profile the driver operates on is not part of the profile map.
    #[error("disaggregation profile {0} is not defined")]
    UnknownDisaggregation(String),
    /// A commit step failed right after validation admitted the same placement. The residual
    /// state is no longer trustworthy; this indicates a bug.
    #[error("validation and commit disagree on residual state: {0}")]
    Inconsistency(TopologyError),
}

impl Error {
    /// Returns true if and only if the error was raised while reserving radio-unit compute.
    pub fn is_radio_unit_infeasible(&self) -> bool {
        matches!(self, Self::RadioUnitInfeasible { .. })
    }
}
