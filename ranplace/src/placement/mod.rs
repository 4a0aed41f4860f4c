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

//! # Placement
//!
//! The placement engine. It consists of three parts:
//!
//! - The [`PathEnumerator`] walks the topology breadth-first from the core and enumerates
//!   candidate paths to an RU node, caching results per target.
//! - The [`Disaggregation`] seam decides, for one profile, whether a chain fits along one of the
//!   candidate paths, and commits the chosen placement. [`SplitProfile`] is the shipped
//!   implementation.
//! - The [`Placer`] drives a whole batch: it pre-reserves RU compute, then walks the requests in
//!   list order, asking the enumerator for paths and the profile for a feasible placement, and
//!   commits each accepted chain before looking at the next one.
//!
//! Placing a batch is a synchronous computation over in-memory state: no I/O, no blocking, no
//! timeout. For a fixed input the engine is fully deterministic.

mod disaggregation;
mod driver;
mod paths;

pub use disaggregation::{Disaggregation, Placement, SplitProfile};
pub use driver::{Placer, DEFAULT_DISAGGREGATION};
pub use paths::PathEnumerator;

use crate::topology::Bandwidth;
use std::collections::BTreeMap;

/// The verdict of placing one batch of chain requests.
///
/// Invalid input, an unplaceable radio unit or an internal inconsistency are *errors* and
/// surface as [`Err`](crate::Error) instead; this type only distinguishes the two regular
/// outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementOutcome {
    /// Every chain of the batch was placed and committed.
    Placed {
        /// Residual bandwidth per link after the batch, for operator observability.
        remaining_bandwidth: BTreeMap<String, Bandwidth>,
    },
    /// No feasible placement exists for one chain. Chains placed earlier in the batch keep
    /// their filled output fields and their resource deductions; the failing chain and all later
    /// ones are untouched.
    Infeasible {
        /// Name of the first chain without a feasible placement.
        split: String,
    },
}

impl PlacementOutcome {
    /// Returns true if and only if the whole batch was placed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed { .. })
    }

    /// Returns true if and only if a chain was infeasible.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible { .. })
    }
}
