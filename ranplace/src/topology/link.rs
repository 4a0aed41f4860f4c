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

//! Module for a single physical link

use crate::topology::{Bandwidth, Delay, TopologyError};

/// One physical link of the topology, carrying its residual bandwidth and constant delay.
///
/// There is exactly one `Link` value per physical connection, stored as the edge weight of the
/// graph. Both endpoint nodes reach it through the same edge, so a reservation made from either
/// side decrements the single shared counter. The delay is fixed at construction; it is
/// compared during validation, never consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    name: String,
    bandwidth: Bandwidth,
    delay: Delay,
}

impl Link {
    /// Create a link with the full capacity as starting residual.
    pub fn new<S: Into<String>>(name: S, capacity: Bandwidth, delay: Delay) -> Self {
        Self { name: name.into(), bandwidth: capacity, delay }
    }

    /// Name of the link.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Residual bandwidth.
    pub fn bandwidth(&self) -> Bandwidth {
        self.bandwidth
    }

    /// Propagation delay.
    pub fn delay(&self) -> Delay {
        self.delay
    }

    /// Check whether the link still has the required bandwidth. Equality is admitted.
    pub fn has_bandwidth(&self, required: Bandwidth) -> bool {
        self.bandwidth >= required
    }

    /// Subtract the required bandwidth from the residual.
    ///
    /// If the residual drops below zero the reservation fails and the link is left in the
    /// subtracted state. Callers are expected to have verified feasibility with
    /// [`has_bandwidth`](Link::has_bandwidth) first.
    pub fn reserve_bandwidth(&mut self, required: Bandwidth) -> Result<(), TopologyError> {
        self.bandwidth -= required;

        if self.bandwidth < 0.0 {
            return Err(TopologyError::InsufficientBandwidth {
                link: self.name.clone(),
                remaining: self.bandwidth,
            });
        }

        Ok(())
    }
}
