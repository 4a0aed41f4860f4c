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

//! Module for a single compute node

use crate::descriptor::NodeCapacity;
use crate::quantity::Quantity;
use crate::topology::TopologyError;

/// One compute node of the topology, carrying its residual CPU and memory.
///
/// The residuals start at the cluster-reported *allocatable* figures and shrink with every
/// committed reservation. Between chain commits both residuals are nonnegative; a transient
/// negative value only exists inside a failed [`reserve_compute`](Node::reserve_compute) call,
/// which reports the failure and leaves the subtracted state for the caller to inspect.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    cpu: Quantity,
    memory: Quantity,
}

impl Node {
    /// Create a node with the capacity's allocatable figures as starting residuals.
    pub fn new<S: Into<String>>(name: S, capacity: &NodeCapacity) -> Self {
        Self {
            name: name.into(),
            cpu: capacity.cpu_allocatable,
            memory: capacity.memory_allocatable,
        }
    }

    /// Name of the node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Residual CPU.
    pub fn cpu(&self) -> Quantity {
        self.cpu
    }

    /// Residual memory.
    pub fn memory(&self) -> Quantity {
        self.memory
    }

    /// Check whether the node can host one more component of the given size.
    ///
    /// The comparison is strictly greater-than on both axes: a node whose residual exactly
    /// equals the request is considered insufficient, which keeps one unit of headroom on every
    /// node.
    pub fn has_compute(&self, memory: Quantity, cpu: Quantity) -> bool {
        self.memory > memory && self.cpu > cpu
    }

    /// Subtract one component worth of compute from the residuals.
    ///
    /// If either axis drops below zero the reservation fails and the node is left in the
    /// subtracted state. Callers are expected to have verified feasibility with
    /// [`has_compute`](Node::has_compute) first.
    pub fn reserve_compute(&mut self, memory: Quantity, cpu: Quantity) -> Result<(), TopologyError> {
        self.memory -= memory;
        self.cpu -= cpu;

        if self.cpu.is_negative() || self.memory.is_negative() {
            return Err(TopologyError::InsufficientCompute {
                node: self.name.clone(),
                cpu: self.cpu,
                memory: self.memory,
            });
        }

        Ok(())
    }
}
