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

//! Breadth-first path enumeration from the core

use crate::topology::{NodeId, TopologyGraph};
use std::collections::{HashMap, HashSet, VecDeque};

/// Enumerates paths from the root of the topology to a target node, caching the result per
/// target for its own lifetime (one driver instance, one batch).
///
/// The walk is breadth-first with a visited set shared across *all* partial paths: a node is
/// marked visited when its partial path is dequeued, and a neighbor already visited at expansion
/// time is not enqueued again. This is not all-simple-paths enumeration, but a spanning
/// exploration that terminates in `O(V+E)` and yields a family of paths biased toward
/// core-proximal branches, which is exactly the bias the CU placement wants. A node enqueued by
/// several parents before its first dequeue still produces one path per parent; paths are
/// emitted in dequeue order.
///
/// Neighbors expand in ascending node-name order, so enumeration order is a deterministic
/// function of the topology alone.
#[derive(Debug, Default)]
pub struct PathEnumerator {
    cache: HashMap<NodeId, Vec<Vec<NodeId>>>,
}

impl PathEnumerator {
    /// Create an enumerator with an empty cache.
    pub fn new() -> Self {
        Self { cache: HashMap::new() }
    }

    /// All enumerated paths from the root of `graph` to `target`, in enumeration order. Each
    /// path starts at the root and ends at `target` without repeating a node.
    pub fn paths_to(&mut self, graph: &TopologyGraph, target: NodeId) -> &[Vec<NodeId>] {
        if !self.cache.contains_key(&target) {
            let paths = Self::enumerate(graph, target);
            self.cache.insert(target, paths);
        }
        &self.cache[&target]
    }

    fn enumerate(graph: &TopologyGraph, target: NodeId) -> Vec<Vec<NodeId>> {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<Vec<NodeId>> = VecDeque::new();
        queue.push_back(vec![graph.root()]);

        let mut paths: Vec<Vec<NodeId>> = Vec::new();

        while let Some(path) = queue.pop_front() {
            let current = path[path.len() - 1];
            visited.insert(current);

            if current == target {
                paths.push(path.clone());
            }

            for neighbor in graph.neighbors_sorted(current) {
                if !visited.contains(&neighbor) {
                    let mut next = path.clone();
                    next.push(neighbor);
                    queue.push_back(next);
                }
            }
        }

        paths
    }
}
