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

//! Format placement results for humans

use crate::descriptor::ChainRequest;
use crate::topology::Bandwidth;
use std::collections::BTreeMap;

/// Render one chain request as a single line, tagging the placement nodes along the path.
///
/// A placed chain renders as
/// `split0 [1]: node14 -> node1 (CU) -> node3 (DU) -> node6 (RU)`; a chain the placer never
/// touched renders as `split0: not placed`.
pub fn chain(request: &ChainRequest) -> String {
    if !request.is_placed() {
        return format!("{}: not placed", request.split_name);
    }

    let last = request.path.len() - 1;
    let hops = request
        .path
        .iter()
        .enumerate()
        .map(|(i, node)| {
            if i == last {
                format!("{} (RU)", node)
            } else if *node == request.cu_node {
                format!("{} (CU)", node)
            } else if *node == request.du_node {
                format!("{} (DU)", node)
            } else {
                node.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" -> ");

    format!("{} [{}]: {}", request.split_name, request.disaggregation, hops)
}

/// Render the remaining-bandwidth report as one line per link, in link-name order.
pub fn remaining_bandwidth(report: &BTreeMap<String, Bandwidth>) -> String {
    report
        .iter()
        .map(|(link, bandwidth)| format!("{}: {}", link, bandwidth))
        .collect::<Vec<_>>()
        .join("\n")
}
