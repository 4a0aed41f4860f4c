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

use ranplace::descriptor::{
    self, ChainRequest, DisaggregationProfile, NodeCapacity, RequestedCompute, TopologyDescriptor,
};
use ranplace::placement::PlacementOutcome;
use ranplace::printer;
use ranplace::quantity::Quantity;

use clap::Parser;
use log::*;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;
use std::process::exit;

/// Place disaggregated RAN service chains onto a transport topology.
///
/// Reads the topology, the disaggregation profiles, the per-node capacity figures and the batch
/// of chain requests from descriptor files (YAML, or JSON for files ending in .json), places the
/// batch, and prints every chain with its chosen CU, DU and path, followed by the remaining
/// bandwidth per link.
#[derive(Parser)]
#[clap(name = "ranplace", version = "0.1.0", author = "Tibor Schneider")]
struct CommandLineArguments {
    /// Topology descriptor file
    topology: PathBuf,
    /// Disaggregation profiles file
    disaggregations: PathBuf,
    /// Node capacity file
    capacities: PathBuf,
    /// Chain request batch file
    requests: PathBuf,
    /// CPU requested for each chain component
    #[clap(long, default_value = "500m", parse(try_from_str))]
    cpu: Quantity,
    /// Memory requested for each chain component
    #[clap(long, default_value = "512Mi", parse(try_from_str))]
    memory: Quantity,
}

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the env logger
    pretty_env_logger::init();

    // run clap
    let args = CommandLineArguments::parse();

    let topology: TopologyDescriptor = descriptor::from_file(&args.topology)?;
    let disaggregations: BTreeMap<String, DisaggregationProfile> =
        descriptor::from_file(&args.disaggregations)?;
    let capacities: BTreeMap<String, NodeCapacity> = descriptor::from_file(&args.capacities)?;
    let mut requests: Vec<ChainRequest> = descriptor::from_file(&args.requests)?;

    info!(
        "placing {} chains on {} nodes with {} cpu and {} memory per component",
        requests.len(),
        topology.nodes.len(),
        args.cpu,
        args.memory
    );

    let compute = RequestedCompute { cpu: args.cpu, memory: args.memory };
    let outcome =
        ranplace::place(&topology, disaggregations, &capacities, compute, &mut requests)?;

    for request in &requests {
        println!("{}", printer::chain(request));
    }

    match outcome {
        PlacementOutcome::Placed { remaining_bandwidth } => {
            println!("\nremaining bandwidth:");
            println!("{}", printer::remaining_bandwidth(&remaining_bandwidth));
            Ok(())
        }
        PlacementOutcome::Infeasible { split } => {
            error!("batch is infeasible, first failing chain: {}", split);
            exit(1);
        }
    }
}
