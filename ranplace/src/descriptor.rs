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

//! # Descriptor documents
//!
//! The typed wire model consumed by the placer: the topology descriptor, the disaggregation
//! profiles, the per-node capacity figures and the chain-request batch. Documents are decoded
//! directly into these structs with serde (there is no untyped intermediate representation),
//! and both YAML and JSON sources are accepted. Field names on the wire are camelCase; unknown
//! fields are ignored.
//!
//! Mappings deserialize into [`BTreeMap`], so iteration over nodes, links and profiles is in
//! lexicographic key order. The placer relies on this for deterministic graph construction.

use crate::quantity::Quantity;
use crate::topology::{Bandwidth, Delay};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;
use thiserror::Error;

/// The transport topology: named nodes and the physical links between them.
///
/// Exactly one node must carry the `core` flag; the graph builder rejects everything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologyDescriptor {
    /// Mapping from node name to node metadata.
    #[serde(default)]
    pub nodes: BTreeMap<String, NodeDescriptor>,
    /// Mapping from link name to link endpoints and figures.
    #[serde(default)]
    pub links: BTreeMap<String, LinkDescriptor>,
}

/// Metadata of one topology node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// Physical interface names on this node. Informational.
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Whether this node is the packet core (the root of the topology).
    #[serde(default)]
    pub core: bool,
    /// Distance from the core in hops. Informational.
    #[serde(default)]
    pub hops: u32,
}

/// One physical link between two topology nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDescriptor {
    /// Total bandwidth of the link; consumed as the starting residual.
    #[serde(default)]
    pub link_capacity: Bandwidth,
    /// Propagation delay of the link. Constant, never consumed.
    #[serde(default)]
    pub link_delay: Delay,
    /// First endpoint.
    pub source: Endpoint,
    /// Second endpoint. The link is undirected; source and destination only name the ends.
    pub destination: Endpoint,
}

/// One end of a physical link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Name of the node this end attaches to. Must appear in the topology's node mapping.
    pub node: String,
    /// Interface on that node. Informational.
    #[serde(default)]
    pub interface: String,
}

/// A disaggregation profile: which protocol layers run where, and what each transport segment
/// requires.
///
/// A missing segment is a wildcard on both axes; a present segment with a zero bandwidth or
/// latency is a wildcard on that axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisaggregationProfile {
    /// Which protocol layers run on the CU, DU and RU. Carried through, never interpreted.
    #[serde(default)]
    pub protocol_stack: ProtocolStack,
    /// Requirements on the core-to-CU segment.
    #[serde(default)]
    pub backhaul: Option<NetworkRequirement>,
    /// Requirements on the CU-to-DU segment.
    #[serde(default)]
    pub midhaul: Option<NetworkRequirement>,
    /// Requirements on the DU-to-RU segment.
    #[serde(default)]
    pub fronthaul: Option<NetworkRequirement>,
}

/// Assignment of protocol layers to the three chain components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtocolStack {
    /// Layers running on the centralized unit.
    #[serde(default)]
    pub cu: Vec<ProtocolLayer>,
    /// Layers running on the distributed unit.
    #[serde(default)]
    pub du: Vec<ProtocolLayer>,
    /// Layers running on the radio unit.
    #[serde(default)]
    pub ru: Vec<ProtocolLayer>,
}

/// One layer of the radio protocol stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolLayer {
    /// Radio Resource Control
    #[serde(rename = "RRC")]
    Rrc,
    /// Packet Data Convergence Protocol
    #[serde(rename = "PDCP")]
    Pdcp,
    /// Radio Link Control, upper part
    #[serde(rename = "RLCH")]
    RlcHigh,
    /// Radio Link Control, lower part
    #[serde(rename = "RLCL")]
    RlcLow,
    /// Medium Access Control, upper part
    #[serde(rename = "MACH")]
    MacHigh,
    /// Medium Access Control, lower part
    #[serde(rename = "MACL")]
    MacLow,
    /// Physical layer, upper part
    #[serde(rename = "PHYH")]
    PhyHigh,
    /// Physical layer, lower part
    #[serde(rename = "PHYL")]
    PhyLow,
    /// Radio frontend
    #[serde(rename = "RF")]
    Rf,
}

/// Bandwidth and latency budget of one transport segment. A zero on either axis means
/// unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkRequirement {
    /// Bandwidth every link of the segment must still have available.
    #[serde(default)]
    pub bandwidth: Bandwidth,
    /// Upper bound on the cumulative propagation delay of the segment.
    #[serde(default)]
    pub latency: Delay,
}

/// Cluster-reported capacity figures for one node. Only the allocatable values are consumed as
/// starting residuals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeCapacity {
    /// Total CPU installed on the node. Informational.
    #[serde(default)]
    pub cpu_capacity: Quantity,
    /// Total memory installed on the node. Informational.
    #[serde(default)]
    pub memory_capacity: Quantity,
    /// CPU the cluster will actually hand out; the node's starting CPU residual.
    #[serde(default)]
    pub cpu_allocatable: Quantity,
    /// Memory the cluster will actually hand out; the node's starting memory residual.
    #[serde(default)]
    pub memory_allocatable: Quantity,
}

/// One RU-to-core service chain of a batch.
///
/// The caller fills `split_name` and `ru_node`; the placer fills the remaining fields exactly
/// once when the chain is placed, and leaves them untouched when it is not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainRequest {
    /// Name of the chain, unique within the batch.
    pub split_name: String,
    /// Node the radio unit is pinned to.
    pub ru_node: String,
    /// Node chosen for the centralized unit. Filled by the placer.
    #[serde(default)]
    pub cu_node: String,
    /// Node chosen for the distributed unit. Filled by the placer.
    #[serde(default)]
    pub du_node: String,
    /// Full physical path from the core to the RU node. Filled by the placer.
    #[serde(default)]
    pub path: Vec<String>,
    /// Key of the disaggregation profile the chain was placed with. Filled by the placer.
    #[serde(default)]
    pub disaggregation: String,
}

impl ChainRequest {
    /// Create a request with empty output fields.
    pub fn new<S: Into<String>>(split_name: S, ru_node: S) -> Self {
        Self {
            split_name: split_name.into(),
            ru_node: ru_node.into(),
            cu_node: String::new(),
            du_node: String::new(),
            path: Vec::new(),
            disaggregation: String::new(),
        }
    }

    /// Returns true once the placer has filled the output fields.
    pub fn is_placed(&self) -> bool {
        !self.cu_node.is_empty() && !self.du_node.is_empty() && !self.path.is_empty()
    }
}

/// The uniform compute request applied to the CU, DU and RU of every chain in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestedCompute {
    /// CPU reserved per placed component.
    pub cpu: Quantity,
    /// Memory reserved per placed component.
    pub memory: Quantity,
}

/// Decode a descriptor document from a YAML string.
pub fn from_yaml_str<T: DeserializeOwned>(yaml: &str) -> Result<T, DescriptorError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Decode a descriptor document from a JSON string.
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T, DescriptorError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and decode a descriptor document from a file, dispatching on the extension: `.json` is
/// decoded as JSON, everything else as YAML.
pub fn from_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, DescriptorError> {
    let path = path.as_ref();
    let content = read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => from_json_str(&content),
        _ => from_yaml_str(&content),
    }
}

/// Errors raised while loading or decoding a descriptor document
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Io Error
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// The document is not valid YAML, or does not match the descriptor shape
    #[error("Cannot decode YAML descriptor: {0}")]
    YamlError(#[from] serde_yaml::Error),
    /// The document is not valid JSON, or does not match the descriptor shape
    #[error("Cannot decode JSON descriptor: {0}")]
    JsonError(#[from] serde_json::Error),
}
