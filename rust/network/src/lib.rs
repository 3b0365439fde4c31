// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # MEP-Lite Network
//!
//! Connectivity graphs of piping and ducting networks.
//!
//! Starting from a seed element, [`NetworkDiscovery`] walks connector
//! references through a [`HostFacade`](mep_lite_core::HostFacade) and builds
//! an undirected [`NetworkGraph`]: one node per pipe, duct, fitting,
//! equipment or system element, one edge per connected element pair.
//! Insulation and lining are ignored. The finished graph can be exported as
//! node-link JSON for graph tooling.

pub mod discovery;
pub mod error;
pub mod graph;
pub mod serialization;

pub use discovery::{discover_network, DiscoveryOptions, NetworkDiscovery};
pub use error::{Error, Result};
pub use graph::{EdgeKey, GraphMetadata, NetworkEdge, NetworkGraph, NetworkNode};
pub use serialization::{
    from_node_link_json, to_edge_list_text, to_node_link_json, write_node_link_json,
};
