// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Node-link JSON export of network graphs.
//!
//! The document shape is the one read by common graph tooling
//! (`networkx.node_link_graph` and friends):
//!
//! ```json
//! {"directed": false, "multigraph": false,
//!  "graph": {"source_model": "...", "generated_at": "..."},
//!  "nodes": [{"id": 1, "type": "Pipe"}],
//!  "links": [{"source": 1, "target": 2}]}
//! ```
//!
//! Nodes and links are written in ascending id/key order so identical graphs
//! produce identical files.

use std::fmt::Write as _;
use std::path::Path;

use mep_lite_core::ElementId;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{GraphMetadata, NetworkGraph};

/// Serializable node-link representation of a [`NetworkGraph`].
#[derive(Debug, Serialize, Deserialize)]
pub struct NodeLinkDocument {
    pub directed: bool,
    pub multigraph: bool,
    pub graph: GraphMetadata,
    pub nodes: Vec<NodeLinkNode>,
    pub links: Vec<NodeLinkEdge>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NodeLinkNode {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub system: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NodeLinkEdge {
    pub source: ElementId,
    pub target: ElementId,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl NodeLinkDocument {
    /// Creates the node-link representation of a graph.
    pub fn from_graph(graph: &NetworkGraph) -> Self {
        Self {
            directed: false,
            multigraph: false,
            graph: graph.metadata.clone(),
            nodes: graph
                .nodes_sorted()
                .into_iter()
                .map(|n| NodeLinkNode {
                    id: n.id,
                    type_name: n.type_name.clone(),
                    system: n.is_system,
                })
                .collect(),
            links: graph
                .edges_sorted()
                .into_iter()
                .map(|e| NodeLinkEdge {
                    source: e.source,
                    target: e.target,
                })
                .collect(),
        }
    }

    /// Rebuilds the graph, checking that every link joins two listed nodes.
    pub fn into_graph(self) -> Result<NetworkGraph> {
        if self.directed || self.multigraph {
            return Err(Error::Serialization(
                "only undirected simple graphs are supported".to_string(),
            ));
        }

        let mut graph = NetworkGraph::new(self.graph);
        for node in self.nodes {
            if !graph.add_node(node.id, node.type_name, node.system) {
                return Err(Error::Serialization(format!(
                    "duplicate node id {}",
                    node.id
                )));
            }
        }
        for link in self.links {
            graph.add_edge(link.source, link.target)?;
        }
        Ok(graph)
    }
}

/// Serializes a graph to a node-link JSON string.
pub fn to_node_link_json(graph: &NetworkGraph) -> Result<String> {
    serde_json::to_string_pretty(&NodeLinkDocument::from_graph(graph))
        .map_err(|e| Error::Serialization(e.to_string()))
}

/// Parses a node-link JSON string back into a graph.
pub fn from_node_link_json(json: &str) -> Result<NetworkGraph> {
    let document: NodeLinkDocument =
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
    document.into_graph()
}

/// Writes a graph as UTF-8 node-link JSON to `path`.
pub fn write_node_link_json(graph: &NetworkGraph, path: impl AsRef<Path>) -> Result<()> {
    let json = to_node_link_json(graph)?;
    std::fs::write(path.as_ref(), json)?;
    tracing::info!(
        path = %path.as_ref().display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "wrote network graph"
    );
    Ok(())
}

/// Renders the plain-text dump: one `node: <id>` line per node followed by
/// one `edge: <a>, <b>` line per edge.
pub fn to_edge_list_text(graph: &NetworkGraph) -> String {
    let mut out = String::new();
    for node in graph.nodes_sorted() {
        let _ = writeln!(out, "node: {}", node.id);
    }
    for edge in graph.edges_sorted() {
        let _ = writeln!(out, "edge: {}, {}", edge.source, edge.target);
    }
    out
}
