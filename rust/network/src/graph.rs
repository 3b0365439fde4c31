// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Undirected connectivity graph of an MEP network.
//!
//! - **Nodes** = host elements (pipes, ducts, fittings, equipment, systems)
//! - **Edges** = "is connected to" between two distinct elements
//!
//! Edges are keyed by the sorted pair of their endpoint ids, so an element
//! pair joined through several connectors still yields a single edge.
//! Every edge's endpoints are nodes of the same graph; [`NetworkGraph::add_edge`]
//! enforces this.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use mep_lite_core::ElementId;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Undirected edge key: the endpoint ids in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(ElementId, ElementId);

impl EdgeKey {
    /// Creates the key for the pair `{a, b}` regardless of argument order.
    pub fn new(a: ElementId, b: ElementId) -> Self {
        if a <= b {
            EdgeKey(a, b)
        } else {
            EdgeKey(b, a)
        }
    }

    /// The smaller endpoint id.
    pub fn source(&self) -> ElementId {
        self.0
    }

    /// The larger endpoint id.
    pub fn target(&self) -> ElementId {
        self.1
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.0 == id || self.1 == id
    }
}

/// A node in the network graph.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkNode {
    pub id: ElementId,
    /// Host type name of the element.
    pub type_name: String,
    /// Whether the element is a piping/duct system rather than a physical part.
    pub is_system: bool,
}

/// An edge in the network graph, stored with `source <= target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkEdge {
    pub source: ElementId,
    pub target: ElementId,
}

impl NetworkEdge {
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.source, self.target)
    }
}

/// Provenance recorded with every exported graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphMetadata {
    pub source_model: String,
    pub generated_at: DateTime<Utc>,
}

impl GraphMetadata {
    /// Metadata stamped with the current time.
    pub fn now(source_model: impl Into<String>) -> Self {
        Self {
            source_model: source_model.into(),
            generated_at: Utc::now(),
        }
    }
}

/// Connectivity graph of a pipe/duct network.
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    nodes: FxHashMap<ElementId, NetworkNode>,
    edges: FxHashMap<EdgeKey, NetworkEdge>,
    /// Adjacency list: node id → neighbor ids.
    adjacency: FxHashMap<ElementId, Vec<ElementId>>,
    pub metadata: GraphMetadata,
}

impl NetworkGraph {
    /// Creates an empty graph.
    pub fn new(metadata: GraphMetadata) -> Self {
        Self {
            nodes: FxHashMap::default(),
            edges: FxHashMap::default(),
            adjacency: FxHashMap::default(),
            metadata,
        }
    }

    // =========================================================================
    // Graph mutation
    // =========================================================================

    /// Adds a node. Returns `false` (leaving the existing node untouched) if
    /// the id is already present.
    pub fn add_node(&mut self, id: ElementId, type_name: impl Into<String>, is_system: bool) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(
            id,
            NetworkNode {
                id,
                type_name: type_name.into(),
                is_system,
            },
        );
        self.adjacency.insert(id, Vec::new());
        true
    }

    /// Adds the undirected edge `{a, b}`.
    ///
    /// Returns `Ok(false)` for self-loops and for pairs that are already
    /// connected. Both endpoints must already be nodes.
    pub fn add_edge(&mut self, a: ElementId, b: ElementId) -> Result<bool> {
        if a == b {
            return Ok(false);
        }
        if !self.nodes.contains_key(&a) || !self.nodes.contains_key(&b) {
            return Err(Error::DanglingEdge {
                first: a,
                second: b,
            });
        }
        let key = EdgeKey::new(a, b);
        if self.edges.contains_key(&key) {
            return Ok(false);
        }
        self.edges.insert(
            key,
            NetworkEdge {
                source: key.source(),
                target: key.target(),
            },
        );
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
        Ok(true)
    }

    /// Drops every system node and every edge touching one.
    ///
    /// Systems are logical containers; removing them leaves only physical
    /// connectivity. Returns the number of removed nodes.
    pub fn remove_systems(&mut self) -> usize {
        let systems: FxHashSet<ElementId> = self
            .nodes
            .values()
            .filter(|n| n.is_system)
            .map(|n| n.id)
            .collect();
        if systems.is_empty() {
            return 0;
        }

        self.nodes.retain(|id, _| !systems.contains(id));
        self.edges
            .retain(|key, _| !systems.contains(&key.source()) && !systems.contains(&key.target()));
        self.adjacency.retain(|id, _| !systems.contains(id));
        for neighbors in self.adjacency.values_mut() {
            neighbors.retain(|n| !systems.contains(n));
        }

        systems.len()
    }

    // =========================================================================
    // Graph accessors
    // =========================================================================

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, id: ElementId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn contains_edge(&self, a: ElementId, b: ElementId) -> bool {
        self.edges.contains_key(&EdgeKey::new(a, b))
    }

    pub fn node(&self, id: ElementId) -> Option<&NetworkNode> {
        self.nodes.get(&id)
    }

    /// Iterates nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &NetworkNode> {
        self.nodes.values()
    }

    /// Iterates edges in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = &NetworkEdge> {
        self.edges.values()
    }

    /// Nodes ordered by id.
    pub fn nodes_sorted(&self) -> Vec<&NetworkNode> {
        let mut nodes: Vec<&NetworkNode> = self.nodes.values().collect();
        nodes.sort_unstable_by_key(|n| n.id);
        nodes
    }

    /// Edges ordered by key.
    pub fn edges_sorted(&self) -> Vec<&NetworkEdge> {
        let mut edges: Vec<&NetworkEdge> = self.edges.values().collect();
        edges.sort_unstable_by_key(|e| e.key());
        edges
    }

    /// All node ids, ascending.
    pub fn node_ids(&self) -> Vec<ElementId> {
        let mut ids: Vec<ElementId> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// All edge keys, ascending.
    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        let mut keys: Vec<EdgeKey> = self.edges.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Returns the neighbors of a node (empty for unknown ids).
    pub fn neighbors(&self, id: ElementId) -> &[ElementId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the degree (number of connections) of a node.
    pub fn degree(&self, id: ElementId) -> usize {
        self.neighbors(id).len()
    }

    /// Returns isolated nodes (degree 0), ascending.
    pub fn isolated_nodes(&self) -> Vec<ElementId> {
        self.node_ids()
            .into_iter()
            .filter(|&id| self.degree(id) == 0)
            .collect()
    }

    /// Ids of system nodes, ascending.
    pub fn system_ids(&self) -> Vec<ElementId> {
        self.node_ids()
            .into_iter()
            .filter(|id| self.nodes[id].is_system)
            .collect()
    }

    // =========================================================================
    // Connected components
    // =========================================================================

    /// Returns connected components as ascending lists of node ids.
    ///
    /// Components are ordered by their smallest id.
    pub fn connected_components(&self) -> Vec<Vec<ElementId>> {
        let mut visited: FxHashSet<ElementId> = FxHashSet::default();
        let mut components = Vec::new();

        for start in self.node_ids() {
            if !visited.insert(start) {
                continue;
            }

            let mut component = Vec::new();
            let mut queue = VecDeque::new();
            queue.push_back(start);

            while let Some(node) = queue.pop_front() {
                component.push(node);
                for &neighbor in self.neighbors(node) {
                    if visited.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }

            component.sort_unstable();
            components.push(component);
        }

        components
    }

    /// Checks if the graph is connected (at most one component).
    pub fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }
}
