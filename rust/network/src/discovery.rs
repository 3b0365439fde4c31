// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Network discovery from a seed element.
//!
//! Depth-first walk over connector references using an explicit stack and a
//! visited set, so traversal depth is bounded by heap memory rather than by
//! the call stack. Each element is queried at most once for its kind and
//! type, and each non-system node has its connectors read exactly once, for
//! O(V + E) host calls in total.
//!
//! Rules:
//! - insulation and lining never become nodes and are never expanded
//! - system elements become nodes but are not expanded
//! - every reference from a node to a different admitted element becomes an
//!   undirected edge

use mep_lite_core::{ElementId, HostFacade};
use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::graph::{GraphMetadata, NetworkGraph};

/// Tuning for a discovery pass.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// Abort with [`Error::NodeLimitExceeded`] once the graph would grow past
    /// this many nodes. `None` = unbounded.
    pub max_nodes: Option<usize>,
    /// Overrides the source model name recorded in the graph metadata.
    pub source_model: Option<String>,
}

/// Outcome of admitting an element into the graph.
enum Visit {
    /// Insulation or lining; not part of the network.
    Excluded,
    /// Already a node.
    Known,
    /// Newly added; `expand` is false for systems.
    Added { expand: bool },
}

/// Builds a [`NetworkGraph`] by walking a host document.
pub struct NetworkDiscovery<H> {
    host: H,
    options: DiscoveryOptions,
}

impl<H: HostFacade> NetworkDiscovery<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            options: DiscoveryOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DiscoveryOptions) -> Self {
        self.options = options;
        self
    }

    /// Discovers the network connected to `seed`.
    ///
    /// Host errors propagate unchanged; no partial graph is returned.
    pub fn discover(&self, seed: ElementId) -> Result<NetworkGraph> {
        let source_model = self
            .options
            .source_model
            .clone()
            .unwrap_or_else(|| self.host.model_name());
        let mut graph = NetworkGraph::new(GraphMetadata::now(source_model));
        let mut excluded: FxHashSet<ElementId> = FxHashSet::default();
        let mut stack: Vec<ElementId> = Vec::new();

        match self.visit(&mut graph, &mut excluded, seed)? {
            Visit::Excluded => {
                warn!(%seed, "seed element is insulation or lining, nothing to discover");
                return Ok(graph);
            }
            Visit::Added { expand: true } => stack.push(seed),
            Visit::Added { expand: false } | Visit::Known => {
                debug!(%seed, "seed element is a system, not expanding");
            }
        }

        while let Some(current) = stack.pop() {
            for connector in self.host.connectors_of(current)? {
                for &owner in &connector.owner_references {
                    if owner == current {
                        continue;
                    }
                    match self.visit(&mut graph, &mut excluded, owner)? {
                        Visit::Excluded => continue,
                        Visit::Known => {}
                        Visit::Added { expand } => {
                            if expand {
                                stack.push(owner);
                            }
                        }
                    }
                    graph.add_edge(current, owner)?;
                }
            }
        }

        debug!(
            %seed,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            excluded = excluded.len(),
            "network discovery finished"
        );

        Ok(graph)
    }

    fn visit(
        &self,
        graph: &mut NetworkGraph,
        excluded: &mut FxHashSet<ElementId>,
        id: ElementId,
    ) -> Result<Visit> {
        if graph.contains_node(id) {
            return Ok(Visit::Known);
        }
        if excluded.contains(&id) {
            return Ok(Visit::Excluded);
        }
        if self.host.is_insulation_or_lining(id)? {
            trace!(%id, "skipping insulation/lining");
            excluded.insert(id);
            return Ok(Visit::Excluded);
        }
        if let Some(max) = self.options.max_nodes {
            if graph.node_count() >= max {
                return Err(Error::NodeLimitExceeded(max));
            }
        }

        let is_system = self.host.is_system(id)?;
        let type_name = self.host.element_type_name(id)?;
        trace!(%id, %type_name, is_system, "adding node");
        graph.add_node(id, type_name, is_system);

        Ok(Visit::Added { expand: !is_system })
    }
}

/// Discovers the network around `seed` in `host`.
pub fn discover_network<H: HostFacade + ?Sized>(
    host: &H,
    seed: ElementId,
    options: &DiscoveryOptions,
) -> Result<NetworkGraph> {
    NetworkDiscovery::new(host)
        .with_options(options.clone())
        .discover(seed)
}
