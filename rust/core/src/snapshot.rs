// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory host facade backed by a JSON model export.
//!
//! A snapshot captures the subset of a document the analyses need: every
//! element's kind, type name and connectors, plus the active view's range
//! and visible elements. Exporters on the host side write this shape; tests
//! build it directly.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::element::{Connector, FlowDirection, PipeSegment, ViewRange};
use crate::error::{Error, Result};
use crate::facade::HostFacade;
use crate::ids::ElementId;

/// Coarse element classification used by the analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Pipe,
    Duct,
    Fitting,
    Equipment,
    System,
    Insulation,
    Lining,
    Other,
}

impl ElementKind {
    pub fn is_insulation_or_lining(self) -> bool {
        matches!(self, ElementKind::Insulation | ElementKind::Lining)
    }
}

/// One exported element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub id: ElementId,
    pub type_name: String,
    pub kind: ElementKind,
    #[serde(default)]
    pub connectors: Vec<Connector>,
}

impl ElementRecord {
    pub fn new(id: impl Into<ElementId>, type_name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            kind,
            connectors: Vec::new(),
        }
    }

    pub fn with_connector(mut self, connector: Connector) -> Self {
        self.connectors.push(connector);
        self
    }
}

/// A serialized CAD document implementing [`HostFacade`].
///
/// Every deserialization path indexes the elements and rejects duplicate ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RawModelSnapshot")]
pub struct ModelSnapshot {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_range: Option<ViewRange>,
    elements: Vec<ElementRecord>,
    /// Ids of the elements visible in the active view.
    pub view_elements: Vec<ElementId>,
    #[serde(skip)]
    index: FxHashMap<ElementId, usize>,
}

/// Wire shape of [`ModelSnapshot`] before indexing.
#[derive(Deserialize)]
struct RawModelSnapshot {
    #[serde(default)]
    name: String,
    #[serde(default)]
    view_range: Option<ViewRange>,
    #[serde(default)]
    elements: Vec<ElementRecord>,
    #[serde(default)]
    view_elements: Vec<ElementId>,
}

impl TryFrom<RawModelSnapshot> for ModelSnapshot {
    type Error = Error;

    fn try_from(raw: RawModelSnapshot) -> Result<Self> {
        let mut snapshot = Self {
            name: raw.name,
            view_range: raw.view_range,
            elements: raw.elements,
            view_elements: raw.view_elements,
            index: FxHashMap::default(),
        };
        snapshot.reindex()?;
        Ok(snapshot)
    }
}

impl ModelSnapshot {
    /// Creates an empty snapshot.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parses a snapshot from JSON and indexes its elements.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Serializes the snapshot to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Adds an element, replacing any element with the same id.
    pub fn insert(&mut self, record: ElementRecord) {
        match self.index.get(&record.id) {
            Some(&i) => self.elements[i] = record,
            None => {
                self.index.insert(record.id, self.elements.len());
                self.elements.push(record);
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_element(mut self, record: ElementRecord) -> Self {
        self.insert(record);
        self
    }

    pub fn with_view_range(mut self, range: ViewRange) -> Self {
        self.view_range = Some(range);
        self
    }

    /// Marks an element as visible in the active view.
    pub fn show_in_view(mut self, id: impl Into<ElementId>) -> Self {
        self.view_elements.push(id.into());
        self
    }

    /// Looks up an element record.
    pub fn element(&self, id: ElementId) -> Result<&ElementRecord> {
        self.index
            .get(&id)
            .map(|&i| &self.elements[i])
            .ok_or(Error::ElementNotFound(id))
    }

    /// All element records, in export order.
    pub fn elements(&self) -> &[ElementRecord] {
        &self.elements
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn reindex(&mut self) -> Result<()> {
        self.index.clear();
        for (i, record) in self.elements.iter().enumerate() {
            if self.index.insert(record.id, i).is_some() {
                return Err(Error::Serialization(format!(
                    "duplicate element id {} in snapshot",
                    record.id
                )));
            }
        }
        Ok(())
    }

    fn pipe_segment(record: &ElementRecord) -> Result<PipeSegment> {
        match record.connectors.as_slice() {
            [start, end] => Ok(PipeSegment {
                id: record.id,
                start_point: start.origin,
                end_point: end.origin,
                connector_flows: [start.flow_direction, end.flow_direction],
            }),
            other => Err(Error::ConnectorCount {
                id: record.id,
                found: other.len(),
            }),
        }
    }
}

impl HostFacade for ModelSnapshot {
    fn element_type_name(&self, id: ElementId) -> Result<String> {
        Ok(self.element(id)?.type_name.clone())
    }

    fn is_insulation_or_lining(&self, id: ElementId) -> Result<bool> {
        Ok(self.element(id)?.kind.is_insulation_or_lining())
    }

    fn is_system(&self, id: ElementId) -> Result<bool> {
        Ok(self.element(id)?.kind == ElementKind::System)
    }

    fn connectors_of(&self, id: ElementId) -> Result<Vec<Connector>> {
        Ok(self.element(id)?.connectors.clone())
    }

    fn view_range(&self) -> Result<ViewRange> {
        let range = self
            .view_range
            .ok_or_else(|| Error::Host("snapshot has no active plan view".to_string()))?;
        range.validate()?;
        Ok(range)
    }

    fn pipe_segments_in_view(&self) -> Result<Vec<PipeSegment>> {
        let mut segments = Vec::new();
        for &id in &self.view_elements {
            let record = self.element(id)?;
            if record.kind == ElementKind::Pipe {
                segments.push(Self::pipe_segment(record)?);
            }
        }
        Ok(segments)
    }

    fn model_name(&self) -> String {
        if self.name.is_empty() {
            "unnamed".to_string()
        } else {
            self.name.clone()
        }
    }
}

/// Shorthand for a connector with a known flow direction, used by exporters
/// and tests.
pub fn connector_at(x: f64, y: f64, z: f64, flow: FlowDirection) -> Connector {
    Connector::new(mep_lite_geometry::Point3::new(x, y, z), flow)
}
