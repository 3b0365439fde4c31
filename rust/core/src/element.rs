// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connectivity and view data exposed by the host document.

use mep_lite_geometry::Point3;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ids::ElementId;

/// Flow direction reported by a connector, relative to its owning element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlowDirection {
    /// Flow enters the owning element here.
    In,
    /// Flow leaves the owning element here.
    Out,
    /// Flow may pass either way.
    Bidirectional,
    /// The host reports no direction.
    #[default]
    Unknown,
}

/// An attachment point on a pipe, duct, fitting or piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// Owners of every connector this one is joined to. May include the
    /// connector's own element.
    #[serde(default)]
    pub owner_references: Vec<ElementId>,
    pub origin: Point3<f64>,
    #[serde(default)]
    pub flow_direction: FlowDirection,
}

impl Connector {
    pub fn new(origin: Point3<f64>, flow_direction: FlowDirection) -> Self {
        Self {
            owner_references: Vec::new(),
            origin,
            flow_direction,
        }
    }

    /// Adds a reference to another element's connector.
    pub fn with_reference(mut self, owner: ElementId) -> Self {
        self.owner_references.push(owner);
        self
    }
}

/// A straight pipe segment as seen by a plan view.
///
/// `connector_flows[0]` belongs to the connector at `start_point`,
/// `connector_flows[1]` to the connector at `end_point`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeSegment {
    pub id: ElementId,
    pub start_point: Point3<f64>,
    pub end_point: Point3<f64>,
    pub connector_flows: [FlowDirection; 2],
}

impl PipeSegment {
    /// Returns the start and end elevations.
    pub fn elevations(&self) -> (f64, f64) {
        (self.start_point.z, self.end_point.z)
    }
}

/// The vertical slice of the model shown by a plan view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewRange {
    pub top_elevation: f64,
    pub bottom_elevation: f64,
}

impl ViewRange {
    /// Creates a view range, rejecting a top clip plane below the bottom one.
    pub fn new(top_elevation: f64, bottom_elevation: f64) -> Result<Self> {
        let range = Self {
            top_elevation,
            bottom_elevation,
        };
        range.validate()?;
        Ok(range)
    }

    /// Checks `top_elevation >= bottom_elevation`.
    ///
    /// Ranges obtained through deserialization skip the constructor, so
    /// consumers re-check before use.
    pub fn validate(&self) -> Result<()> {
        // NaN fails the comparison and is rejected too
        if self.top_elevation >= self.bottom_elevation {
            Ok(())
        } else {
            Err(Error::MalformedViewRange {
                top: self.top_elevation,
                bottom: self.bottom_elevation,
            })
        }
    }

    /// Height of the range.
    pub fn depth(&self) -> f64 {
        self.top_elevation - self.bottom_elevation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_range_accepts_ordered_planes() {
        let range = ViewRange::new(100.0, 0.0).unwrap();
        assert_eq!(range.depth(), 100.0);
        assert!(ViewRange::new(5.0, 5.0).is_ok());
    }

    #[test]
    fn view_range_rejects_inverted_planes() {
        let err = ViewRange::new(0.0, 100.0).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedViewRange { top, bottom } if top == 0.0 && bottom == 100.0
        ));
    }

    #[test]
    fn view_range_rejects_nan() {
        assert!(ViewRange::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn deserialized_view_range_is_checked_on_validate() {
        let range: ViewRange =
            serde_json::from_str(r#"{"top_elevation": -1.0, "bottom_elevation": 2.0}"#).unwrap();
        assert!(range.validate().is_err());
    }

    #[test]
    fn connector_defaults_to_unknown_flow() {
        let c: Connector = serde_json::from_str(r#"{"origin": [0.0, 1.0, 2.0]}"#).unwrap();
        assert_eq!(c.flow_direction, FlowDirection::Unknown);
        assert!(c.owner_references.is_empty());
        assert_eq!(c.origin, Point3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn connector_builder_collects_references() {
        let c = Connector::new(Point3::origin(), FlowDirection::In)
            .with_reference(ElementId(1))
            .with_reference(ElementId(2));
        assert_eq!(c.owner_references, vec![ElementId(1), ElementId(2)]);
    }
}
