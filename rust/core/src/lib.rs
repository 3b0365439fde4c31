// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # MEP-Lite Core
//!
//! Data model and host abstraction shared by the MEP-Lite analysis crates.
//!
//! ## Overview
//!
//! - **Element ids**: opaque integer handles ([`ElementId`]) for CAD elements
//! - **Connectivity data**: [`Connector`]s with flow direction and the ids of
//!   the elements they reference
//! - **View data**: [`ViewRange`] clip planes and [`PipeSegment`]s in a view
//! - **Host facade**: the [`HostFacade`] trait through which every analysis
//!   reads the CAD document
//! - **Model snapshots**: [`ModelSnapshot`], an in-memory facade loaded from a
//!   JSON model export
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mep_lite_core::{HostFacade, ModelSnapshot, ElementId};
//!
//! let model = ModelSnapshot::from_json(&std::fs::read_to_string("model.json")?)?;
//! for connector in model.connectors_of(ElementId(1001))? {
//!     println!("{:?} -> {:?}", connector.flow_direction, connector.owner_references);
//! }
//! ```

pub mod element;
pub mod error;
pub mod facade;
pub mod ids;
pub mod snapshot;

pub use element::{Connector, FlowDirection, PipeSegment, ViewRange};
pub use error::{Error, Result};
pub use facade::HostFacade;
pub use ids::ElementId;
pub use snapshot::{connector_at, ElementKind, ElementRecord, ModelSnapshot};

pub use mep_lite_geometry::Point3;
