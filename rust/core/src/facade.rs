// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The host facade: read-only access to a CAD document.
//!
//! Every analysis in MEP-Lite receives the document explicitly as a
//! `&dyn HostFacade` (or generic `H: HostFacade`). Implementations adapt a
//! live host (a Revit add-in, an IFC model) or a serialized snapshot.
//! Failures are reported as [`Error`](crate::Error) and propagated unchanged
//! by the analyses; rollback on the host side is the caller's concern.

use crate::element::{Connector, PipeSegment, ViewRange};
use crate::error::Result;
use crate::ids::ElementId;

/// Read access to the elements, connectors and active view of a CAD document.
pub trait HostFacade {
    /// Type (class) name of an element, e.g. `"Pipe"` or `"FamilyInstance"`.
    fn element_type_name(&self, id: ElementId) -> Result<String>;

    /// Whether the element is pipe/duct insulation or lining.
    fn is_insulation_or_lining(&self, id: ElementId) -> Result<bool>;

    /// Whether the element is a piping or duct system.
    fn is_system(&self, id: ElementId) -> Result<bool>;

    /// All connectors of an element. Composite elements (fittings,
    /// equipment) report the connectors of their MEP model.
    fn connectors_of(&self, id: ElementId) -> Result<Vec<Connector>>;

    /// View range of the active plan view.
    fn view_range(&self) -> Result<ViewRange>;

    /// Pipe segments visible in the active plan view.
    fn pipe_segments_in_view(&self) -> Result<Vec<PipeSegment>>;

    /// Name of the document, recorded in generated artifacts.
    fn model_name(&self) -> String {
        "unnamed".to_string()
    }
}

impl<T: HostFacade + ?Sized> HostFacade for &T {
    fn element_type_name(&self, id: ElementId) -> Result<String> {
        (**self).element_type_name(id)
    }

    fn is_insulation_or_lining(&self, id: ElementId) -> Result<bool> {
        (**self).is_insulation_or_lining(id)
    }

    fn is_system(&self, id: ElementId) -> Result<bool> {
        (**self).is_system(id)
    }

    fn connectors_of(&self, id: ElementId) -> Result<Vec<Connector>> {
        (**self).connectors_of(id)
    }

    fn view_range(&self) -> Result<ViewRange> {
        (**self).view_range()
    }

    fn pipe_segments_in_view(&self) -> Result<Vec<PipeSegment>> {
        (**self).pipe_segments_in_view()
    }

    fn model_name(&self) -> String {
        (**self).model_name()
    }
}
