// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Riser classification against a view range.
//!
//! A pipe's flow runs from elevation `from` to elevation `to`:
//! - connectors reporting `In`/`Out` fix the direction (flow enters the pipe
//!   at the `In` connector)
//! - anything else (bidirectional, unknown, or equal directions) falls back
//!   to gravity: `from` is the higher end, `to` the lower one
//!
//! The pair is then compared with the top and bottom clip planes. All
//! comparisons are inclusive so a pipe ending exactly on a clip plane counts
//! as crossing it.

use std::collections::BTreeMap;

use mep_lite_core::{ElementId, FlowDirection, HostFacade, PipeSegment, Result, ViewRange};
use mep_lite_geometry::{feet_to_meters, high_low, is_vertical, DEFAULT_VERTICAL_TOLERANCE_DEG};
use serde::Serialize;
use tracing::{debug, info};

use crate::category::RiserCategory;

/// Returns `(from, to)` elevations of the flow through a pipe.
pub fn flow_elevations(pipe: &PipeSegment) -> (f64, f64) {
    let (z_start, z_end) = pipe.elevations();
    match pipe.connector_flows {
        [FlowDirection::In, FlowDirection::Out] => (z_start, z_end),
        [FlowDirection::Out, FlowDirection::In] => (z_end, z_start),
        _ => high_low(z_start, z_end),
    }
}

/// Categorizes a flow from elevation `from` to elevation `to`.
///
/// The range is assumed valid; [`classify_risers`] checks it once up front.
pub fn categorize(from: f64, to: f64, range: &ViewRange) -> RiserCategory {
    let top = range.top_elevation;
    let bottom = range.bottom_elevation;

    if from >= to {
        // downward
        if from >= top && bottom >= to {
            RiserCategory::FallingThrough
        } else if from >= top && top >= to && to >= bottom {
            RiserCategory::ComingFromAbove
        } else if top >= from && from >= bottom && bottom >= to {
            RiserCategory::GoingToBelow
        } else {
            RiserCategory::Uncategorized
        }
    } else if to >= top && bottom >= from {
        RiserCategory::RisingThrough
    } else if to >= top && top >= from && from >= bottom {
        RiserCategory::GoingToAbove
    } else if top >= to && to >= bottom && bottom >= from {
        RiserCategory::ComingFromBelow
    } else {
        RiserCategory::Uncategorized
    }
}

/// Categorizes a single pipe.
pub fn classify_pipe(pipe: &PipeSegment, range: &ViewRange) -> RiserCategory {
    let (from, to) = flow_elevations(pipe);
    categorize(from, to, range)
}

/// Pipe ids grouped by category. Every category is present, possibly empty;
/// within a category pipes keep their input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiserClassification {
    categories: BTreeMap<RiserCategory, Vec<ElementId>>,
}

impl RiserClassification {
    fn empty() -> Self {
        Self {
            categories: RiserCategory::ALL.iter().map(|&c| (c, Vec::new())).collect(),
        }
    }

    fn push(&mut self, category: RiserCategory, id: ElementId) {
        self.categories.entry(category).or_default().push(id);
    }

    /// Pipes in one category.
    pub fn pipes(&self, category: RiserCategory) -> &[ElementId] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn uncategorized(&self) -> &[ElementId] {
        self.pipes(RiserCategory::Uncategorized)
    }

    /// Category assigned to a pipe, if it was classified.
    pub fn category_of(&self, id: ElementId) -> Option<RiserCategory> {
        self.categories
            .iter()
            .find(|(_, ids)| ids.contains(&id))
            .map(|(&c, _)| c)
    }

    /// Iterates `(category, pipes)` in category order.
    pub fn iter(&self) -> impl Iterator<Item = (RiserCategory, &[ElementId])> {
        self.categories.iter().map(|(&c, ids)| (c, ids.as_slice()))
    }

    /// Total number of classified pipes, uncategorized included.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classifies pipes against a view range.
///
/// Fails with [`Error::MalformedViewRange`](mep_lite_core::Error::MalformedViewRange)
/// before looking at any pipe if the range is inverted.
pub fn classify_risers(pipes: &[PipeSegment], range: &ViewRange) -> Result<RiserClassification> {
    range.validate()?;

    let mut classification = RiserClassification::empty();
    for pipe in pipes {
        classification.push(classify_pipe(pipe, range), pipe.id);
    }
    Ok(classification)
}

/// Settings for [`classify_view`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiserOptions {
    /// Maximum deviation from plumb (degrees) for a pipe to count as a riser.
    pub vertical_tolerance_deg: f64,
}

impl Default for RiserOptions {
    fn default() -> Self {
        Self {
            vertical_tolerance_deg: DEFAULT_VERTICAL_TOLERANCE_DEG,
        }
    }
}

/// Risers of the active view.
#[derive(Debug, Clone, Serialize)]
pub struct ViewRisers {
    pub view_range: ViewRange,
    /// Number of pipes visible in the view before the verticality filter.
    pub pipes_in_view: usize,
    pub vertical_pipes: Vec<PipeSegment>,
    pub classification: RiserClassification,
}

/// Finds the vertical pipes of the host's active view and classifies them.
pub fn classify_view<H: HostFacade + ?Sized>(host: &H, options: &RiserOptions) -> Result<ViewRisers> {
    let view_range = host.view_range()?;
    view_range.validate()?;
    info!(
        top_ft = view_range.top_elevation,
        top_m = feet_to_meters(view_range.top_elevation),
        bottom_ft = view_range.bottom_elevation,
        bottom_m = feet_to_meters(view_range.bottom_elevation),
        "view range"
    );

    let pipes = host.pipe_segments_in_view()?;
    let pipes_in_view = pipes.len();
    let vertical_pipes: Vec<PipeSegment> = pipes
        .into_iter()
        .filter(|p| is_vertical(p.start_point, p.end_point, options.vertical_tolerance_deg))
        .collect();
    info!(
        pipes_in_view,
        vertical = vertical_pipes.len(),
        "filtered vertical pipes"
    );

    let classification = classify_risers(&vertical_pipes, &view_range)?;
    for (category, ids) in classification.iter() {
        debug!(%category, count = ids.len(), "categorized risers");
    }

    Ok(ViewRisers {
        view_range,
        pipes_in_view,
        vertical_pipes,
        classification,
    })
}
