// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Riser tag planning.
//!
//! Riser tags are pipe tags of a single annotation family whose types are
//! named after the riser categories. Full host names have the form
//! `"<family> - <type>"`.

use mep_lite_core::{ElementId, PipeSegment, Point3, ViewRange};
use mep_lite_geometry::point_at_elevation;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::category::RiserCategory;
use crate::classifier::RiserClassification;

/// Annotation family holding the flow arrow tag types.
pub const DEFAULT_TAG_FAMILY: &str = "BHE_DE_PipeTag_FlowArrow";

/// Maps riser categories to tag types of one annotation family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTypeMapping {
    pub family_name: String,
}

impl Default for TagTypeMapping {
    fn default() -> Self {
        Self::new(DEFAULT_TAG_FAMILY)
    }
}

impl TagTypeMapping {
    pub fn new(family_name: impl Into<String>) -> Self {
        Self {
            family_name: family_name.into(),
        }
    }

    /// Full tag type name for a category, `None` for uncategorized pipes.
    pub fn full_name(&self, category: RiserCategory) -> Option<String> {
        category
            .tag_type_name()
            .map(|t| format!("{} - {}", self.family_name, t))
    }

    /// Every tag type the project must provide.
    pub fn required_tag_names(&self) -> Vec<String> {
        RiserCategory::ALL
            .iter()
            .filter_map(|&c| self.full_name(c))
            .collect()
    }

    /// Required tag types absent from `available` (full names).
    pub fn missing_tag_types<'a, I>(&self, available: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let available: Vec<&str> = available.into_iter().collect();
        self.required_tag_names()
            .into_iter()
            .filter(|name| !available.contains(&name.as_str()))
            .collect()
    }

    /// Whether a tag of the given family is a riser tag managed by this mapping.
    pub fn owns_tag(&self, tag_family_name: &str) -> bool {
        tag_family_name == self.family_name
    }
}

/// One tag to create in the host view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagPlacement {
    pub pipe: ElementId,
    pub category: RiserCategory,
    /// Full tag type name.
    pub tag_type: String,
    /// Tag head location: the pipe's plan position on the top clip plane.
    pub point: Point3<f64>,
}

/// Plans one tag per categorized pipe, in category order.
///
/// Pipes listed in the classification but missing from `pipes` are skipped.
pub fn plan_tags(
    classification: &RiserClassification,
    pipes: &[PipeSegment],
    view_range: &ViewRange,
    mapping: &TagTypeMapping,
) -> Vec<TagPlacement> {
    let by_id: FxHashMap<ElementId, &PipeSegment> = pipes.iter().map(|p| (p.id, p)).collect();

    let mut placements = Vec::new();
    for (category, ids) in classification.iter() {
        let Some(tag_type) = mapping.full_name(category) else {
            continue;
        };
        for id in ids {
            if let Some(pipe) = by_id.get(id) {
                placements.push(TagPlacement {
                    pipe: *id,
                    category,
                    tag_type: tag_type.clone(),
                    point: point_at_elevation(pipe.start_point, view_range.top_elevation),
                });
            }
        }
    }
    placements
}
