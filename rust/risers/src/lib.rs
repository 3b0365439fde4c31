// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # MEP-Lite Risers
//!
//! Categorization of vertical pipes ("risers") in a plan view.
//!
//! Each vertical pipe is placed in one [`RiserCategory`] according to its
//! flow direction and where it crosses the view's top and bottom clip
//! planes. When connector flow data is missing or ambiguous the pipe is
//! assumed to drain downwards. The resulting [`RiserClassification`] drives
//! a [`TagPlacement`] plan: one directional arrow tag per categorized pipe.

pub mod category;
pub mod classifier;
pub mod tagging;

pub use category::RiserCategory;
pub use classifier::{
    categorize, classify_pipe, classify_risers, classify_view, flow_elevations,
    RiserClassification, RiserOptions, ViewRisers,
};
pub use tagging::{plan_tags, TagPlacement, TagTypeMapping, DEFAULT_TAG_FAMILY};
