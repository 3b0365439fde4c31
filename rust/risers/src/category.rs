// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Riser categories.

use serde::{Deserialize, Serialize};

/// Where a vertical pipe runs relative to the view range, and which way it flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiserCategory {
    /// Upward flow, crossing both clip planes.
    RisingThrough,
    /// Downward flow, crossing both clip planes.
    FallingThrough,
    /// Downward flow entering through the top plane and ending in range.
    ComingFromAbove,
    /// Upward flow starting in range and leaving through the top plane.
    GoingToAbove,
    /// Upward flow entering through the bottom plane and ending in range.
    ComingFromBelow,
    /// Downward flow starting in range and leaving through the bottom plane.
    GoingToBelow,
    /// Does not reach either clip plane.
    Uncategorized,
}

impl RiserCategory {
    /// All categories in declaration order.
    pub const ALL: [RiserCategory; 7] = [
        RiserCategory::RisingThrough,
        RiserCategory::FallingThrough,
        RiserCategory::ComingFromAbove,
        RiserCategory::GoingToAbove,
        RiserCategory::ComingFromBelow,
        RiserCategory::GoingToBelow,
        RiserCategory::Uncategorized,
    ];

    /// Returns the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiserCategory::RisingThrough => "RisingThrough",
            RiserCategory::FallingThrough => "FallingThrough",
            RiserCategory::ComingFromAbove => "ComingFromAbove",
            RiserCategory::GoingToAbove => "GoingToAbove",
            RiserCategory::ComingFromBelow => "ComingFromBelow",
            RiserCategory::GoingToBelow => "GoingToBelow",
            RiserCategory::Uncategorized => "Uncategorized",
        }
    }

    /// Annotation type name of the riser tag drawn for this category.
    ///
    /// Uncategorized pipes are not tagged.
    pub fn tag_type_name(&self) -> Option<&'static str> {
        match self {
            RiserCategory::RisingThrough => Some("Steigleitung"),
            RiserCategory::FallingThrough => Some("Fallleitung"),
            RiserCategory::ComingFromAbove => Some("VonOben"),
            RiserCategory::GoingToAbove => Some("NachOben"),
            RiserCategory::ComingFromBelow => Some("VonUnten"),
            RiserCategory::GoingToBelow => Some("NachUnten"),
            RiserCategory::Uncategorized => None,
        }
    }

    pub fn is_categorized(&self) -> bool {
        *self != RiserCategory::Uncategorized
    }
}

impl std::fmt::Display for RiserCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
