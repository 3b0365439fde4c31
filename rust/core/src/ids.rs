// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element identifiers.
//!
//! Host elements are referenced purely by their integer id. Anything richer
//! (type name, connectors, geometry) is fetched through the
//! [`HostFacade`](crate::HostFacade) when needed.

use serde::{Deserialize, Serialize};

/// Opaque integer id of a CAD element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub i64);

impl ElementId {
    /// Returns the raw integer value.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ElementId {
    fn from(v: i64) -> Self {
        ElementId(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_ordering() {
        assert!(ElementId(-1) < ElementId(0));
        assert!(ElementId(10) < ElementId(200));
    }

    #[test]
    fn element_id_serializes_as_integer() {
        let json = serde_json::to_string(&ElementId(4242)).unwrap();
        assert_eq!(json, "4242");
        let back: ElementId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ElementId(4242));
    }

    #[test]
    fn element_id_display() {
        assert_eq!(ElementId(17).to_string(), "17");
    }
}
