// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for host document access.

use crate::ids::ElementId;

/// Result type alias for host facade operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading the CAD document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A referenced element does not exist in the document.
    #[error("element not found: {0}")]
    ElementNotFound(ElementId),

    /// A pipe segment must expose exactly two connectors.
    #[error("pipe {id} has {found} connectors, expected 2")]
    ConnectorCount { id: ElementId, found: usize },

    /// The view's top clip plane lies below its bottom clip plane.
    #[error("malformed view range: top elevation {top} is below bottom elevation {bottom}")]
    MalformedViewRange { top: f64, bottom: f64 },

    /// Any other failure raised by the host document.
    #[error("host facade error: {0}")]
    Host(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
