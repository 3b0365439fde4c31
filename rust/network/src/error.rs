// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for network discovery and export.

use mep_lite_core::ElementId;

/// Result type alias for network operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discovering or exporting a network.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host document failed to answer a query.
    #[error(transparent)]
    Host(#[from] mep_lite_core::Error),

    /// Discovery reached the configured node limit.
    #[error("network discovery exceeded the limit of {0} nodes")]
    NodeLimitExceeded(usize),

    /// An edge references a node that is not part of the graph.
    #[error("edge {first}-{second} references a missing node")]
    DanglingEdge { first: ElementId, second: ElementId },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Writing the output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
