// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for CLI commands.

use thiserror::Error;

/// Command failures, mapped to process exit codes.
///
/// Messages name the failing step only; the wrapped error is reported as
/// the source.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot read model export")]
    ModelRead(#[source] std::io::Error),

    #[error("Invalid model")]
    Model(#[from] mep_lite_core::Error),

    #[error("Network discovery failed")]
    Network(#[from] mep_lite_network::Error),

    #[error("Cannot write output")]
    Output(#[from] std::io::Error),

    #[error("Cannot encode JSON")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Exit code: 2 for bad input, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::ModelRead(_) | CliError::Model(_) => 2,
            CliError::Network(mep_lite_network::Error::Host(_)) => 2,
            _ => 1,
        }
    }
}
