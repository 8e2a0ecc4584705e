// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gymdesk::CoreError;
use gymdesk_domain::DomainError;
use gymdesk_store::StoreError;
use std::path::PathBuf;

/// Errors reported by the command-line interface.
#[derive(Debug)]
pub enum CliError {
    /// The centers file could not be read or parsed.
    Config {
        /// The centers file.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },
    /// A domain rule was violated.
    Domain(DomainError),
    /// A calendar command was rejected.
    Transition(CoreError),
    /// The record store failed.
    Store(StoreError),
    /// The command needs an allotment but no center was given.
    MissingAllotment,
    /// Output could not be encoded.
    Output(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config { path, message } => {
                write!(f, "Invalid centers file {}: {message}", path.display())
            }
            Self::Domain(err) => write!(f, "{err}"),
            Self::Transition(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::MissingAllotment => {
                write!(f, "A vacation allotment needs --centers and --center")
            }
            Self::Output(err) => write!(f, "Failed to encode output: {err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::Transition(err)
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err)
    }
}
