// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_verbose};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    /// The host's `(os, arch)` pair has no registry entry. `key` is the
    /// normalized lookup key, `reported` what the host actually reported.
    #[error("unsupported platform: {reported}")]
    UnsupportedPlatform { key: String, reported: String },

    #[error("binary not found: {}", path.display())]
    BinaryMissing { path: PathBuf },

    #[error("failed to write binary path record: {source}")]
    PersistFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot determine package root: {0}")]
    PackageRoot(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InstallError {
    /// Short tag used in logs and by callers that branch on failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            InstallError::UnsupportedPlatform { .. } => "unsupported_platform",
            InstallError::BinaryMissing { .. } => "binary_missing",
            InstallError::PersistFailure { .. } => "persist_failure",
            InstallError::InvalidConfig(_) => "invalid_config",
            InstallError::PackageRoot(_) => "package_root",
            InstallError::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, InstallError>;
