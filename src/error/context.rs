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

use crate::error::InstallError;
use crate::install::registry::PlatformRegistry;

pub struct ErrorContext<'a> {
    pub error: &'a InstallError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a InstallError) -> Self {
        let (suggestion, details) = match error {
            InstallError::UnsupportedPlatform { key, .. } => {
                let supported = PlatformRegistry::keys().collect::<Vec<_>>().join(", ");
                let suggestion = Some(format!(
                    "kcdev ships binaries for: {supported}. Install on one of these platforms."
                ));
                let details = Some(format!("Registry lookup failed for key '{key}'"));
                (suggestion, details)
            }
            InstallError::BinaryMissing { .. } => {
                let suggestion = Some(
                    "The package looks incomplete. Remove it and install it again.".to_string(),
                );
                (suggestion, None)
            }
            InstallError::PersistFailure { path, .. } => {
                let suggestion = if cfg!(unix) {
                    Some(format!(
                        "Ensure you have write permissions to: {}",
                        path.display()
                    ))
                } else {
                    Some(format!(
                        "Run as Administrator or ensure you have write permissions to: {}",
                        path.display()
                    ))
                };
                (suggestion, None)
            }
            InstallError::InvalidConfig(msg) => {
                let suggestion = Some(
                    "Fix or remove kcdev-install.toml in the package root.".to_string(),
                );
                let details = Some(format!("Configuration issue: {msg}"));
                (suggestion, details)
            }
            InstallError::PackageRoot(_) => {
                let suggestion = Some(
                    "Set KCDEV_PACKAGE_ROOT to the directory that contains bin/.".to_string(),
                );
                (suggestion, None)
            }
            InstallError::Io(_) => (None, None),
        };

        Self {
            error,
            suggestion,
            details,
        }
    }
}
