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

//! Install-time resolution of the platform-specific `kcdev` binary.
//!
//! The installer runs once per package installation and moves strictly
//! forward through [`InstallState`]:
//!
//! 1. Resolve the host platform to a distribution directory
//! 2. Locate the binary inside that directory
//! 3. Record the binary's absolute path in `bin/.binary-path`
//!
//! Any failure ends the run immediately. Nothing is written unless the
//! binary was found.

pub mod locator;
pub mod recorder;
pub mod registry;

use crate::config::InstallerConfig;
use crate::error::Result;
use crate::models::platform::PlatformKey;
use crate::paths::package::absolutize;
use crate::platform::PlatformProvider;
use std::fmt;
use std::path::{Path, PathBuf};

/// Progress of a single installer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    Start,
    Resolved,
    Located,
    Recorded,
}

impl fmt::Display for InstallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            InstallState::Start => "start",
            InstallState::Resolved => "resolved",
            InstallState::Located => "located",
            InstallState::Recorded => "recorded",
        };
        f.write_str(state)
    }
}

/// What a successful run resolved and wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Platform as reported by the host, before normalization.
    pub reported_platform: String,
    pub key: PlatformKey,
    pub platform_dir: &'static str,
    pub binary_path: PathBuf,
    pub record_path: PathBuf,
}

impl InstallOutcome {
    pub fn confirmation(&self) -> String {
        format!("kcdev: installed for {}", self.reported_platform)
    }
}

pub struct Installer<'a, P: PlatformProvider> {
    platform: &'a P,
    package_root: PathBuf,
    tool_name: String,
    state: InstallState,
}

impl<'a, P: PlatformProvider> Installer<'a, P> {
    pub fn new(platform: &'a P, package_root: &Path, config: &InstallerConfig) -> Result<Self> {
        Ok(Self {
            platform,
            package_root: absolutize(package_root)?,
            tool_name: config.tool_name.clone(),
            state: InstallState::Start,
        })
    }

    pub fn state(&self) -> InstallState {
        self.state
    }

    pub fn package_root(&self) -> &Path {
        &self.package_root
    }

    pub fn run(&mut self) -> Result<InstallOutcome> {
        let os = self.platform.os();
        let arch = self.platform.arch();
        let reported_platform = format!("{os}-{arch}");
        log::debug!("Host reports platform {reported_platform}");

        let (key, platform_dir) = registry::resolve(&os, &arch)?;
        self.advance(InstallState::Resolved);
        log::debug!("Platform key {key} resolves to bin/{platform_dir}");

        let binary_path = locator::locate(&self.package_root, platform_dir, &self.tool_name, &os)?;
        self.advance(InstallState::Located);
        log::debug!("Found binary at {binary_path:?}");

        let record_path = recorder::record(&self.package_root, &binary_path)?;
        self.advance(InstallState::Recorded);
        log::info!("Installed kcdev for {key}");

        Ok(InstallOutcome {
            reported_platform,
            key,
            platform_dir,
            binary_path,
            record_path,
        })
    }

    fn advance(&mut self, next: InstallState) {
        log::trace!("Installer state {} -> {}", self.state, next);
        self.state = next;
    }
}
