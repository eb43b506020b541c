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

/// Shared test fixtures for creating packaged binaries
use kcdev_install::install::registry;
use kcdev_install::platform::{HostPlatform, PlatformProvider, with_executable_extension};
use std::fs;
use std::path::{Path, PathBuf};

/// Places a fake native binary in the package
///
/// # Arguments
/// * `package_root` - The package directory
/// * `platform_dir` - The distribution directory (e.g., "linux-x64")
/// * `file_name` - File name including any suffix (e.g., "kcdev.exe")
///
/// # Returns
/// The path to the created binary
#[allow(dead_code)]
pub fn create_binary(package_root: &Path, platform_dir: &str, file_name: &str) -> PathBuf {
    let dir = package_root.join("bin").join(platform_dir);
    fs::create_dir_all(&dir).unwrap();

    let binary = dir.join(file_name);
    fs::write(&binary, b"fake kcdev binary").unwrap();
    binary
}

/// Distribution directory and binary file name for the machine running the
/// tests, or `None` when the host is not a supported platform.
#[allow(dead_code)]
pub fn host_binary(tool_name: &str) -> Option<(&'static str, String)> {
    let host = HostPlatform;
    let os = host.os();
    let (_, dir) = registry::resolve(&os, &host.arch()).ok()?;
    Some((dir, with_executable_extension(tool_name, &os)))
}

/// Host platform as the installer reports it, e.g. "linux-x64"
#[allow(dead_code)]
pub fn host_reported_platform() -> String {
    let host = HostPlatform;
    format!("{}-{}", host.os(), host.arch())
}
