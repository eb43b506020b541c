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

use crate::error::{InstallError, Result};
use crate::paths::package::distribution_dir;
use crate::platform::with_executable_extension;
use std::path::{Path, PathBuf};

/// Expected location of the native binary.
///
/// The `.exe` suffix follows `os` alone, never the directory name.
pub fn binary_location(
    package_root: &Path,
    platform_dir: &str,
    tool_name: &str,
    os: &str,
) -> PathBuf {
    distribution_dir(package_root, platform_dir).join(with_executable_extension(tool_name, os))
}

/// Compute the binary location and confirm something exists there.
///
/// Only existence is checked; the file is not opened, executed or hashed.
pub fn locate(
    package_root: &Path,
    platform_dir: &str,
    tool_name: &str,
    os: &str,
) -> Result<PathBuf> {
    let path = binary_location(package_root, platform_dir, tool_name, os);
    log::trace!("Checking for binary at {path:?}");

    if !path.exists() {
        return Err(InstallError::BinaryMissing { path });
    }

    Ok(path)
}
