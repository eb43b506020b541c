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
use std::env;
use std::path::{Path, PathBuf};

pub const BIN_DIR: &str = "bin";
pub const BINARY_PATH_RECORD: &str = ".binary-path";
pub const PACKAGE_ROOT_ENV: &str = "KCDEV_PACKAGE_ROOT";

pub fn bin_dir(package_root: &Path) -> PathBuf {
    package_root.join(BIN_DIR)
}

pub fn distribution_dir(package_root: &Path, platform_dir: &str) -> PathBuf {
    bin_dir(package_root).join(platform_dir)
}

pub fn binary_path_record(package_root: &Path) -> PathBuf {
    bin_dir(package_root).join(BINARY_PATH_RECORD)
}

/// Resolve the package root the installer operates on.
///
/// `KCDEV_PACKAGE_ROOT` wins when set and non-empty. Otherwise the root is
/// the parent of the directory holding the running executable, since the
/// hook ships as `<package-root>/scripts/kcdev-install`. The result is
/// always absolute.
pub fn resolve_package_root() -> Result<PathBuf> {
    if let Some(root) = env::var_os(PACKAGE_ROOT_ENV).filter(|v| !v.is_empty()) {
        log::debug!("Using package root from {PACKAGE_ROOT_ENV}: {root:?}");
        return absolutize(Path::new(&root));
    }

    let exe = env::current_exe()
        .map_err(|e| InstallError::PackageRoot(format!("cannot locate installer: {e}")))?;
    let root = package_root_from_exe(&exe).ok_or_else(|| {
        InstallError::PackageRoot(format!(
            "installer at {} has no parent package directory",
            exe.display()
        ))
    })?;
    log::debug!("Using package root next to installer: {root:?}");
    absolutize(root)
}

/// `<package-root>/scripts/kcdev-install` → `<package-root>`
pub fn package_root_from_exe(exe: &Path) -> Option<&Path> {
    exe.parent()?.parent()
}

pub fn absolutize(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        InstallError::PackageRoot(format!("cannot make {} absolute: {e}", path.display()))
    })
}
