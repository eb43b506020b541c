//! Supported platforms and the distribution directory each one ships in.

use crate::error::{InstallError, Result};
use crate::models::platform::PlatformKey;

/// Platform key → distribution directory under `bin/`.
///
/// Keys and directory names are identical; the table exists so that an
/// unsupported host is a single explicit lookup miss.
const PLATFORMS: &[(&str, &str)] = &[
    ("darwin-x64", "darwin-x64"),
    ("darwin-arm64", "darwin-arm64"),
    ("linux-x64", "linux-x64"),
    ("linux-arm64", "linux-arm64"),
    ("win32-x64", "win32-x64"),
    ("win32-arm64", "win32-arm64"),
];

pub struct PlatformRegistry;

impl PlatformRegistry {
    pub fn lookup(key: &PlatformKey) -> Option<&'static str> {
        let key = key.to_string();
        PLATFORMS
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, dir)| *dir)
    }

    pub fn keys() -> impl Iterator<Item = &'static str> {
        PLATFORMS.iter().map(|(key, _)| *key)
    }
}

/// Resolve the host-reported `(os, arch)` to its distribution directory.
///
/// The reported pair (before normalization) is kept in the error so the
/// diagnostic names what the host actually said.
pub fn resolve(os: &str, arch: &str) -> Result<(PlatformKey, &'static str)> {
    let key = PlatformKey::new(os, arch);
    match PlatformRegistry::lookup(&key) {
        Some(dir) => Ok((key, dir)),
        None => Err(InstallError::UnsupportedPlatform {
            key: key.to_string(),
            reported: format!("{os}-{arch}"),
        }),
    }
}
