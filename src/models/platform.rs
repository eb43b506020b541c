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

use std::fmt;

/// Operating system identifier used by the package manager for Windows.
pub const WINDOWS_OS: &str = "win32";

/// Canonical architecture buckets that kcdev ships binaries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    X64,
    Arm64,
}

impl Architecture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::X64 => "x64",
            Architecture::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket a host-reported architecture.
///
/// Only the literal `"x64"` maps to [`Architecture::X64`]; every other value,
/// including 32-bit families such as `ia32` or `arm`, lands in
/// [`Architecture::Arm64`]. 32-bit hosts are therefore mis-bucketed rather
/// than rejected.
pub fn normalize_arch(arch: &str) -> Architecture {
    if arch == "x64" {
        Architecture::X64
    } else {
        Architecture::Arm64
    }
}

/// An `(os, arch)` pair used as the registry lookup key.
///
/// The OS is kept verbatim so that hosts outside the supported set still
/// produce a key, which then misses the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformKey {
    os: String,
    arch: Architecture,
}

impl PlatformKey {
    pub fn new(os: impl Into<String>, arch: &str) -> Self {
        Self {
            os: os.into(),
            arch: normalize_arch(arch),
        }
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn arch(&self) -> Architecture {
        self.arch
    }

    pub fn is_windows(&self) -> bool {
        self.os == WINDOWS_OS
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_x64_is_exact_match() {
        assert_eq!(normalize_arch("x64"), Architecture::X64);
        assert_eq!(normalize_arch("X64"), Architecture::Arm64);
        assert_eq!(normalize_arch("x86_64"), Architecture::Arm64);
    }

    #[test]
    fn test_normalize_everything_else_to_arm64() {
        for arch in ["arm64", "ia32", "arm", "ppc64", "s390x", "riscv64", ""] {
            assert_eq!(normalize_arch(arch), Architecture::Arm64, "arch {arch}");
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for arch in ["x64", "arm64", "ia32", "mips"] {
            let once = normalize_arch(arch);
            assert_eq!(normalize_arch(once.as_str()), once);
        }
    }

    #[test]
    fn test_platform_key_display() {
        assert_eq!(PlatformKey::new("linux", "x64").to_string(), "linux-x64");
        assert_eq!(PlatformKey::new("darwin", "arm64").to_string(), "darwin-arm64");
        assert_eq!(PlatformKey::new("win32", "ia32").to_string(), "win32-arm64");
        assert_eq!(PlatformKey::new("freebsd", "x64").to_string(), "freebsd-x64");
    }

    #[test]
    fn test_platform_key_windows_detection() {
        assert!(PlatformKey::new("win32", "x64").is_windows());
        assert!(!PlatformKey::new("linux", "x64").is_windows());
        assert!(!PlatformKey::new("windows", "x64").is_windows());
    }
}
