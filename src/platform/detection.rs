//! Host platform detection.
//!
//! The installer never reads the host platform directly; it asks a
//! [`PlatformProvider`] so tests can pretend to be any host.

use std::env::consts;

/// Source of the host's `(os, arch)` identifiers, in the package manager's
/// vocabulary (`darwin`, `linux`, `win32`; `x64`, `arm64`, `ia32`, ...).
#[cfg_attr(test, mockall::automock)]
pub trait PlatformProvider {
    fn os(&self) -> String;
    fn arch(&self) -> String;
}

/// Reads the platform this binary was compiled for.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl PlatformProvider for HostPlatform {
    fn os(&self) -> String {
        to_package_os(consts::OS).to_string()
    }

    fn arch(&self) -> String {
        to_package_arch(consts::ARCH).to_string()
    }
}

/// A provider that always reports the same platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPlatform {
    os: String,
    arch: String,
}

impl FixedPlatform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }
}

impl PlatformProvider for FixedPlatform {
    fn os(&self) -> String {
        self.os.clone()
    }

    fn arch(&self) -> String {
        self.arch.clone()
    }
}

/// Map Rust's target OS name to the package manager's naming:
/// - `macos` → `"darwin"`
/// - `windows` → `"win32"`
/// - Others unchanged (`linux`, `freebsd`, ...)
pub fn to_package_os(rust_os: &str) -> &str {
    match rust_os {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}

/// Map Rust's target architecture name to the package manager's naming:
/// - `x86_64` → `"x64"`
/// - `aarch64` → `"arm64"`
/// - `x86` → `"ia32"`
/// - `powerpc64` → `"ppc64"`
/// - Others unchanged (`arm`, `s390x`, `riscv64`, ...)
pub fn to_package_arch(rust_arch: &str) -> &str {
    match rust_arch {
        "x86_64" => "x64",
        "aarch64" => "arm64",
        "x86" => "ia32",
        "powerpc64" => "ppc64",
        other => other,
    }
}
