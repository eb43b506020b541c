//! Platform detection utilities.
//!
//! This module reports the host's operating system and architecture in the
//! package manager's vocabulary and provides the executable naming rules
//! that depend on them.

mod constants;
mod detection;

pub use detection::{
    FixedPlatform, HostPlatform, PlatformProvider, to_package_arch, to_package_os,
};

#[cfg(test)]
pub use detection::MockPlatformProvider;

pub use constants::{DEFAULT_TOOL_NAME, executable_extension, with_executable_extension};
