//! Platform-specific constants and utility functions.

use crate::models::platform::WINDOWS_OS;

/// Base name of the native tool shipped in the package.
pub const DEFAULT_TOOL_NAME: &str = "kcdev";

/// Executable file extension for the given package-manager OS identifier.
pub fn executable_extension(os: &str) -> &'static str {
    if os == WINDOWS_OS { ".exe" } else { "" }
}

/// Add the executable extension for `os` to a tool name
pub fn with_executable_extension(name: &str, os: &str) -> String {
    format!("{name}{}", executable_extension(os))
}
