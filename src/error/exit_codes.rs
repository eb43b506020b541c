use crate::error::InstallError;

/// Exit code for every installation failure the package manager sees.
pub const EXIT_INSTALL_FAILED: i32 = 1;

/// Exit code for a malformed installer configuration file.
pub const EXIT_INVALID_CONFIG: i32 = 2;

pub fn get_exit_code(error: &InstallError) -> i32 {
    match error {
        InstallError::InvalidConfig(_) => EXIT_INVALID_CONFIG,

        InstallError::UnsupportedPlatform { .. }
        | InstallError::BinaryMissing { .. }
        | InstallError::PersistFailure { .. }
        | InstallError::PackageRoot(_)
        | InstallError::Io(_) => EXIT_INSTALL_FAILED,
    }
}
