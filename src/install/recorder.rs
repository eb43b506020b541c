//! The resolved-path record read by the `kcdev` launcher.

use crate::error::{InstallError, Result};
use crate::paths::package::binary_path_record;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `binary` as the whole content of `<package-root>/bin/.binary-path`,
/// replacing whatever was there. Returns the record's path.
///
/// The record is UTF-8 text, so a path that is not valid UTF-8 is refused
/// and nothing is written.
pub fn record(package_root: &Path, binary: &Path) -> Result<PathBuf> {
    let record_path = binary_path_record(package_root);
    let Some(contents) = binary.to_str() else {
        return Err(InstallError::PersistFailure {
            path: record_path,
            source: io::Error::new(
                io::ErrorKind::InvalidData,
                format!("binary path is not valid UTF-8: {binary:?}"),
            ),
        });
    };

    fs::write(&record_path, contents).map_err(|source| {
        InstallError::PersistFailure {
            path: record_path.clone(),
            source,
        }
    })?;

    log::debug!("Recorded {binary:?} in {record_path:?}");
    Ok(record_path)
}

/// Read the recorded binary path verbatim.
pub fn read_record(package_root: &Path) -> Result<PathBuf> {
    let record_path = binary_path_record(package_root);
    let contents = fs::read_to_string(&record_path)?;
    Ok(PathBuf::from(contents))
}
