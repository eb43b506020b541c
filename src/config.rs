use crate::error::{InstallError, Result};
use crate::platform::DEFAULT_TOOL_NAME;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "kcdev-install.toml";

/// Optional per-package installer settings, read from
/// `<package-root>/kcdev-install.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallerConfig {
    #[serde(default = "default_tool_name")]
    pub tool_name: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            tool_name: default_tool_name(),
        }
    }
}

fn default_tool_name() -> String {
    DEFAULT_TOOL_NAME.to_string()
}

impl InstallerConfig {
    pub fn load(package_root: &Path) -> Result<Self> {
        let config_path = package_root.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: InstallerConfig = toml::from_str(&contents).map_err(|e| {
            InstallError::InvalidConfig(format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))
        })?;
        config.validate()?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }

    /// The tool name becomes a file name under `bin/<dir>/`, so it must be a
    /// single plain path component.
    fn validate(&self) -> Result<()> {
        let name = self.tool_name.as_str();
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\'])
        {
            return Err(InstallError::InvalidConfig(format!(
                "tool_name must be a plain file name, got '{name}'"
            )));
        }
        Ok(())
    }
}
