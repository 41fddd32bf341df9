//! Unit system configuration files.
//!
//! ```toml
//! [registry]
//! length = [1.0, "dm"]
//! mass = [1.0, "kg"]
//! time = [1.0, "s"]
//! current = [1.0, "A"]
//! temperature = [1.0, "K"]
//! luminous_intensity = [1.0, "cd"]
//! amount = [1.0, "mol"]
//! ```
//!
//! A file without a `[registry]` table selects unitless mode. Files ending in
//! `.json` are read and written as JSON, everything else as TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::UnitSystem;
use super::human_readable::{
    HumanReadableRegistry, unit_registry_from_human_readable, unit_registry_to_human_readable,
};
use crate::types::units::UnitError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDeError(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid unit registry: {0}")]
    UnitError(#[from] UnitError),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnitsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<HumanReadableRegistry>,
}

impl UnitsConfig {
    pub fn from_unit_system(system: &UnitSystem) -> Result<Self, ConfigError> {
        Ok(Self {
            registry: unit_registry_to_human_readable(system)?,
        })
    }

    pub fn unit_system(&self) -> Result<UnitSystem, ConfigError> {
        Ok(unit_registry_from_human_readable(self.registry.as_ref())?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a `.json` or TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = if is_json(path) {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        debug!(path = %path.display(), unitless = config.registry.is_none(), "loaded units config");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = if is_json(path) {
            self.to_json_string()?
        } else {
            self.to_toml_string()?
        };
        fs::write(path, content)?;
        trace!(path = %path.display(), "saved units config");
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::UnitRegistry;
    use crate::types::units::*;

    const DECIMETRE_CONFIG: &str = r#"
[registry]
length = [1.0, "dm"]
mass = [1.0, "kg"]
time = [1.0, "s"]
current = [1.0, "A"]
temperature = [1.0, 1]
luminous_intensity = [1.0, "cd"]
amount = [1.0, "mol"]
"#;

    #[test]
    fn test_parse_toml() {
        let config = UnitsConfig::from_toml_str(DECIMETRE_CONFIG).unwrap();
        let system = config.unit_system().unwrap();
        let registry = system.registry().unwrap();
        assert_eq!(registry.length, DECIMETRE.quantity());
        assert!(registry.temperature.is_one());
    }

    #[test]
    fn test_empty_config_is_unitless() {
        let config = UnitsConfig::from_toml_str("").unwrap();
        assert_eq!(config.unit_system().unwrap(), UnitSystem::Dimensionless);
        assert_eq!(config.to_toml_string().unwrap().trim(), "");
    }

    #[test]
    fn test_missing_key_rejected() {
        let content = DECIMETRE_CONFIG.replace("amount = [1.0, \"mol\"]\n", "");
        assert!(matches!(
            UnitsConfig::from_toml_str(&content),
            Err(ConfigError::TomlDeError(_))
        ));
    }

    #[test]
    fn test_unknown_unit_surfaces() {
        let content = DECIMETRE_CONFIG.replace("\"dm\"", "\"furlong\"");
        let config = UnitsConfig::from_toml_str(&content).unwrap();
        assert!(matches!(
            config.unit_system(),
            Err(ConfigError::UnitError(UnitError::UnknownUnit(_)))
        ));
    }

    #[test]
    fn test_toml_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("units.toml");

        let registry = UnitRegistry {
            length: DECIMETRE.quantity(),
            amount: MICROMOLE.quantity(),
            ..UnitRegistry::si()
        };
        let config = UnitsConfig::from_unit_system(&registry.clone().into()).unwrap();
        config.save(&path).unwrap();

        let loaded = UnitsConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.unit_system().unwrap(), UnitSystem::Dimensional(registry));
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("units.json");

        let config = UnitsConfig::from_unit_system(&UnitSystem::si()).unwrap();
        config.save(&path).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("\"registry\""));

        let loaded = UnitsConfig::from_file(&path).unwrap();
        assert_eq!(loaded.unit_system().unwrap(), UnitSystem::si());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            UnitsConfig::from_file("/nonexistent/units.toml"),
            Err(ConfigError::IoError(_))
        ));
    }
}
