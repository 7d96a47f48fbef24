//! Vehicle profile loader from TOML configuration

use std::fs;
use std::path::Path;

use serde::Deserialize;

use shindan_domain::model::VehicleProfile;
use shindan_types::{ConfigError, Error, Result};

/// Container for parsing a profile TOML
#[derive(Debug, Deserialize)]
struct ProfileConfig {
    vehicle: VehicleProfile,
}

/// Vehicle profile loaded from TOML
#[derive(Debug)]
pub struct VehicleProfileLoader {
    profile: VehicleProfile,
}

impl VehicleProfileLoader {
    /// Load a vehicle profile from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read vehicle profile: {}",
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    /// Load a vehicle profile from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: ProfileConfig = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse vehicle profile TOML: {}",
                e
            )))
        })?;

        Ok(Self {
            profile: config.vehicle,
        })
    }

    /// The loaded profile
    pub fn profile(&self) -> &VehicleProfile {
        &self.profile
    }

    /// Per-vehicle oil change interval, if set
    pub fn oil_change_interval_miles(&self) -> Option<f64> {
        self.profile.oil_change_interval_miles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOML: &str = r#"
[vehicle]
name = "Civic"
oil_change_interval_miles = 7500.0
notes = "synthetic oil"
"#;

    #[test]
    fn test_load_profile() {
        let loader = VehicleProfileLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(loader.profile().name, "Civic");
        assert!((loader.oil_change_interval_miles().unwrap() - 7500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_interval_is_optional() {
        let loader = VehicleProfileLoader::load_from_str("[vehicle]\nname = \"Hiace\"\n").unwrap();
        assert!(loader.oil_change_interval_miles().is_none());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        assert!(VehicleProfileLoader::load_from_str("not toml at all [").is_err());
    }
}
