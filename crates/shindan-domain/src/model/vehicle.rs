use serde::{Deserialize, Serialize};

/// Per-vehicle profile with maintenance settings
///
/// Loaded from a profile TOML; fields left out fall back to the
/// application defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Vehicle name (e.g., "Civic", "Hiace")
    pub name: String,
    /// Miles between oil changes for this vehicle
    #[serde(default)]
    pub oil_change_interval_miles: Option<f64>,
    /// Notes/memo
    #[serde(default)]
    pub notes: Option<String>,
}
