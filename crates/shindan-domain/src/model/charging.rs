use serde::{Deserialize, Serialize};

/// A single charging-system measurement with its load context
///
/// Constructed by the caller per evaluation and discarded afterwards.
/// `voltage` is `None` when the reading was missing or unparseable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChargingMeasurement {
    /// Measured voltage at the battery terminals
    pub voltage: Option<f64>,
    /// Headlights switched on during measurement
    pub headlights_on: bool,
    /// Heater blower on full during measurement
    pub blower_on: bool,
    /// Rear defroster switched on during measurement
    pub rear_defroster_on: bool,
}

impl ChargingMeasurement {
    pub fn new(voltage: Option<f64>) -> Self {
        Self {
            voltage,
            headlights_on: false,
            blower_on: false,
            rear_defroster_on: false,
        }
    }

    pub fn with_full_load(mut self) -> Self {
        self.headlights_on = true;
        self.blower_on = true;
        self.rear_defroster_on = true;
        self
    }

    /// All three load consumers on simultaneously
    pub fn under_full_load(&self) -> bool {
        self.headlights_on && self.blower_on && self.rear_defroster_on
    }
}

/// Strength indicator reported alongside a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementStrength {
    Strong,
    Moderate,
    Weak,
}

impl MeasurementStrength {
    /// Parse from a user-supplied string, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strong" => Some(MeasurementStrength::Strong),
            "moderate" | "mid" | "middle" => Some(MeasurementStrength::Moderate),
            "weak" => Some(MeasurementStrength::Weak),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeasurementStrength::Strong => "strong",
            MeasurementStrength::Moderate => "moderate",
            MeasurementStrength::Weak => "weak",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_load_requires_all_three() {
        let m = ChargingMeasurement::new(Some(14.0)).with_full_load();
        assert!(m.under_full_load());

        let mut partial = m;
        partial.blower_on = false;
        assert!(!partial.under_full_load());
    }

    #[test]
    fn test_strength_parse() {
        assert_eq!(MeasurementStrength::parse("Strong"), Some(MeasurementStrength::Strong));
        assert_eq!(MeasurementStrength::parse(" weak "), Some(MeasurementStrength::Weak));
        assert_eq!(MeasurementStrength::parse("mid"), Some(MeasurementStrength::Moderate));
        assert_eq!(MeasurementStrength::parse("bogus"), None);
    }
}
