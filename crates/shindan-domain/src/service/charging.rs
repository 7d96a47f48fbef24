//! Charging-system voltage classification
//!
//! Normalizes a single under-load voltage reading into a four-valued status.
//! This module does not score or diagnose anything; partial load context or
//! an unusable reading degrades to `Unknown` rather than an error.

use serde::{Deserialize, Serialize};

use crate::model::{ChargingMeasurement, MeasurementStrength};

/// Alternator output at or above this is overcharging territory
pub const VOLTAGE_HIGH_THRESHOLD: f64 = 14.8;

/// Alternator output below this under full load is undercharging
pub const VOLTAGE_LOW_THRESHOLD: f64 = 13.2;

/// Four-valued charging voltage status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoltageStatus {
    /// 13.2V - 14.8V under full load
    Ok,
    /// Below 13.2V under full load
    Low,
    /// 14.8V or above under full load
    High,
    /// Reading unusable or load precondition not met
    Unknown,
}

impl VoltageStatus {
    /// Map a finite voltage to a status. Load context is the caller's job.
    fn from_voltage(voltage: f64) -> Self {
        match voltage {
            v if v >= VOLTAGE_HIGH_THRESHOLD => VoltageStatus::High,
            v if v >= VOLTAGE_LOW_THRESHOLD => VoltageStatus::Ok,
            _ => VoltageStatus::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VoltageStatus::Ok => "OK",
            VoltageStatus::Low => "LOW",
            VoltageStatus::High => "HIGH",
            VoltageStatus::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for VoltageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a single charging measurement
///
/// Any non-Unknown result requires headlights, blower, and rear defroster
/// all on simultaneously. A missing or non-finite voltage is `Unknown`.
pub fn classify_charging_voltage(measurement: &ChargingMeasurement) -> VoltageStatus {
    if !measurement.under_full_load() {
        return VoltageStatus::Unknown;
    }
    match measurement.voltage {
        Some(v) if v.is_finite() => VoltageStatus::from_voltage(v),
        _ => VoltageStatus::Unknown,
    }
}

/// Result of a charging check for a single measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargingCheckResult {
    pub measurement: ChargingMeasurement,
    pub status: VoltageStatus,
}

/// Classify a batch of measurements
pub fn check_charging(measurements: &[ChargingMeasurement]) -> Vec<ChargingCheckResult> {
    measurements
        .iter()
        .map(|m| ChargingCheckResult {
            measurement: *m,
            status: classify_charging_voltage(m),
        })
        .collect()
}

/// One-hop measurement-exception eligibility
///
/// A strong charging measurement may directly override exactly one dependent
/// system. The dependent list is fixed; this reports eligibility only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionEligibility {
    pub eligible: bool,
    pub allowed_dependents: Vec<String>,
    pub notes: Vec<String>,
}

pub fn exception_eligibility(strength: Option<MeasurementStrength>) -> ExceptionEligibility {
    match strength {
        Some(MeasurementStrength::Strong) => ExceptionEligibility {
            eligible: true,
            allowed_dependents: vec!["battery".to_string()],
            notes: vec![
                "Strong charging measurement may override the battery result one hop away."
                    .to_string(),
                "No other dependent system is affected.".to_string(),
            ],
        },
        Some(other) => ExceptionEligibility {
            eligible: false,
            allowed_dependents: Vec::new(),
            notes: vec![format!(
                "Measurement strength '{}' does not qualify for an exception.",
                other.label()
            )],
        },
        None => ExceptionEligibility {
            eligible: false,
            allowed_dependents: Vec::new(),
            notes: vec!["Measurement strength unknown; no exception applies.".to_string()],
        },
    }
}

pub fn generate_charging_report(results: &[ChargingCheckResult]) -> String {
    let total = results.len();
    let count_of = |status: VoltageStatus| results.iter().filter(|r| r.status == status).count();
    let ok_count = count_of(VoltageStatus::Ok);
    let low_count = count_of(VoltageStatus::Low);
    let high_count = count_of(VoltageStatus::High);
    let unknown_count = count_of(VoltageStatus::Unknown);

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("            Charging System Check Report           \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Total measurements:   {}\n", total));
    report.push_str(&format!("  OK:                   {}\n", ok_count));
    report.push_str(&format!("  LOW:                  {}\n", low_count));
    report.push_str(&format!("  HIGH:                 {}\n", high_count));
    report.push_str(&format!("  UNKNOWN:              {}\n", unknown_count));
    report.push('\n');

    if total > 0 {
        report.push_str("[Measurements]\n");
        report.push_str("-".repeat(52).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<4} {:>9} {:>11} {:>8} {:>9} {:>8}\n",
            "#", "Voltage", "Headlights", "Blower", "Defrost", "Status"
        ));
        report.push_str("-".repeat(52).as_str());
        report.push('\n');
        for (i, result) in results.iter().enumerate() {
            let voltage = match result.measurement.voltage {
                Some(v) => format!("{:.2}V", v),
                None => "-".to_string(),
            };
            let on_off = |flag: bool| if flag { "on" } else { "off" };
            report.push_str(&format!(
                "{:<4} {:>9} {:>11} {:>8} {:>9} {:>8}\n",
                i + 1,
                voltage,
                on_off(result.measurement.headlights_on),
                on_off(result.measurement.blower_on),
                on_off(result.measurement.rear_defroster_on),
                result.status.label()
            ));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_load(voltage: Option<f64>) -> ChargingMeasurement {
        ChargingMeasurement::new(voltage).with_full_load()
    }

    #[test]
    fn test_boundary_values() {
        assert_eq!(classify_charging_voltage(&full_load(Some(14.8))), VoltageStatus::High);
        assert_eq!(classify_charging_voltage(&full_load(Some(14.7999))), VoltageStatus::Ok);
        assert_eq!(classify_charging_voltage(&full_load(Some(13.2))), VoltageStatus::Ok);
        assert_eq!(classify_charging_voltage(&full_load(Some(13.1999))), VoltageStatus::Low);
    }

    #[test]
    fn test_partial_load_is_unknown_regardless_of_voltage() {
        for voltage in [12.0, 13.2, 14.0, 14.8, 16.0] {
            let mut m = full_load(Some(voltage));
            m.headlights_on = false;
            assert_eq!(classify_charging_voltage(&m), VoltageStatus::Unknown);

            let mut m = full_load(Some(voltage));
            m.blower_on = false;
            assert_eq!(classify_charging_voltage(&m), VoltageStatus::Unknown);

            let mut m = full_load(Some(voltage));
            m.rear_defroster_on = false;
            assert_eq!(classify_charging_voltage(&m), VoltageStatus::Unknown);
        }
    }

    #[test]
    fn test_unusable_voltage_is_unknown() {
        assert_eq!(classify_charging_voltage(&full_load(None)), VoltageStatus::Unknown);
        assert_eq!(classify_charging_voltage(&full_load(Some(f64::NAN))), VoltageStatus::Unknown);
        assert_eq!(
            classify_charging_voltage(&full_load(Some(f64::INFINITY))),
            VoltageStatus::Unknown
        );
        assert_eq!(
            classify_charging_voltage(&full_load(Some(f64::NEG_INFINITY))),
            VoltageStatus::Unknown
        );
    }

    #[test]
    fn test_exception_strong_allows_battery_only() {
        let result = exception_eligibility(Some(MeasurementStrength::Strong));
        assert!(result.eligible);
        assert_eq!(result.allowed_dependents, vec!["battery".to_string()]);
        assert!(!result.notes.is_empty());
    }

    #[test]
    fn test_exception_other_strengths_ineligible() {
        for strength in [
            Some(MeasurementStrength::Moderate),
            Some(MeasurementStrength::Weak),
            None,
        ] {
            let result = exception_eligibility(strength);
            assert!(!result.eligible);
            assert!(result.allowed_dependents.is_empty());
        }
    }

    #[test]
    fn test_check_charging_batch() {
        let measurements = vec![
            full_load(Some(14.0)),
            full_load(Some(12.8)),
            ChargingMeasurement::new(Some(14.0)),
        ];
        let results = check_charging(&measurements);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].status, VoltageStatus::Ok);
        assert_eq!(results[1].status, VoltageStatus::Low);
        assert_eq!(results[2].status, VoltageStatus::Unknown);
    }

    #[test]
    fn test_generate_report() {
        let results = check_charging(&[full_load(Some(14.0)), full_load(Some(15.1))]);
        let report = generate_charging_report(&results);
        assert!(report.contains("Charging System Check Report"));
        assert!(report.contains("Total measurements:   2"));
        assert!(report.contains("HIGH"));
    }
}
