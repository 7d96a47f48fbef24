use serde::{Deserialize, Serialize};

/// A dated odometer reading from the mileage log
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MileageEntry {
    pub date: chrono::NaiveDate,
    pub odometer_miles: f64,
}

/// Maintenance event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    OilChange,
    TireRotation,
    Inspection,
    Other,
}

impl MaintenanceType {
    /// Parse from a log field. Unrecognized tags fall through to `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "oil_change" | "oil" => MaintenanceType::OilChange,
            "tire_rotation" | "tires" => MaintenanceType::TireRotation,
            "inspection" => MaintenanceType::Inspection,
            _ => MaintenanceType::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaintenanceType::OilChange => "oil change",
            MaintenanceType::TireRotation => "tire rotation",
            MaintenanceType::Inspection => "inspection",
            MaintenanceType::Other => "other",
        }
    }
}

/// A recorded maintenance event from the service history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceEvent {
    pub date: chrono::NaiveDate,
    pub event_type: MaintenanceType,
    pub odometer_miles: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_type() {
        assert_eq!(MaintenanceType::parse("oil change"), MaintenanceType::OilChange);
        assert_eq!(MaintenanceType::parse("OIL-CHANGE"), MaintenanceType::OilChange);
        assert_eq!(MaintenanceType::parse("tires"), MaintenanceType::TireRotation);
        assert_eq!(MaintenanceType::parse("brake pads"), MaintenanceType::Other);
    }
}
