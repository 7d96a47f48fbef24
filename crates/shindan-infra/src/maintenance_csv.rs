//! CSV loaders for mileage logs, maintenance logs, and measurement batches
//!
//! Logs come from whatever the user exports; headers are optional and
//! malformed rows are skipped rather than failing the whole load.

use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use shindan_domain::model::{ChargingMeasurement, MaintenanceEvent, MaintenanceType, MileageEntry};

#[derive(Error, Debug)]
pub enum CsvLoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("CSV file is empty")]
    Empty,
}

fn reader_for(path: &Path) -> Result<csv::Reader<std::fs::File>, CsvLoaderError> {
    Ok(csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?)
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.trim().is_empty() {
        return None;
    }
    let formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s.trim(), fmt) {
            return Some(date);
        }
    }
    None
}

fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Load a mileage log from CSV
///
/// Expected columns (header optional): date, odometer_miles
pub fn load_mileage_log_from_csv(path: &Path) -> Result<Vec<MileageEntry>, CsvLoaderError> {
    let mut reader = reader_for(path)?;
    let mut entries = Vec::new();
    let mut saw_row = false;
    for record in reader.records() {
        let record = record?;
        saw_row = true;
        if let Some(entry) = parse_mileage_record(&record) {
            entries.push(entry);
        }
    }
    if !saw_row {
        return Err(CsvLoaderError::Empty);
    }
    Ok(entries)
}

fn parse_mileage_record(record: &csv::StringRecord) -> Option<MileageEntry> {
    let date = parse_date(record.get(0)?)?;
    let odometer_miles: f64 = record.get(1)?.parse().ok()?;
    Some(MileageEntry { date, odometer_miles })
}

/// Load a maintenance log from CSV
///
/// Expected columns (header optional): date, event_type, odometer_miles
pub fn load_maintenance_log_from_csv(
    path: &Path,
) -> Result<Vec<MaintenanceEvent>, CsvLoaderError> {
    let mut reader = reader_for(path)?;
    let mut events = Vec::new();
    let mut saw_row = false;
    for record in reader.records() {
        let record = record?;
        saw_row = true;
        if let Some(event) = parse_maintenance_record(&record) {
            events.push(event);
        }
    }
    if !saw_row {
        return Err(CsvLoaderError::Empty);
    }
    Ok(events)
}

fn parse_maintenance_record(record: &csv::StringRecord) -> Option<MaintenanceEvent> {
    let date = parse_date(record.get(0)?)?;
    let event_type = MaintenanceType::parse(record.get(1)?);
    let odometer_miles: f64 = record.get(2)?.parse().ok()?;
    Some(MaintenanceEvent {
        date,
        event_type,
        odometer_miles,
    })
}

/// Load a batch of charging measurements from CSV
///
/// Expected columns (header optional): voltage, headlights, blower, defroster.
/// A blank or unparseable voltage keeps the row with no reading, so the
/// classifier reports it as UNKNOWN rather than dropping it.
pub fn load_measurements_from_csv(
    path: &Path,
) -> Result<Vec<ChargingMeasurement>, CsvLoaderError> {
    let mut reader = reader_for(path)?;
    let mut measurements = Vec::new();
    let mut saw_row = false;
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        saw_row = true;
        // Header sniff on the first row only
        if idx == 0 && is_measurement_header(&record) {
            continue;
        }
        if let Some(measurement) = parse_measurement_record(&record) {
            measurements.push(measurement);
        }
    }
    if !saw_row {
        return Err(CsvLoaderError::Empty);
    }
    Ok(measurements)
}

fn is_measurement_header(record: &csv::StringRecord) -> bool {
    record
        .get(0)
        .map(|f| f.parse::<f64>().is_err() && f.chars().any(|c| c.is_ascii_alphabetic()))
        .unwrap_or(false)
}

fn parse_measurement_record(record: &csv::StringRecord) -> Option<ChargingMeasurement> {
    let voltage_field = record.get(0)?;
    let voltage: Option<f64> = voltage_field.parse().ok().filter(|v: &f64| v.is_finite());
    Some(ChargingMeasurement {
        voltage,
        headlights_on: record.get(1).map(parse_flag).unwrap_or(false),
        blower_on: record.get(2).map(parse_flag).unwrap_or(false),
        rear_defroster_on: record.get(3).map(parse_flag).unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_mileage_log_with_header() {
        let file = write_csv("date,odometer_miles\n2024-01-01,10000\n2024/01/15,10700\n");
        let entries = load_mileage_log_from_csv(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert!((entries[1].odometer_miles - 10700.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_mileage_log_skips_bad_rows() {
        let file = write_csv("2024-01-01,10000\nnot-a-date,10500\n2024-01-15,oops\n2024-01-20,11000\n");
        let entries = load_mileage_log_from_csv(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_load_maintenance_log() {
        let file = write_csv(
            "date,event_type,odometer_miles\n2024-01-01,oil change,10000\n2024-02-01,tire rotation,11000\n",
        );
        let events = load_maintenance_log_from_csv(file.path()).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, MaintenanceType::OilChange);
        assert_eq!(events[1].event_type, MaintenanceType::TireRotation);
    }

    #[test]
    fn test_load_measurements() {
        let file = write_csv("voltage,headlights,blower,defroster\n14.0,1,1,1\n,1,1,1\n12.8,1,0,1\n");
        let measurements = load_measurements_from_csv(file.path()).unwrap();
        assert_eq!(measurements.len(), 3);
        assert!(measurements[0].voltage.is_some());
        assert!(measurements[1].voltage.is_none());
        assert!(!measurements[2].blower_on);
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let file = write_csv("");
        assert!(load_mileage_log_from_csv(file.path()).is_err());
    }
}
