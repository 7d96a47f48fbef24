//! File-based implementation of MaintenanceLogRepository

use std::path::PathBuf;

use shindan_domain::model::{MaintenanceEvent, MaintenanceType};
use shindan_domain::repository::MaintenanceLogRepository;
use shindan_types::Error;

use crate::maintenance_csv::load_maintenance_log_from_csv;

/// Maintenance log repository backed by a CSV file
pub struct FileMaintenanceLogRepository {
    csv_path: PathBuf,
    events: Vec<MaintenanceEvent>,
}

impl FileMaintenanceLogRepository {
    /// Create a repository from a CSV file path
    pub fn new(csv_path: PathBuf) -> Result<Self, Error> {
        let events = load_maintenance_log_from_csv(&csv_path)
            .map_err(|e| Error::CsvLoader(e.to_string()))?;
        Ok(Self { csv_path, events })
    }

    /// The backing CSV path
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

impl MaintenanceLogRepository for FileMaintenanceLogRepository {
    fn find_all(&self) -> Result<Vec<MaintenanceEvent>, Error> {
        Ok(self.events.clone())
    }

    fn find_by_type(&self, event_type: MaintenanceType) -> Result<Vec<MaintenanceEvent>, Error> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect())
    }

    fn find_latest(&self, event_type: MaintenanceType) -> Result<Option<MaintenanceEvent>, Error> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.event_type == event_type)
            .max_by_key(|e| e.date)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_find_latest_oil_change() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"2023-06-01,oil change,4000\n2024-01-01,oil change,9000\n2024-02-01,tires,9500\n",
        )
        .unwrap();
        let repo = FileMaintenanceLogRepository::new(file.path().to_path_buf()).unwrap();

        assert_eq!(repo.find_all().unwrap().len(), 3);
        assert_eq!(repo.find_by_type(MaintenanceType::OilChange).unwrap().len(), 2);
        let latest = repo.find_latest(MaintenanceType::OilChange).unwrap().unwrap();
        assert!((latest.odometer_miles - 9000.0).abs() < f64::EPSILON);
        assert!(repo
            .find_latest(MaintenanceType::Inspection)
            .unwrap()
            .is_none());
    }
}
