//! File-based implementation of MileageLogRepository

use std::path::PathBuf;

use chrono::NaiveDate;

use shindan_domain::model::MileageEntry;
use shindan_domain::repository::MileageLogRepository;
use shindan_types::Error;

use crate::maintenance_csv::load_mileage_log_from_csv;

/// Mileage log repository backed by a CSV file
pub struct FileMileageLogRepository {
    csv_path: PathBuf,
    entries: Vec<MileageEntry>,
}

impl FileMileageLogRepository {
    /// Create a repository from a CSV file path
    pub fn new(csv_path: PathBuf) -> Result<Self, Error> {
        let entries = load_mileage_log_from_csv(&csv_path)
            .map_err(|e| Error::CsvLoader(e.to_string()))?;
        Ok(Self { csv_path, entries })
    }

    /// The backing CSV path
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }

    /// Reload entries from the CSV
    #[allow(dead_code)]
    pub fn reload(&mut self) -> Result<(), Error> {
        self.entries = load_mileage_log_from_csv(&self.csv_path)
            .map_err(|e| Error::CsvLoader(e.to_string()))?;
        Ok(())
    }
}

impl MileageLogRepository for FileMileageLogRepository {
    fn find_all(&self) -> Result<Vec<MileageEntry>, Error> {
        Ok(self.entries.clone())
    }

    fn find_since(&self, date: NaiveDate) -> Result<Vec<MileageEntry>, Error> {
        Ok(self
            .entries
            .iter()
            .copied()
            .filter(|e| e.date >= date)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_find_since_filters_by_date() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"2024-01-01,10000\n2024-02-01,11000\n2024-03-01,12000\n")
            .unwrap();
        let repo = FileMileageLogRepository::new(file.path().to_path_buf()).unwrap();

        assert_eq!(repo.find_all().unwrap().len(), 3);
        let since = repo
            .find_since(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .unwrap();
        assert_eq!(since.len(), 2);
    }
}
