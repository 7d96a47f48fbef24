//! Repository trait definitions for maintenance data sources

use chrono::NaiveDate;

use crate::model::{MaintenanceEvent, MaintenanceType, MileageEntry};
use shindan_types::Error;

/// Repository for mileage log entries
#[allow(dead_code)]
pub trait MileageLogRepository {
    /// Load all mileage entries
    fn find_all(&self) -> Result<Vec<MileageEntry>, Error>;

    /// Find entries on or after a date
    fn find_since(&self, date: NaiveDate) -> Result<Vec<MileageEntry>, Error>;
}

/// Repository for maintenance events
#[allow(dead_code)]
pub trait MaintenanceLogRepository {
    /// Load all maintenance events
    fn find_all(&self) -> Result<Vec<MaintenanceEvent>, Error>;

    /// Find events of a given type
    fn find_by_type(&self, event_type: MaintenanceType) -> Result<Vec<MaintenanceEvent>, Error>;

    /// Find the most recent event of a given type
    fn find_latest(&self, event_type: MaintenanceType) -> Result<Option<MaintenanceEvent>, Error>;
}
