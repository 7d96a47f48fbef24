//! Store and repository openers

use std::path::PathBuf;

use shindan_infra::persistence::{FileMaintenanceLogRepository, FileMileageLogRepository};
use shindan_infra::profile_loader::VehicleProfileLoader;
use shindan_store::EvaluationStore;
use shindan_types::Result;

use crate::config::Config;

/// Open the evaluation history store
pub fn open_evaluation_store(config: &Config) -> Result<EvaluationStore> {
    let store_dir = config.store_dir()?;
    EvaluationStore::open(store_dir)
}

/// Open the evaluation history store at a custom directory
pub fn open_evaluation_store_at(store_dir: PathBuf) -> Result<EvaluationStore> {
    EvaluationStore::open(store_dir)
}

/// Open mileage log repository from CSV
pub fn open_mileage_log_repo(csv_path: PathBuf) -> Result<FileMileageLogRepository> {
    FileMileageLogRepository::new(csv_path)
}

/// Open maintenance log repository from CSV
pub fn open_maintenance_log_repo(csv_path: PathBuf) -> Result<FileMaintenanceLogRepository> {
    FileMaintenanceLogRepository::new(csv_path)
}

/// Load a vehicle profile from TOML
pub fn open_vehicle_profile(toml_path: &std::path::Path) -> Result<VehicleProfileLoader> {
    VehicleProfileLoader::load_from_file(toml_path)
}
