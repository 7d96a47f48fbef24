//! Oil-change schedule use case

use std::path::Path;

use shindan_domain::repository::{MaintenanceLogRepository, MileageLogRepository};
use shindan_domain::service::{compute_oil_change_outlook, OilChangeOutlook};
use shindan_infra::profile_loader::VehicleProfileLoader;
use shindan_types::Result;

use crate::config::Config;
use crate::repository::{open_maintenance_log_repo, open_mileage_log_repo, open_vehicle_profile};

/// Inputs for a schedule computation
#[derive(Debug, Clone)]
pub struct ScheduleOptions<'a> {
    pub mileage_log: &'a Path,
    pub maintenance_log: &'a Path,
    pub current_mileage: f64,
    /// CLI override; wins over profile and config
    pub interval_override: Option<f64>,
    pub profile: Option<&'a Path>,
}

/// Resolve the oil-change interval: CLI flag > vehicle profile > config default
pub fn resolve_interval(
    cli_interval: Option<f64>,
    profile: Option<&VehicleProfileLoader>,
    config: &Config,
) -> f64 {
    cli_interval
        .or_else(|| profile.and_then(|p| p.oil_change_interval_miles()))
        .unwrap_or(config.oil_change_interval_miles)
}

/// Compute the oil-change outlook from file-based logs
pub fn oil_change_outlook(options: &ScheduleOptions<'_>, config: &Config) -> Result<OilChangeOutlook> {
    let profile = match options.profile {
        Some(path) => Some(open_vehicle_profile(path)?),
        None => None,
    };
    let interval = resolve_interval(options.interval_override, profile.as_ref(), config);

    let mileage_repo = open_mileage_log_repo(options.mileage_log.to_path_buf())?;
    let maintenance_repo = open_maintenance_log_repo(options.maintenance_log.to_path_buf())?;

    let mileage_log = mileage_repo.find_all()?;
    let maintenance_log = maintenance_repo.find_all()?;

    Ok(compute_oil_change_outlook(
        &mileage_log,
        &maintenance_log,
        options.current_mileage,
        interval,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolve_interval_order() {
        let config = Config::default();
        let profile =
            VehicleProfileLoader::load_from_str("[vehicle]\nname = \"Civic\"\noil_change_interval_miles = 7500.0\n")
                .unwrap();

        assert!((resolve_interval(Some(3000.0), Some(&profile), &config) - 3000.0).abs() < f64::EPSILON);
        assert!((resolve_interval(None, Some(&profile), &config) - 7500.0).abs() < f64::EPSILON);
        assert!((resolve_interval(None, None, &config) - 5000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_outlook_from_csv_logs() {
        let mut mileage = tempfile::NamedTempFile::new().unwrap();
        mileage
            .write_all(b"2024-01-01,10000\n2024-01-15,10700\n")
            .unwrap();
        let mut maintenance = tempfile::NamedTempFile::new().unwrap();
        maintenance
            .write_all(b"2024-01-01,oil change,10000\n")
            .unwrap();

        let options = ScheduleOptions {
            mileage_log: mileage.path(),
            maintenance_log: maintenance.path(),
            current_mileage: 10700.0,
            interval_override: None,
            profile: None,
        };
        let outlook = oil_change_outlook(&options, &Config::default()).unwrap();
        assert!((outlook.weekly_average_miles - 350.0).abs() < f64::EPSILON);
        assert!((outlook.miles_remaining.unwrap() - 4300.0).abs() < f64::EPSILON);
    }
}
