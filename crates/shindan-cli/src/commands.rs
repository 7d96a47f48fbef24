//! Command handlers

use std::path::PathBuf;

use crate::cli::{Cli, Commands};
use crate::output;

use shindan_app::config::Config;
use shindan_app::export::export_to_excel;
use shindan_app::repository::open_evaluation_store;
use shindan_app::schedule::{oil_change_outlook, ScheduleOptions};
use shindan_domain::model::{ChargingMeasurement, MeasurementStrength};
use shindan_domain::service::{
    check_charging, classify_charging_voltage, exception_eligibility, generate_charging_report,
    ChargingCheckResult,
};
use shindan_infra::maintenance_csv::load_measurements_from_csv;
use shindan_types::{Error, OutputFormat, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Charging {
            voltage,
            headlights,
            blower,
            defroster,
            notes,
            no_record,
        } => {
            let measurement = ChargingMeasurement {
                voltage,
                headlights_on: headlights,
                blower_on: blower,
                rear_defroster_on: defroster,
            };
            let status = classify_charging_voltage(&measurement);

            if !no_record {
                let mut store = open_evaluation_store(&config)?;
                let hash = store.add_evaluation(measurement, status, notes)?;
                if cli.verbose {
                    eprintln!("Recorded evaluation {}", &hash[..12]);
                }
            }

            output::output_charging_result(format, &ChargingCheckResult { measurement, status })
        }

        Commands::Exception { strength } => {
            let eligibility = exception_eligibility(MeasurementStrength::parse(&strength));
            output::output_exception(format, &eligibility)
        }

        Commands::Schedule {
            mileage_log,
            maintenance_log,
            current,
            interval,
            profile,
        } => {
            require_file(&mileage_log)?;
            require_file(&maintenance_log)?;

            let options = ScheduleOptions {
                mileage_log: &mileage_log,
                maintenance_log: &maintenance_log,
                current_mileage: current,
                interval_override: interval,
                profile: profile.as_deref(),
            };
            let outlook = oil_change_outlook(&options, &config)?;
            output::output_outlook(format, &outlook)
        }

        Commands::BatchCharging { csv } => {
            require_file(&csv)?;

            let measurements = load_measurements_from_csv(&csv)
                .map_err(|e| Error::CsvLoader(e.to_string()))?;
            let results = check_charging(&measurements);

            if format == OutputFormat::Json {
                let content = serde_json::to_string_pretty(&results)?;
                println!("{}", content);
            } else {
                print!("{}", generate_charging_report(&results));
            }
            Ok(())
        }

        Commands::History { limit } => {
            let store = open_evaluation_store(&config)?;
            let entries = store.all_entries();
            let shown: Vec<_> = entries.into_iter().take(limit).collect();
            output::output_history(format, &shown)
        }

        Commands::Export { output } => {
            let store = open_evaluation_store(&config)?;
            let entries = store.all_entries();
            let output_path = output.unwrap_or_else(|| PathBuf::from("evaluations.xlsx"));
            export_to_excel(&entries, &output_path)?;
            println!("Exported {} evaluations to {}", entries.len(), output_path.display());
            Ok(())
        }

        Commands::Config {
            show,
            set_interval,
            set_output,
            reset,
        } => {
            if reset {
                config = Config::default();
                config.save()?;
                println!("Configuration reset to defaults.");
            }

            let mut changed = false;
            if let Some(interval) = set_interval {
                config.oil_change_interval_miles = interval;
                changed = true;
            }
            if let Some(output_format) = set_output {
                config.output_format = output_format;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("Configuration updated.");
            }

            if show || (!changed && !reset) {
                print!("{}", config);
            }
            Ok(())
        }
    }
}

fn require_file(path: &std::path::Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    Ok(())
}
