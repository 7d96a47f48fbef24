//! Output formatting module

use shindan_domain::service::{
    generate_outlook_report, ChargingCheckResult, ExceptionEligibility, OilChangeOutlook,
    VoltageStatus,
};
use shindan_store::EvaluationRecord;
use shindan_types::{OutputFormat, Result};

pub fn output_charging_result(
    output_format: OutputFormat,
    result: &ChargingCheckResult,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
    } else {
        println!("\nCharging Check");
        println!("==============");
        match result.measurement.voltage {
            Some(v) => println!("Voltage:        {:.2} V", v),
            None => println!("Voltage:        (no reading)"),
        }
        let on_off = |flag: bool| if flag { "on" } else { "off" };
        println!("Headlights:     {}", on_off(result.measurement.headlights_on));
        println!("Blower:         {}", on_off(result.measurement.blower_on));
        println!("Defroster:      {}", on_off(result.measurement.rear_defroster_on));
        println!("Status:         {}", result.status.label());

        if result.status == VoltageStatus::Unknown && !result.measurement.under_full_load() {
            println!("\nNote: turn on headlights, blower, and rear defroster for a usable reading.");
        }
    }

    Ok(())
}

pub fn output_exception(
    output_format: OutputFormat,
    eligibility: &ExceptionEligibility,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(eligibility)?;
        println!("{}", content);
    } else {
        println!("\nMeasurement Exception");
        println!("=====================");
        println!("Eligible:       {}", if eligibility.eligible { "Yes" } else { "No" });
        if eligibility.allowed_dependents.is_empty() {
            println!("Dependents:     (none)");
        } else {
            println!("Dependents:     {}", eligibility.allowed_dependents.join(", "));
        }
        for note in &eligibility.notes {
            println!("  - {}", note);
        }
    }

    Ok(())
}

pub fn output_outlook(output_format: OutputFormat, outlook: &OilChangeOutlook) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(outlook)?;
        println!("{}", content);
    } else {
        print!("{}", generate_outlook_report(outlook));
    }

    Ok(())
}

pub fn output_history(output_format: OutputFormat, records: &[&EvaluationRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&records)?;
        println!("{}", content);
    } else {
        println!("\nEvaluation History ({} entries)", records.len());
        println!("{}", "-".repeat(60));
        for record in records {
            let voltage = match record.measurement.voltage {
                Some(v) => format!("{:.2}V", v),
                None => "-".to_string(),
            };
            println!(
                "{}  {:>8}  {:>8}  {}",
                record.recorded_at.format("%Y-%m-%d %H:%M"),
                voltage,
                record.status.label(),
                record.notes.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}
