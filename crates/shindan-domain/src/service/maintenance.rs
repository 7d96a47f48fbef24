//! Mileage averaging and oil-change scheduling arithmetic
//!
//! All functions here are deterministic and side-effect-free. Missing or
//! degenerate input yields a sentinel (`0`, `None`) instead of an error.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::model::{MaintenanceEvent, MaintenanceType, MileageEntry};

/// Default miles between oil changes
pub const DEFAULT_OIL_CHANGE_INTERVAL_MILES: f64 = 5000.0;

/// Window preferred for the weekly average, relative to the newest entry
const RECENT_WINDOW_DAYS: i64 = 28;

/// Weekly mileage average from dated odometer readings
///
/// Prefers entries within the most recent four weeks; falls back to the full
/// date range when fewer than two recent entries exist. Fewer than two
/// entries overall, or a non-positive day span, yields `0`.
pub fn weekly_mileage_average(entries: &[MileageEntry]) -> f64 {
    if entries.len() < 2 {
        return 0.0;
    }

    let mut sorted: Vec<MileageEntry> = entries.to_vec();
    sorted.sort_by_key(|e| e.date);

    let newest = sorted[sorted.len() - 1].date;
    let window_start = newest - Duration::days(RECENT_WINDOW_DAYS);
    let recent: Vec<MileageEntry> = sorted.iter().copied().filter(|e| e.date >= window_start).collect();

    if recent.len() >= 2 {
        average_over(&recent)
    } else {
        average_over(&sorted)
    }
}

/// Weekly average over a date-sorted span of entries
fn average_over(sorted: &[MileageEntry]) -> f64 {
    let first = &sorted[0];
    let last = &sorted[sorted.len() - 1];
    let days = (last.date - first.date).num_days();
    if days <= 0 {
        return 0.0;
    }
    let miles = last.odometer_miles - first.odometer_miles;
    (miles / days as f64 * 7.0).round()
}

/// Miles remaining until the next oil change
///
/// `None` when the history has no oil-change event. Clamped at zero once the
/// interval has been used up.
pub fn miles_until_oil_change(
    current_mileage: f64,
    events: &[MaintenanceEvent],
    interval_miles: f64,
) -> Option<f64> {
    let last_oil_change = events
        .iter()
        .filter(|e| e.event_type == MaintenanceType::OilChange)
        .max_by_key(|e| e.date)?;

    let miles_since = current_mileage - last_oil_change.odometer_miles;
    Some((interval_miles - miles_since).max(0.0))
}

/// Days remaining, derived from the daily rate implied by the weekly average
///
/// `None` when miles remaining is unknown or the average is non-positive.
pub fn days_until_oil_change(miles_remaining: Option<f64>, weekly_average: f64) -> Option<i64> {
    let miles = miles_remaining?;
    if weekly_average <= 0.0 {
        return None;
    }
    let daily_rate = weekly_average / 7.0;
    Some((miles / daily_rate).round() as i64)
}

/// Human display for miles remaining
pub fn format_miles_remaining(miles: Option<f64>) -> String {
    match miles {
        None => "Unknown".to_string(),
        Some(m) if m <= 0.0 => "Overdue!".to_string(),
        Some(m) => format!("{} mi", m.round() as i64),
    }
}

/// Human display for days remaining
pub fn format_days_remaining(days: Option<i64>) -> String {
    match days {
        None => "Unknown".to_string(),
        Some(d) if d <= 0 => "Overdue!".to_string(),
        Some(d) if d < 14 => format!("{} days", d),
        Some(d) => format!("~{} weeks", ((d as f64) / 7.0).round() as i64),
    }
}

/// Oil-change outlook for one vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OilChangeOutlook {
    pub current_mileage: f64,
    pub interval_miles: f64,
    pub weekly_average_miles: f64,
    pub miles_remaining: Option<f64>,
    pub days_remaining: Option<i64>,
    pub miles_display: String,
    pub days_display: String,
}

/// Combine the schedule calculations for a single vehicle
pub fn compute_oil_change_outlook(
    mileage_log: &[MileageEntry],
    maintenance_log: &[MaintenanceEvent],
    current_mileage: f64,
    interval_miles: f64,
) -> OilChangeOutlook {
    let weekly_average = weekly_mileage_average(mileage_log);
    let miles_remaining = miles_until_oil_change(current_mileage, maintenance_log, interval_miles);
    let days_remaining = days_until_oil_change(miles_remaining, weekly_average);

    OilChangeOutlook {
        current_mileage,
        interval_miles,
        weekly_average_miles: weekly_average,
        miles_remaining,
        days_remaining,
        miles_display: format_miles_remaining(miles_remaining),
        days_display: format_days_remaining(days_remaining),
    }
}

pub fn generate_outlook_report(outlook: &OilChangeOutlook) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("             Oil Change Outlook Report             \n");
    report.push_str("==================================================\n\n");
    report.push_str(&format!("  Current mileage:    {:.0} mi\n", outlook.current_mileage));
    report.push_str(&format!("  Change interval:    {:.0} mi\n", outlook.interval_miles));
    report.push_str(&format!(
        "  Weekly average:     {:.0} mi/week\n",
        outlook.weekly_average_miles
    ));
    report.push_str(&format!("  Miles remaining:    {}\n", outlook.miles_display));
    report.push_str(&format!("  Days remaining:     {}\n", outlook.days_display));
    report.push_str("\n==================================================\n");
    report
}
