//! Domain services

pub mod charging;
pub mod maintenance;

pub use charging::{
    check_charging, classify_charging_voltage, exception_eligibility, generate_charging_report,
    ChargingCheckResult, ExceptionEligibility, VoltageStatus,
};
pub use maintenance::{
    compute_oil_change_outlook, days_until_oil_change, format_days_remaining,
    format_miles_remaining, generate_outlook_report, miles_until_oil_change,
    weekly_mileage_average, OilChangeOutlook, DEFAULT_OIL_CHANGE_INTERVAL_MILES,
};
