//! Pace derivation: four pure functions over lease terms, an odometer
//! reading and an explicit `today`. None of them read a clock or fail.

use crate::domain::constants::DAYS_PER_YEAR;
use crate::domain::models::{DerivedMetrics, LeaseConfig};
use chrono::NaiveDate;

fn days_elapsed(start_date: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(start_date).num_days()
}

/// Mileage the lease permits by `today`, interpolated linearly from the
/// annual allowance. A start date after `today` counts as zero days.
pub fn projected_miles(
    start_date: NaiveDate,
    start_odometer: u64,
    annual_miles: u64,
    today: NaiveDate,
) -> f64 {
    let days = days_elapsed(start_date, today).max(0);
    let daily_rate = annual_miles as f64 / DAYS_PER_YEAR;
    start_odometer as f64 + daily_rate * days as f64
}

/// Not clamped: a reading below `start_odometer` yields a negative result.
pub fn actual_miles(start_odometer: u64, current_odometer: u64) -> f64 {
    current_odometer as f64 - start_odometer as f64
}

pub fn average_daily_miles(
    start_date: NaiveDate,
    start_odometer: u64,
    current_odometer: u64,
    today: NaiveDate,
) -> f64 {
    // Day zero divides by one.
    let days = days_elapsed(start_date, today).max(1);
    actual_miles(start_odometer, current_odometer) / days as f64
}

/// Positive means over projection.
pub fn miles_delta(projected_miles: f64, current_odometer: u64) -> f64 {
    current_odometer as f64 - projected_miles
}

pub fn derive(config: &LeaseConfig, current_odometer: u64, today: NaiveDate) -> DerivedMetrics {
    let projected = projected_miles(
        config.start_date,
        config.start_odometer,
        config.annual_miles,
        today,
    );
    DerivedMetrics {
        projected_miles: projected,
        actual_miles: actual_miles(config.start_odometer, current_odometer),
        avg_daily_miles: average_daily_miles(
            config.start_date,
            config.start_odometer,
            current_odometer,
            today,
        ),
        miles_delta: miles_delta(projected, current_odometer),
    }
}
