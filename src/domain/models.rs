use crate::domain::constants::{DEFAULT_ANNUAL_MILES, DEFAULT_START_ODOMETER};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Lease terms. Always replaced wholesale, never patched field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseConfig {
    pub annual_miles: u64,
    pub start_date: NaiveDate,
    pub start_odometer: u64,
}

impl LeaseConfig {
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            annual_miles: DEFAULT_ANNUAL_MILES,
            start_date: today,
            start_odometer: DEFAULT_START_ODOMETER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Configuration,
    Tracking,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Configuration => "configuration",
            Screen::Tracking => "tracking",
        }
    }
}

/// On-disk session record. Both fields are optional so a missing or
/// older file still loads; the controller resolves the gaps.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(default)]
    pub screen: Option<Screen>,
    #[serde(default)]
    pub current_odometer: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub projected_miles: f64,
    pub actual_miles: f64,
    pub avg_daily_miles: f64,
    pub miles_delta: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceStatus {
    Over,
    Under,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsDisplay {
    pub projected_miles: String,
    pub actual_miles: String,
    pub avg_daily_miles: String,
    pub miles_delta: String,
    pub status: PaceStatus,
    pub verdict: String,
}

#[derive(Serialize)]
pub struct TrackReport {
    pub today: NaiveDate,
    pub config: LeaseConfig,
    pub current_odometer: u64,
    pub clamped: bool,
    pub metrics: DerivedMetrics,
    pub display: MetricsDisplay,
}

#[derive(Serialize)]
pub struct StatusReport {
    pub screen: Screen,
    pub configured: bool,
    pub config: Option<LeaseConfig>,
    pub current_odometer: Option<u64>,
}

#[derive(Serialize)]
pub struct FormReport {
    pub screen: Screen,
    pub form: LeaseConfig,
    pub max_start_date: NaiveDate,
}

#[derive(Serialize)]
pub struct SavedReport {
    pub screen: Screen,
    pub config: LeaseConfig,
    pub current_odometer: u64,
}
