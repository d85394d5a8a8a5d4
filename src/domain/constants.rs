pub const DEFAULT_ANNUAL_MILES: u64 = 12_000;
pub const DEFAULT_START_ODOMETER: u64 = 0;
pub const DAYS_PER_YEAR: f64 = 365.0;

pub const KEY_ANNUAL_MILES: &str = "annualMiles";
pub const KEY_START_ODOMETER: &str = "startOdometer";
pub const KEY_START_DATE: &str = "startDate";

pub const DATE_FORMAT: &str = "%Y-%m-%d";
