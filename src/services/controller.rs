//! Two-screen session flow around the derivation engine.
//!
//! `Configuration` is where lease terms are edited; `Tracking` is where an
//! odometer reading is taken and metrics are derived. The only transitions
//! are *save* (to `Tracking`, from either screen) and *edit* (to
//! `Configuration`).

use crate::domain::models::{DerivedMetrics, LeaseConfig, Screen, SessionFile};
use crate::services::{engine, storage};
use chrono::NaiveDate;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LeaseError {
    #[error("lease is not configured yet; run `milepace configure` first")]
    NotConfigured,
    #[error("{action} is not available on the {screen} screen")]
    WrongScreen {
        action: &'static str,
        screen: &'static str,
    },
    #[error("lease start date {start} is after today ({today})")]
    InvalidStartDate { start: NaiveDate, today: NaiveDate },
}

impl LeaseError {
    pub fn code(&self) -> &'static str {
        match self {
            LeaseError::NotConfigured => "NOT_CONFIGURED",
            LeaseError::WrongScreen { .. } => "WRONG_SCREEN",
            LeaseError::InvalidStartDate { .. } => "INVALID_START_DATE",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    screen: Screen,
    config: Option<LeaseConfig>,
    current_odometer: Option<u64>,
}

impl Session {
    /// Builds a session from what was persisted. Without a saved config the
    /// session always starts on the configuration screen.
    pub fn from_parts(config: Option<LeaseConfig>, file: SessionFile) -> Self {
        let screen = match (&config, file.screen) {
            (None, _) => Screen::Configuration,
            (Some(_), Some(s)) => s,
            (Some(_), None) => Screen::Tracking,
        };
        let current_odometer = match (&config, file.current_odometer) {
            (Some(c), Some(o)) => Some(o.max(c.start_odometer)),
            _ => None,
        };
        Self {
            screen,
            config,
            current_odometer,
        }
    }

    pub fn open(today: NaiveDate) -> anyhow::Result<Self> {
        let config = storage::load_config(today)?;
        let file = storage::load_session()?;
        let session = Self::from_parts(config, file);
        log::debug!("opened session on {:?} screen", session.screen);
        Ok(session)
    }

    pub fn persist(&self) -> anyhow::Result<()> {
        storage::save_session(&SessionFile {
            screen: Some(self.screen),
            current_odometer: self.current_odometer,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn config(&self) -> Option<&LeaseConfig> {
        self.config.as_ref()
    }

    /// Working odometer value; defaults to the starting odometer.
    pub fn current_odometer(&self) -> Option<u64> {
        let config = self.config.as_ref()?;
        Some(self.current_odometer.unwrap_or(config.start_odometer))
    }

    /// The configuration form, pre-filled with the saved terms or defaults.
    pub fn form(&self, today: NaiveDate) -> LeaseConfig {
        self.config.unwrap_or_else(|| LeaseConfig::defaults(today))
    }

    /// Replaces the whole config and moves to tracking. Does not write to
    /// disk; call [`Session::commit_config`] for that.
    pub fn save(&mut self, config: LeaseConfig, today: NaiveDate) -> Result<(), LeaseError> {
        if config.start_date > today {
            return Err(LeaseError::InvalidStartDate {
                start: config.start_date,
                today,
            });
        }
        self.current_odometer = self.current_odometer.map(|o| o.max(config.start_odometer));
        self.config = Some(config);
        self.screen = Screen::Tracking;
        Ok(())
    }

    /// Writes the config to the store, then the session.
    pub fn commit_config(&self) -> anyhow::Result<()> {
        let config = self.config.as_ref().ok_or(LeaseError::NotConfigured)?;
        storage::save_config(config)?;
        self.persist()
    }

    pub fn edit(&mut self) -> Result<LeaseConfig, LeaseError> {
        let config = *self.tracking_config("edit")?;
        self.screen = Screen::Configuration;
        Ok(config)
    }

    /// Clamps readings below the starting odometer. Returns whether it did.
    pub fn set_odometer(&mut self, reading: u64) -> Result<bool, LeaseError> {
        let start = self.tracking_config("track")?.start_odometer;
        let clamped = reading < start;
        if clamped {
            log::info!("odometer {} is below start {}, clamping", reading, start);
        }
        self.current_odometer = Some(reading.max(start));
        Ok(clamped)
    }

    pub fn metrics(&self, today: NaiveDate) -> Result<DerivedMetrics, LeaseError> {
        let config = self.tracking_config("track")?;
        let odometer = self.current_odometer.unwrap_or(config.start_odometer);
        Ok(engine::derive(config, odometer, today))
    }

    fn tracking_config(&self, action: &'static str) -> Result<&LeaseConfig, LeaseError> {
        let config = self.config.as_ref().ok_or(LeaseError::NotConfigured)?;
        if self.screen != Screen::Tracking {
            return Err(LeaseError::WrongScreen {
                action,
                screen: self.screen.as_str(),
            });
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
    }

    fn lease() -> LeaseConfig {
        LeaseConfig {
            annual_miles: 12_000,
            start_date: date("2024-01-01"),
            start_odometer: 10_000,
        }
    }

    #[test]
    fn first_run_starts_on_configuration_with_defaults() {
        let today = date("2024-05-05");
        let session = Session::from_parts(None, SessionFile::default());
        assert_eq!(session.screen(), Screen::Configuration);
        assert_eq!(session.form(today), LeaseConfig::defaults(today));
        assert_eq!(session.current_odometer(), None);
    }

    #[test]
    fn saved_config_starts_on_tracking() {
        let session = Session::from_parts(Some(lease()), SessionFile::default());
        assert_eq!(session.screen(), Screen::Tracking);
        assert_eq!(session.current_odometer(), Some(10_000));
    }

    #[test]
    fn persisted_screen_without_config_is_ignored() {
        let file = SessionFile {
            screen: Some(Screen::Tracking),
            current_odometer: Some(5),
        };
        let session = Session::from_parts(None, file);
        assert_eq!(session.screen(), Screen::Configuration);
    }

    #[test]
    fn save_moves_to_tracking_and_edit_prefills() {
        let today = date("2024-07-01");
        let mut session = Session::from_parts(None, SessionFile::default());
        session.save(lease(), today).expect("save");
        assert_eq!(session.screen(), Screen::Tracking);

        let form = session.edit().expect("edit");
        assert_eq!(form, lease());
        assert_eq!(session.screen(), Screen::Configuration);
        assert_eq!(session.config(), Some(&lease()));
    }

    #[test]
    fn tracking_actions_are_gated_by_screen() {
        let today = date("2024-07-01");
        let mut session = Session::from_parts(Some(lease()), SessionFile::default());
        session.edit().expect("edit");

        assert_eq!(session.metrics(today).unwrap_err().code(), "WRONG_SCREEN");
        assert_eq!(session.set_odometer(1).unwrap_err().code(), "WRONG_SCREEN");
        assert_eq!(session.edit().unwrap_err().code(), "WRONG_SCREEN");

        let mut fresh = Session::from_parts(None, SessionFile::default());
        assert_eq!(fresh.metrics(today).unwrap_err(), LeaseError::NotConfigured);
        assert_eq!(fresh.edit().unwrap_err(), LeaseError::NotConfigured);
    }

    #[test]
    fn save_from_tracking_replaces_terms_and_stays_on_tracking() {
        let today = date("2024-07-01");
        let mut session = Session::from_parts(Some(lease()), SessionFile::default());
        session.set_odometer(16_500).expect("set");

        let replacement = LeaseConfig {
            annual_miles: 10_000,
            start_date: date("2024-02-01"),
            start_odometer: 11_000,
        };
        session.save(replacement, today).expect("save");
        assert_eq!(session.screen(), Screen::Tracking);
        assert_eq!(session.config(), Some(&replacement));
        assert_eq!(session.current_odometer(), Some(16_500));
        assert!(session.metrics(today).is_ok());
    }

    #[test]
    fn future_start_date_is_rejected() {
        let today = date("2024-01-01");
        let mut session = Session::from_parts(None, SessionFile::default());
        let mut config = lease();
        config.start_date = date("2024-01-02");
        let err = session.save(config, today).unwrap_err();
        assert_eq!(err.code(), "INVALID_START_DATE");
        assert_eq!(session.screen(), Screen::Configuration);
        assert!(session.config().is_none());
    }

    #[test]
    fn odometer_below_start_is_clamped() {
        let mut session = Session::from_parts(Some(lease()), SessionFile::default());
        assert!(session.set_odometer(9_000).expect("set"));
        assert_eq!(session.current_odometer(), Some(10_000));
        assert!(!session.set_odometer(16_500).expect("set"));
        assert_eq!(session.current_odometer(), Some(16_500));
    }

    #[test]
    fn raising_start_odometer_reclamps_working_value() {
        let today = date("2024-07-01");
        let file = SessionFile {
            screen: Some(Screen::Tracking),
            current_odometer: Some(12_000),
        };
        let mut session = Session::from_parts(Some(lease()), file);
        let mut raised = lease();
        raised.start_odometer = 13_000;
        session.save(raised, today).expect("save");
        assert_eq!(session.current_odometer(), Some(13_000));
    }

    #[test]
    fn metrics_use_the_working_odometer() {
        let mut session = Session::from_parts(Some(lease()), SessionFile::default());
        session.set_odometer(16_500).expect("set");
        let m = session.metrics(date("2024-07-01")).expect("metrics");
        assert_eq!(m.actual_miles, 6_500.0);
        assert!(m.miles_delta > 516.0 && m.miles_delta < 517.0);
    }
}
