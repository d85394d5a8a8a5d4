use crate::domain::constants::{
    DATE_FORMAT, DEFAULT_ANNUAL_MILES, DEFAULT_START_ODOMETER, KEY_ANNUAL_MILES, KEY_START_DATE,
    KEY_START_ODOMETER,
};
use crate::domain::models::{LeaseConfig, SessionFile};
use anyhow::Context;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Flat string key/value pairs, the persisted form of a lease config.
pub type KvPairs = BTreeMap<String, String>;

fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".config/milepace"))
}

pub fn lease_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("lease.toml"))
}

fn session_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("session.json"))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Missing or malformed input yields `today`; this never fails.
pub fn parse_date_or_default(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    match raw.map(str::trim) {
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap_or_else(|_| {
            log::debug!("stored {} {:?} is malformed, using {}", KEY_START_DATE, s, today);
            today
        }),
        None => today,
    }
}

fn parse_u64_or_default(pairs: &KvPairs, key: &str, default: u64) -> u64 {
    match pairs.get(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::debug!("stored {} {:?} is malformed, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

pub fn encode_config(config: &LeaseConfig) -> KvPairs {
    let mut pairs = KvPairs::new();
    pairs.insert(KEY_ANNUAL_MILES.to_string(), config.annual_miles.to_string());
    pairs.insert(
        KEY_START_ODOMETER.to_string(),
        config.start_odometer.to_string(),
    );
    pairs.insert(KEY_START_DATE.to_string(), format_date(config.start_date));
    pairs
}

pub fn decode_config(pairs: &KvPairs, today: NaiveDate) -> LeaseConfig {
    LeaseConfig {
        annual_miles: parse_u64_or_default(pairs, KEY_ANNUAL_MILES, DEFAULT_ANNUAL_MILES),
        start_date: parse_date_or_default(pairs.get(KEY_START_DATE).map(String::as_str), today),
        start_odometer: parse_u64_or_default(pairs, KEY_START_ODOMETER, DEFAULT_START_ODOMETER),
    }
}

/// Reads the flat table leniently: hand-edited integers are accepted as
/// their decimal string, anything unreadable is dropped so defaults apply.
fn parse_pairs(raw: &str) -> KvPairs {
    let table: toml::Table = match raw.parse() {
        Ok(t) => t,
        Err(e) => {
            log::warn!("lease file is not valid TOML, falling back to defaults: {}", e);
            return KvPairs::new();
        }
    };
    table
        .into_iter()
        .filter_map(|(k, v)| match v {
            toml::Value::String(s) => Some((k, s)),
            toml::Value::Integer(i) => Some((k, i.to_string())),
            _ => None,
        })
        .collect()
}

/// Returns `None` when no config was ever saved.
pub fn load_config(today: NaiveDate) -> anyhow::Result<Option<LeaseConfig>> {
    let p = lease_path()?;
    if !p.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(&p)
        .with_context(|| format!("could not read lease file {}", p.display()))?;
    Ok(Some(decode_config(&parse_pairs(&raw), today)))
}

pub fn save_config(config: &LeaseConfig) -> anyhow::Result<()> {
    let raw = toml::to_string(&encode_config(config))?;
    write_replace(&lease_path()?, &raw)
}

pub fn load_session() -> anyhow::Result<SessionFile> {
    let p = session_path()?;
    if !p.exists() {
        return Ok(SessionFile::default());
    }
    let raw = std::fs::read_to_string(&p)
        .with_context(|| format!("could not read session file {}", p.display()))?;
    match serde_json::from_str(&raw) {
        Ok(s) => Ok(s),
        Err(e) => {
            log::warn!("ignoring unreadable session file {}: {}", p.display(), e);
            Ok(SessionFile::default())
        }
    }
}

pub fn save_session(s: &SessionFile) -> anyhow::Result<()> {
    write_replace(&session_path()?, &serde_json::to_string_pretty(s)?)
}

/// Write to a sibling temp file, then rename over the target.
fn write_replace(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, contents)
        .with_context(|| format!("could not write {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("could not replace {}", path.display()))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
