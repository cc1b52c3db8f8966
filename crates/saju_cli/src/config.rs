//! CLI configuration: an optional TOML file, then environment overrides.
//!
//! ```toml
//! utc_offset_minutes = 540
//! periods = 8
//!
//! [daewoon]
//! starting_age_rule = "direction_dependent"
//!
//! [daewoon.term_search]
//! max_scan_days = 40
//!
//! [[lunar_table]]
//! solar = "2000-03-17"
//! lunar = "2000-02-12"
//! leap = false
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use saju_rs::{DaewoonConfig, LunarCalendar, LunarDate, SearchError};
use serde::{Deserialize, Serialize};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "SAJU_CONFIG";

/// Environment variable overriding `utc_offset_minutes`.
pub const OFFSET_ENV: &str = "SAJU_UTC_OFFSET_MINUTES";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Local civil time offset from UT for the Sun model, in minutes.
    pub utc_offset_minutes: i32,
    /// Number of Daewoon periods listed by `daewoon`.
    pub periods: usize,
    pub daewoon: DaewoonConfig,
    /// Known solar ↔ lunar date pairs used for lunar input.
    pub lunar_table: Vec<LunarTableEntry>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: saju_rs::LowPrecisionSun::default().utc_offset_minutes,
            periods: 8,
            daewoon: DaewoonConfig::default(),
            lunar_table: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarTableEntry {
    pub solar: NaiveDate,
    /// Lunar year-month-day written as a date.
    pub lunar: NaiveDate,
    #[serde(default)]
    pub leap: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, message: String },
    Env { var: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Parse { path, message } => {
                write!(f, "invalid config {}: {message}", path.display())
            }
            Self::Env { var, value } => write!(f, "invalid {var}={value:?}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl CliConfig {
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Explicit path, else `SAJU_CONFIG`, else defaults; then env overrides.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let config = match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(&path)?
            }
            None => Self::default(),
        };
        config.with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(value) = std::env::var(OFFSET_ENV) {
            self.utc_offset_minutes = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Env { var: OFFSET_ENV, value })?;
        }
        Ok(self)
    }

    pub fn lunar_calendar(&self) -> TableCalendar {
        TableCalendar {
            entries: self
                .lunar_table
                .iter()
                .map(|e| {
                    let mut l = LunarDate::from_naive(e.lunar);
                    l.leap = e.leap;
                    (e.solar, l)
                })
                .collect(),
        }
    }
}

/// Lunar calendar backed by the configured date pairs.
#[derive(Debug, Clone, Default)]
pub struct TableCalendar {
    entries: Vec<(NaiveDate, LunarDate)>,
}

impl LunarCalendar for TableCalendar {
    fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, SearchError> {
        self.entries
            .iter()
            .find(|(s, _)| *s == date)
            .map(|(_, l)| *l)
            .ok_or_else(|| SearchError::CalendarConversion(format!("no lunar entry for {date}")))
    }

    fn lunar_to_solar(&self, date: LunarDate) -> Result<NaiveDate, SearchError> {
        self.entries
            .iter()
            .find(|(_, l)| *l == date)
            .map(|(s, _)| *s)
            .ok_or_else(|| {
                SearchError::CalendarConversion(format!(
                    "no solar entry for lunar {}-{:02}-{:02}{}",
                    date.year,
                    date.month,
                    date.day,
                    if date.leap { " (leap)" } else { "" }
                ))
            })
    }
}
