//! Configuration management for jalalify
//!
//! This module handles loading, parsing, and validation of configuration
//! files. The defaults describe Tehran (+03:30); deployments targeting a
//! different fixed-offset region override the timezone section.

use crate::constants::{
    DATETIME_INPUT_FORMAT, DATE_INPUT_FORMAT, TEHRAN_OFFSET_HOURS, TEHRAN_OFFSET_MINUTES, TIME_INPUT_FORMAT,
};
use crate::timezone::{FixedZone, TEHRAN};
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub timezone: TimezoneConfig,
    pub display: DisplayConfig,
}

/// Fixed-offset timezone configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimezoneConfig {
    /// Hour component of the UTC offset, sign shared with the minutes
    pub offset_hours: i32,
    /// Minute component of the UTC offset
    pub offset_minutes: i32,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Format accepted for date input
    pub date_format: String,
    /// Format accepted for time input
    pub time_format: String,
    /// Format accepted for combined datetime input
    pub datetime_format: String,
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        Self {
            offset_hours: TEHRAN_OFFSET_HOURS,
            offset_minutes: TEHRAN_OFFSET_MINUTES,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: DATE_INPUT_FORMAT.to_string(),
            time_format: TIME_INPUT_FORMAT.to_string(),
            datetime_format: DATETIME_INPUT_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Process-wide configuration instance.
    ///
    /// Constructed once on first use and never mutated afterwards; callers
    /// needing a different setup should build a [`Config`] explicitly and
    /// pass it around instead.
    pub fn shared() -> &'static Config {
        static SHARED: Lazy<Config> = Lazy::new(|| {
            Config::load().unwrap_or_else(|err| {
                log::warn!("falling back to default configuration: {err:#}");
                Config::default()
            })
        });
        &SHARED
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("jalalify.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("jalalify").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate the offset components
        if self.timezone.offset_hours.abs() > 23 {
            anyhow::bail!("offset_hours must be within ±23, got {}", self.timezone.offset_hours);
        }
        if self.timezone.offset_minutes.abs() > 59 {
            anyhow::bail!(
                "offset_minutes must be within ±59, got {}",
                self.timezone.offset_minutes
            );
        }
        if self.timezone.offset_hours.signum() * self.timezone.offset_minutes.signum() < 0 {
            anyhow::bail!(
                "offset_hours and offset_minutes must share a sign, got {}:{}",
                self.timezone.offset_hours,
                self.timezone.offset_minutes
            );
        }

        // Validate date/time formats
        if let Err(e) = chrono::NaiveDate::parse_from_str("2025/01/01", &self.display.date_format) {
            anyhow::bail!("Invalid date_format '{}': {}", self.display.date_format, e);
        }
        if let Err(e) = chrono::NaiveTime::parse_from_str("12:00:00", &self.display.time_format) {
            anyhow::bail!("Invalid time_format '{}': {}", self.display.time_format, e);
        }
        if let Err(e) = chrono::NaiveDateTime::parse_from_str("2025/01/01 12:00:00", &self.display.datetime_format)
        {
            anyhow::bail!("Invalid datetime_format '{}': {}", self.display.datetime_format, e);
        }

        Ok(())
    }

    /// The fixed-offset zone described by this configuration.
    ///
    /// Validated configurations always convert; an unvalidated out-of-range
    /// offset falls back to Tehran.
    pub fn fixed_zone(&self) -> FixedZone {
        if self.timezone.offset_hours == TEHRAN_OFFSET_HOURS && self.timezone.offset_minutes == TEHRAN_OFFSET_MINUTES
        {
            return TEHRAN;
        }
        FixedZone::east(self.timezone.offset_hours, self.timezone.offset_minutes).unwrap_or(TEHRAN)
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("jalalify"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
