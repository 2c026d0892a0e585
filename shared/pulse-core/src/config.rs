//! Configuration management for dashboard services

use crate::domain::{DashboardView, DateRange, DisplayMode, DEFAULT_REFRESH_INTERVAL_SECS};
use crate::error::{DashboardError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    pub service_name: String,
    pub http_bind: String,
    pub refresh_interval_secs: u64,
    pub auto_refresh: bool,
    pub default_view: DashboardView,
    pub rng_seed: Option<u64>,
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            service_name: "executive-dashboard".to_string(),
            http_bind: "0.0.0.0:8080".to_string(),
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            auto_refresh: true,
            default_view: DashboardView::default(),
            rng_seed: None,
            log_level: "info".to_string(),
            json_logs: true,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let refresh_interval_secs: u64 = lookup("REFRESH_INTERVAL_SECS")
            .unwrap_or_else(|| DEFAULT_REFRESH_INTERVAL_SECS.to_string())
            .parse()
            .map_err(|e| DashboardError::Config(format!("Invalid REFRESH_INTERVAL_SECS: {}", e)))?;
        if refresh_interval_secs == 0 {
            return Err(DashboardError::Config(
                "REFRESH_INTERVAL_SECS must be greater than zero".to_string(),
            ));
        }

        let mode: DisplayMode = lookup("DISPLAY_MODE")
            .unwrap_or_else(|| "desktop".to_string())
            .parse()
            .map_err(|e: DashboardError| DashboardError::Config(format!("Invalid DISPLAY_MODE: {}", e)))?;

        let from = parse_date(&lookup, "CUSTOM_RANGE_FROM")?;
        let to = parse_date(&lookup, "CUSTOM_RANGE_TO")?;
        let range = DateRange::from_selector(
            &lookup("DATE_RANGE").unwrap_or_else(|| "today".to_string()),
            from,
            to,
        )
        .map_err(|e| DashboardError::Config(format!("Invalid DATE_RANGE: {}", e)))?;

        let rng_seed = match lookup("RNG_SEED") {
            Some(raw) => Some(
                raw.parse()
                    .map_err(|e| DashboardError::Config(format!("Invalid RNG_SEED: {}", e)))?,
            ),
            None => None,
        };

        Ok(Self {
            service_name: lookup("SERVICE_NAME").unwrap_or_else(|| "executive-dashboard".to_string()),
            http_bind: lookup("HTTP_BIND").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            refresh_interval_secs,
            auto_refresh: parse_flag(&lookup, "AUTO_REFRESH", true)?,
            default_view: DashboardView::new(mode, range),
            rng_seed,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            json_logs: parse_flag(&lookup, "JSON_LOGS", true)?,
        })
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(DashboardError::Config(format!(
            "Invalid {}: '{}', expected true, false, 1 or 0",
            key, raw
        ))),
    }
}

fn parse_date<F>(lookup: &F, key: &str) -> Result<Option<NaiveDate>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|e| DashboardError::Config(format!("Invalid {}: {}", key, e))),
        None => Ok(None),
    }
}
