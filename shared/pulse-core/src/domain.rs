//! Dashboard selectors shared by the generator and the host service

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::{DashboardError, Result};

/// Default auto-refresh cadence in seconds
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

/// Longest custom range, in days, the performance trend accepts
pub const MAX_CUSTOM_RANGE_DAYS: u32 = 366;

/// How the dashboard is laid out by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Tabbed operator view with charts
    Desktop,
    /// Large tiles for wall-mounted screens
    Tv,
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::Desktop
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Desktop => write!(f, "desktop"),
            Self::Tv => write!(f, "tv"),
        }
    }
}

impl FromStr for DisplayMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "tv" | "tv_display" => Ok(Self::Tv),
            other => Err(DashboardError::Validation(format!(
                "unknown display mode '{}', expected desktop or tv",
                other
            ))),
        }
    }
}

/// Reporting period selected for the performance panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateRange {
    Today,
    #[serde(rename = "last_7_days")]
    Last7Days,
    #[serde(rename = "custom_range")]
    Custom { from: NaiveDate, to: NaiveDate },
}

impl Default for DateRange {
    fn default() -> Self {
        Self::Today
    }
}

impl DateRange {
    /// Build a custom range, rejecting inverted bounds and spans over
    /// [`MAX_CUSTOM_RANGE_DAYS`]
    pub fn custom(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(DashboardError::Validation(format!(
                "custom range starts after it ends ({} > {})",
                from, to
            )));
        }
        let span = inclusive_span(from, to);
        if span > i64::from(MAX_CUSTOM_RANGE_DAYS) {
            return Err(DashboardError::Validation(format!(
                "custom range covers {} days, at most {} allowed",
                span, MAX_CUSTOM_RANGE_DAYS
            )));
        }
        Ok(Self::Custom { from, to })
    }

    /// Resolve a selector name plus optional bounds into a range
    pub fn from_selector(kind: &str, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "last_7_days" | "last7days" | "week" => Ok(Self::Last7Days),
            "custom_range" | "custom" => match (from, to) {
                (Some(from), Some(to)) => Self::custom(from, to),
                _ => Err(DashboardError::Validation(
                    "custom_range requires both from and to dates".to_string(),
                )),
            },
            other => Err(DashboardError::Validation(format!(
                "unknown date range '{}', expected today, last_7_days or custom_range",
                other
            ))),
        }
    }

    /// Number of days covered by the daily trend, which always ends today
    ///
    /// A custom range contributes only its length. Ranges that bypassed
    /// [`DateRange::custom`] (e.g. deserialized) are clamped to the cap.
    pub fn trend_days(&self) -> NonZeroU32 {
        let days = match self {
            Self::Today => 1,
            Self::Last7Days => 7,
            Self::Custom { from, to } => {
                let span = inclusive_span(*from, *to).clamp(1, i64::from(MAX_CUSTOM_RANGE_DAYS));
                u32::try_from(span).unwrap_or(1)
            }
        };
        NonZeroU32::new(days).unwrap_or(NonZeroU32::MIN)
    }

    /// Default bounds offered when a custom range is first selected
    pub fn default_custom(today: NaiveDate) -> Self {
        Self::Custom {
            from: today - Duration::days(7),
            to: today,
        }
    }

    pub fn is_single_day(&self) -> bool {
        self.trend_days().get() == 1
    }
}

fn inclusive_span(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days() + 1
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => write!(f, "today"),
            Self::Last7Days => write!(f, "last_7_days"),
            Self::Custom { from, to } => write!(f, "custom_range({}..={})", from, to),
        }
    }
}

/// The pair of selectors that decides which generators run on a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardView {
    pub mode: DisplayMode,
    pub range: DateRange,
}

impl DashboardView {
    pub fn new(mode: DisplayMode, range: DateRange) -> Self {
        Self { mode, range }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display_mode_parsing() {
        assert_eq!("desktop".parse::<DisplayMode>().unwrap(), DisplayMode::Desktop);
        assert_eq!("TV".parse::<DisplayMode>().unwrap(), DisplayMode::Tv);
        assert_eq!("tv_display".parse::<DisplayMode>().unwrap(), DisplayMode::Tv);
        assert!("kiosk".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn test_trend_days() {
        assert_eq!(DateRange::Today.trend_days().get(), 1);
        assert_eq!(DateRange::Last7Days.trend_days().get(), 7);

        let range = DateRange::custom(date(2026, 10, 1), date(2026, 10, 18)).unwrap();
        assert_eq!(range.trend_days().get(), 18);
    }

    #[test]
    fn test_custom_range_span_cap() {
        let full_year = DateRange::custom(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        assert_eq!(full_year.trend_days().get(), MAX_CUSTOM_RANGE_DAYS);

        let too_long = DateRange::custom(date(2024, 1, 1), date(2025, 1, 1));
        assert!(matches!(too_long, Err(DashboardError::Validation(_))));

        let extreme = DateRange::custom(NaiveDate::MIN, NaiveDate::MAX);
        assert!(matches!(extreme, Err(DashboardError::Validation(_))));
    }

    #[test]
    fn test_unchecked_custom_range_is_clamped() {
        let json = serde_json::json!({"kind": "custom_range", "from": "0001-01-01", "to": "9999-12-31"});
        let range: DateRange = serde_json::from_value(json).unwrap();
        assert_eq!(range.trend_days().get(), MAX_CUSTOM_RANGE_DAYS);
    }

    #[test]
    fn test_custom_range_rejects_inverted_bounds() {
        let result = DateRange::custom(date(2026, 10, 18), date(2026, 10, 1));
        assert!(matches!(result, Err(DashboardError::Validation(_))));
    }

    #[test]
    fn test_from_selector() {
        assert_eq!(DateRange::from_selector("today", None, None).unwrap(), DateRange::Today);
        assert_eq!(
            DateRange::from_selector("last_7_days", None, None).unwrap(),
            DateRange::Last7Days
        );
        assert!(DateRange::from_selector("custom_range", Some(date(2026, 1, 1)), None).is_err());
        assert!(DateRange::from_selector("yesterday", None, None).is_err());
    }

    #[test]
    fn test_date_range_serialization() {
        let json = serde_json::to_value(DateRange::Last7Days).unwrap();
        assert_eq!(json["kind"], "last_7_days");

        let custom = DateRange::custom(date(2026, 10, 11), date(2026, 10, 18)).unwrap();
        let json = serde_json::to_value(custom).unwrap();
        assert_eq!(json["kind"], "custom_range");
        assert_eq!(json["from"], "2026-10-11");
    }

    #[test]
    fn test_default_custom_spans_eight_days() {
        let range = DateRange::default_custom(date(2026, 10, 18));
        assert_eq!(range.trend_days().get(), 8);
    }
}
