//! Hourly volume and daily trend aggregates

use chrono::{Days, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::model::{DailyTrendPoint, HourlyPoint, HourlyVolume};
use crate::source::RandomSource;
use crate::time_of_day::LoadProfile;

/// Which day the hourly curve describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeMode {
    /// The current day; hours after `now` have no data yet
    Today,
    /// A completed reference day
    FullDay,
}

impl VolumeMode {
    fn base(self, profile: LoadProfile) -> i64 {
        match (self, profile) {
            (Self::Today, LoadProfile::Peak) => 150,
            (Self::Today, LoadProfile::OffPeak) => 50,
            (Self::FullDay, LoadProfile::Peak) => 350,
            (Self::FullDay, LoadProfile::OffPeak) => 100,
        }
    }

    fn noise(self) -> (i64, i64) {
        match self {
            Self::Today => (-30, 50),
            Self::FullDay => (-50, 80),
        }
    }
}

/// Calls per hour for the 24 hours of a day
pub fn generate_hourly_volume<T, R>(now: &T, mode: VolumeMode, rng: &mut R) -> HourlyVolume
where
    T: Timelike,
    R: RandomSource + ?Sized,
{
    let current_hour = now.hour();
    let (noise_low, noise_high) = mode.noise();

    let points = (0..24u32)
        .map(|hour| {
            let elapsed = mode == VolumeMode::FullDay || hour <= current_hour;
            let calls = if elapsed {
                let base = mode.base(LoadProfile::for_hour(hour));
                (base + rng.uniform_int(noise_low, noise_high)).max(0) as u32
            } else {
                0
            };
            HourlyPoint {
                hour,
                label: format!("{:02}:00", hour),
                calls,
            }
        })
        .collect();

    HourlyVolume { points }
}

/// One trend entry per day for `days` days ending at `today`, oldest first
///
/// Days that fall before the earliest representable date are skipped.
pub fn generate_daily_trend<R: RandomSource + ?Sized>(
    days: NonZeroU32,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<DailyTrendPoint> {
    let mut trend = Vec::with_capacity(days.get() as usize);

    for offset in (0..days.get()).rev() {
        let Some(date) = today.checked_sub_days(Days::new(u64::from(offset))) else {
            continue;
        };

        let total_calls = rng.uniform_int(5500, 7500) as u32;
        let containment = rng.uniform_float(0.68, 0.78);
        let ai_resolved = ((f64::from(total_calls) * containment).floor() as u32).min(total_calls);
        let escalated = total_calls - ai_resolved;

        trend.push(DailyTrendPoint {
            date,
            total_calls,
            ai_resolved,
            escalated,
            containment_rate: f64::from(ai_resolved) / f64::from(total_calls) * 100.0,
        });
    }

    trend
}
