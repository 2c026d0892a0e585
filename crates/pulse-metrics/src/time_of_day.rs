//! Diurnal load shaping

use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::source::RandomSource;

/// Hours of the day (inclusive) treated as business hours
pub const BUSINESS_HOURS: RangeInclusive<u32> = 9..=18;

/// Expected call load for an hour of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadProfile {
    Peak,
    OffPeak,
}

impl LoadProfile {
    pub fn for_hour(hour: u32) -> Self {
        if BUSINESS_HOURS.contains(&hour) {
            Self::Peak
        } else {
            Self::OffPeak
        }
    }

    pub fn at<T: Timelike>(now: &T) -> Self {
        Self::for_hour(now.hour())
    }

    /// Inclusive bounds of the volume multiplier
    pub fn multiplier_bounds(self) -> (f64, f64) {
        match self {
            Self::Peak => (1.10, 1.30),
            Self::OffPeak => (0.50, 0.60),
        }
    }

    pub fn sample_multiplier<R: RandomSource + ?Sized>(self, rng: &mut R) -> f64 {
        let (low, high) = self.multiplier_bounds();
        rng.uniform_float(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PinnedSource;
    use chrono::NaiveTime;

    #[test]
    fn test_business_hour_edges() {
        assert_eq!(LoadProfile::for_hour(8), LoadProfile::OffPeak);
        assert_eq!(LoadProfile::for_hour(9), LoadProfile::Peak);
        assert_eq!(LoadProfile::for_hour(18), LoadProfile::Peak);
        assert_eq!(LoadProfile::for_hour(19), LoadProfile::OffPeak);
        assert_eq!(LoadProfile::for_hour(0), LoadProfile::OffPeak);
    }

    #[test]
    fn test_profile_from_time() {
        let late = NaiveTime::from_hms_opt(18, 59, 59).unwrap();
        assert_eq!(LoadProfile::at(&late), LoadProfile::Peak);
    }

    #[test]
    fn test_multiplier_bounds() {
        assert_eq!(LoadProfile::Peak.sample_multiplier(&mut PinnedSource::Low), 1.10);
        assert_eq!(LoadProfile::Peak.sample_multiplier(&mut PinnedSource::High), 1.30);
        assert_eq!(LoadProfile::OffPeak.sample_multiplier(&mut PinnedSource::Low), 0.50);
        assert_eq!(LoadProfile::OffPeak.sample_multiplier(&mut PinnedSource::High), 0.60);
    }
}
