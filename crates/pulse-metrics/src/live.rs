//! Raw live operations signals

use chrono::Timelike;

use crate::model::{LiveDeltas, MetricsSnapshot};
use crate::source::RandomSource;
use crate::time_of_day::LoadProfile;
use crate::BASELINE_DAILY_CALLS;

/// Sample the live counters for the hour of `now`
///
/// Active calls and calls today follow the diurnal multiplier; queue depth,
/// capacity, wait time and hourly throughput do not.
pub fn generate_live_metrics<T, R>(now: &T, rng: &mut R) -> MetricsSnapshot
where
    T: Timelike,
    R: RandomSource + ?Sized,
{
    let load_profile = LoadProfile::at(now);
    let multiplier = load_profile.sample_multiplier(rng);

    let base_active = rng.uniform_int(80, 180) as f64;
    let base_today = (i64::from(BASELINE_DAILY_CALLS) + rng.uniform_int(-200, 200)) as f64;

    MetricsSnapshot {
        active_calls: scale(base_active, multiplier),
        calls_today: scale(base_today, multiplier),
        calls_queue: rng.uniform_int(5, 35) as u32,
        capacity_utilization: rng.uniform_float(45.0, 85.0),
        avg_wait_time_secs: rng.uniform_float(8.0, 45.0),
        calls_per_hour: rng.uniform_int(200, 450) as u32,
        load_profile,
    }
}

/// Sample the "vs previous reading" indicators for the live tiles
pub fn generate_live_deltas<R: RandomSource + ?Sized>(rng: &mut R) -> LiveDeltas {
    LiveDeltas {
        active_calls: rng.uniform_int(-15, 25) as i32,
        calls_today: rng.uniform_int(-200, 300) as i32,
        calls_queue: rng.uniform_int(-8, 12) as i32,
    }
}

fn scale(base: f64, multiplier: f64) -> u32 {
    (base * multiplier).floor().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{seeded_rng, PinnedSource};
    use crate::time_of_day::LoadProfile;
    use chrono::NaiveTime;

    fn at(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn test_peak_hour_minimum_draws() {
        let snapshot = generate_live_metrics(&at(14), &mut PinnedSource::Low);
        assert_eq!(snapshot.active_calls, 88);
        assert_eq!(snapshot.calls_today, 4730); // floor(4300 * 1.10)
        assert_eq!(snapshot.calls_queue, 5);
        assert_eq!(snapshot.capacity_utilization, 45.0);
        assert_eq!(snapshot.load_profile, LoadProfile::Peak);
    }

    #[test]
    fn test_peak_hour_maximum_draws() {
        let snapshot = generate_live_metrics(&at(14), &mut PinnedSource::High);
        assert_eq!(snapshot.active_calls, 234);
        assert_eq!(snapshot.calls_today, 6110); // floor(4700 * 1.30)
        assert_eq!(snapshot.calls_queue, 35);
        assert_eq!(snapshot.calls_per_hour, 450);
    }

    #[test]
    fn test_off_peak_scaling() {
        let low = generate_live_metrics(&at(3), &mut PinnedSource::Low);
        assert_eq!(low.active_calls, 40);
        assert_eq!(low.load_profile, LoadProfile::OffPeak);

        let high = generate_live_metrics(&at(22), &mut PinnedSource::High);
        assert_eq!(high.active_calls, 108);
        // queue is not load-proportional
        assert_eq!(high.calls_queue, 35);
    }

    #[test]
    fn test_seeded_ranges() {
        let mut rng = seeded_rng(Some(2024));
        for hour in 0..24 {
            let snapshot = generate_live_metrics(&at(hour), &mut rng);
            assert!((5..=35).contains(&snapshot.calls_queue));
            assert!((45.0..=85.0).contains(&snapshot.capacity_utilization));
            assert!((8.0..=45.0).contains(&snapshot.avg_wait_time_secs));
            assert!(snapshot.active_calls >= 40 && snapshot.active_calls <= 234);
        }
    }

    #[test]
    fn test_queue_alert() {
        let calm = generate_live_metrics(&at(10), &mut PinnedSource::Low);
        assert!(!calm.queue_alert());
        let busy = generate_live_metrics(&at(10), &mut PinnedSource::High);
        assert!(busy.queue_alert());
    }

    #[test]
    fn test_live_delta_bounds() {
        let low = generate_live_deltas(&mut PinnedSource::Low);
        assert_eq!(low, LiveDeltas { active_calls: -15, calls_today: -200, calls_queue: -8 });
        let high = generate_live_deltas(&mut PinnedSource::High);
        assert_eq!(high, LiveDeltas { active_calls: 25, calls_today: 300, calls_queue: 12 });
    }
}
