//! Snapshot composition
//!
//! A refresh tick produces one [`DashboardSnapshot`]. The display mode decides
//! which panels exist; the date range decides how long the daily trend is and
//! whether single-day detail (hourly curve, resolution donut) is attached.
//! Every trend ends on the day of `now`, whatever the range.

use chrono::NaiveDateTime;
use pulse_core::{DashboardView, DisplayMode};
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use crate::distribution::{generate_language_distribution, generate_resolution_breakdown, generate_top_intents};
use crate::kpi::{aht_gauge_score, generate_kpis, AHT_GAUGE_TARGET};
use crate::live::{generate_live_deltas, generate_live_metrics};
use crate::model::{
    DailyTrendPoint, HourlyVolume, IntentFrequency, KpiComparison, KpiDeltas, KpiStatus,
    LanguageDistribution, LiveDeltas, MetricsSnapshot, PerformanceKpis, ResolutionBreakdown,
};
use crate::source::{seeded_rng, RandomSource};
use crate::temporal::{generate_daily_trend, generate_hourly_volume, VolumeMode};

/// Everything a renderer needs for one refresh cycle
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub generated_at: NaiveDateTime,
    pub view: DashboardView,
    pub panels: Panels,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum Panels {
    Tv(TvPanels),
    Desktop(DesktopPanels),
}

/// Large-tile wall display: three live tiles over three KPI tiles
#[derive(Debug, Clone, Serialize)]
pub struct TvPanels {
    pub live: MetricsSnapshot,
    pub queue_alert: bool,
    pub kpis: PerformanceKpis,
    pub status: KpiStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct DesktopPanels {
    pub live_operations: LiveOperationsPanel,
    pub performance: PerformancePanel,
}

#[derive(Debug, Clone, Serialize)]
pub struct LiveOperationsPanel {
    pub live: MetricsSnapshot,
    pub deltas: LiveDeltas,
    pub languages: LanguageDistribution,
    pub intents: IntentFrequency,
    pub hourly: HourlyVolume,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformancePanel {
    pub kpis: PerformanceKpis,
    pub deltas: KpiDeltas,
    pub status: KpiStatus,
    pub comparison: KpiComparison,
    pub aht_gauge_score: f64,
    pub aht_gauge_target: f64,
    pub trend: Vec<DailyTrendPoint>,
    /// Present only when the range covers a single day
    pub single_day: Option<SingleDayDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SingleDayDetail {
    pub hourly: HourlyVolume,
    pub resolution: ResolutionBreakdown,
}

impl DashboardSnapshot {
    pub fn live(&self) -> &MetricsSnapshot {
        match &self.panels {
            Panels::Tv(tv) => &tv.live,
            Panels::Desktop(desktop) => &desktop.live_operations.live,
        }
    }

    pub fn kpis(&self) -> &PerformanceKpis {
        match &self.panels {
            Panels::Tv(tv) => &tv.kpis,
            Panels::Desktop(desktop) => &desktop.performance.kpis,
        }
    }
}

/// Run the generators the view asks for, in display order
pub fn compose_snapshot<R: RandomSource + ?Sized>(
    view: &DashboardView,
    now: NaiveDateTime,
    rng: &mut R,
) -> DashboardSnapshot {
    let panels = match view.mode {
        DisplayMode::Tv => {
            let live = generate_live_metrics(&now, rng);
            let kpis = generate_kpis(rng);
            Panels::Tv(TvPanels {
                queue_alert: live.queue_alert(),
                status: kpis.status(),
                live,
                kpis,
            })
        }
        DisplayMode::Desktop => {
            let live_operations = LiveOperationsPanel {
                live: generate_live_metrics(&now, rng),
                deltas: generate_live_deltas(rng),
                languages: generate_language_distribution(rng),
                intents: generate_top_intents(rng),
                hourly: generate_hourly_volume(&now, VolumeMode::Today, rng),
            };

            let kpis = generate_kpis(rng);
            let trend = generate_daily_trend(view.range.trend_days(), now.date(), rng);
            let single_day = (trend.len() <= 1).then(|| SingleDayDetail {
                hourly: generate_hourly_volume(&now, VolumeMode::Today, rng),
                resolution: generate_resolution_breakdown(rng),
            });

            Panels::Desktop(DesktopPanels {
                live_operations,
                performance: PerformancePanel {
                    deltas: kpis.deltas(),
                    status: kpis.status(),
                    comparison: kpis.comparison(),
                    aht_gauge_score: aht_gauge_score(kpis.avg_handle_time),
                    aht_gauge_target: AHT_GAUGE_TARGET,
                    kpis,
                    trend,
                    single_day,
                },
            })
        }
    };

    debug!(mode = %view.mode, range = %view.range, "Composed dashboard snapshot");

    DashboardSnapshot {
        generated_at: now,
        view: *view,
        panels,
    }
}

/// Owns a random source and hands out snapshots from it
///
/// The source is the only state carried between calls, so one generator must
/// not be driven from several threads without a lock around it.
pub struct SnapshotGenerator<R = StdRng> {
    rng: R,
}

impl SnapshotGenerator<StdRng> {
    /// Seeded for reproducible output, or from OS entropy when `seed` is `None`
    pub fn seeded(seed: Option<u64>) -> Self {
        Self::new(seeded_rng(seed))
    }
}

impl<R: RandomSource> SnapshotGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn compose(&mut self, view: &DashboardView, now: NaiveDateTime) -> DashboardSnapshot {
        compose_snapshot(view, now, &mut self.rng)
    }

    pub fn live(&mut self, now: NaiveDateTime) -> MetricsSnapshot {
        generate_live_metrics(&now, &mut self.rng)
    }

    pub fn kpis(&mut self) -> PerformanceKpis {
        generate_kpis(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PinnedSource;
    use chrono::NaiveDate;
    use pulse_core::DateRange;

    fn afternoon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_tv_snapshot() {
        let view = DashboardView::new(DisplayMode::Tv, DateRange::Today);
        let snapshot = compose_snapshot(&view, afternoon(), &mut PinnedSource::High);

        let Panels::Tv(tv) = &snapshot.panels else {
            panic!("expected tv panels");
        };
        assert_eq!(tv.live.active_calls, 234);
        assert!(tv.queue_alert);
        assert_eq!(snapshot.kpis().avg_handle_time, 7.5);
    }

    #[test]
    fn test_desktop_single_day_has_detail() {
        let view = DashboardView::new(DisplayMode::Desktop, DateRange::Today);
        let snapshot = compose_snapshot(&view, afternoon(), &mut PinnedSource::Low);

        let Panels::Desktop(desktop) = &snapshot.panels else {
            panic!("expected desktop panels");
        };
        assert_eq!(desktop.performance.trend.len(), 1);
        let detail = desktop.performance.single_day.as_ref().unwrap();
        assert_eq!(detail.resolution.entries.len(), 4);
        assert_eq!(detail.hourly.points[15].calls, 0);
        assert_eq!(snapshot.live().active_calls, 88);
    }

    #[test]
    fn test_desktop_week_has_no_single_day_detail() {
        let view = DashboardView::new(DisplayMode::Desktop, DateRange::Last7Days);
        let mut generator = SnapshotGenerator::seeded(Some(1));
        let snapshot = generator.compose(&view, afternoon());

        let Panels::Desktop(desktop) = &snapshot.panels else {
            panic!("expected desktop panels");
        };
        assert_eq!(desktop.performance.trend.len(), 7);
        assert!(desktop.performance.single_day.is_none());
    }

    #[test]
    fn test_custom_range_sets_length_and_ends_today() {
        let from = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2026, 9, 10).unwrap();
        let view = DashboardView::new(DisplayMode::Desktop, DateRange::custom(from, to).unwrap());
        let snapshot = compose_snapshot(&view, afternoon(), &mut PinnedSource::Low);

        let Panels::Desktop(desktop) = &snapshot.panels else {
            panic!("expected desktop panels");
        };
        let trend = &desktop.performance.trend;
        assert_eq!(trend.len(), 10);
        assert_eq!(trend[0].date, NaiveDate::from_ymd_opt(2026, 10, 9).unwrap());
        assert_eq!(trend[9].date, afternoon().date());
        assert!(desktop.performance.single_day.is_none());
    }

    #[test]
    fn test_seeded_generators_agree() {
        let view = DashboardView::default();
        let a = SnapshotGenerator::seeded(Some(77)).compose(&view, afternoon());
        let b = SnapshotGenerator::seeded(Some(77)).compose(&view, afternoon());
        assert_eq!(a.live(), b.live());
        assert_eq!(a.kpis(), b.kpis());
    }

    #[test]
    fn test_successive_snapshots_differ() {
        let mut generator = SnapshotGenerator::seeded(Some(77));
        let first = generator.live(afternoon());
        let second = generator.live(afternoon());
        assert_ne!(first, second);
    }
}
