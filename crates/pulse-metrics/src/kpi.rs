//! KPI sampling and derivation
//!
//! Today's figures and yesterday's baselines are sampled independently from
//! the same ranges. Everything the dashboard shows beyond the raw KPIs
//! (deltas, resolved/escalated splits, savings, target status) is derived here
//! so a renderer only formats.

use serde::{Deserialize, Serialize};

use crate::model::{ComparisonRow, KpiComparison, KpiDeltas, KpiStatus, KpiTargets, PerformanceKpis};
use crate::source::RandomSource;
use crate::COST_PER_RESOLVED_CALL;

/// AHT (minutes) that maps to a gauge score of zero
const AHT_GAUGE_CEILING: f64 = 12.0;

/// Threshold drawn on the AHT gauge dial
pub const AHT_GAUGE_TARGET: f64 = 66.7;

/// Fraction of target that still counts as "near"
const NEAR_TARGET_RATIO: f64 = 0.9;

/// Where a KPI sits relative to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
    Met,
    Near,
    Missed,
}

impl TargetStatus {
    /// Higher-is-better rate against its target
    pub fn for_rate(value: f64, target: f64) -> Self {
        if value >= target {
            Self::Met
        } else if value >= target * NEAR_TARGET_RATIO {
            Self::Near
        } else {
            Self::Missed
        }
    }

    /// Lower-is-better handle time against its ceiling
    pub fn for_handle_time(minutes: f64, target: f64) -> Self {
        if minutes <= target {
            Self::Met
        } else {
            Self::Missed
        }
    }
}

pub fn generate_kpis<R: RandomSource + ?Sized>(rng: &mut R) -> PerformanceKpis {
    PerformanceKpis {
        containment_rate: rng.uniform_float(68.0, 78.0),
        fcr_rate: rng.uniform_float(65.0, 75.0),
        avg_handle_time: rng.uniform_float(4.5, 7.5),
        calls_today: rng.uniform_int(4000, 5500) as u32,
        calls_yesterday: rng.uniform_int(4000, 5500) as u32,
        containment_yesterday: rng.uniform_float(68.0, 78.0),
        fcr_yesterday: rng.uniform_float(65.0, 75.0),
        aht_yesterday: rng.uniform_float(4.5, 7.5),
        targets: KpiTargets::STANDARD,
    }
}

/// `(today - yesterday) / yesterday * 100`, or 0 when there is no baseline
pub fn percentage_change(today: f64, yesterday: f64) -> f64 {
    if yesterday == 0.0 {
        return 0.0;
    }
    (today - yesterday) / yesterday * 100.0
}

/// Calls closed without a human, floored
pub fn ai_resolved(calls: u32, containment_rate: f64) -> u32 {
    let resolved = (f64::from(calls) * containment_rate / 100.0).floor();
    (resolved.max(0.0) as u32).min(calls)
}

pub fn escalated(calls: u32, containment_rate: f64) -> u32 {
    calls - ai_resolved(calls, containment_rate)
}

pub fn cost_savings(ai_resolved: u32) -> u64 {
    u64::from(ai_resolved) * COST_PER_RESOLVED_CALL
}

/// Inverted AHT gauge: 0 minutes scores 100, 12 minutes or more scores 0
pub fn aht_gauge_score(avg_handle_time: f64) -> f64 {
    (100.0 - avg_handle_time / AHT_GAUGE_CEILING * 100.0).max(0.0)
}

impl PerformanceKpis {
    pub fn deltas(&self) -> KpiDeltas {
        KpiDeltas {
            containment_rate: self.containment_rate - self.containment_yesterday,
            fcr_rate: self.fcr_rate - self.fcr_yesterday,
            avg_handle_time: self.aht_yesterday - self.avg_handle_time,
        }
    }

    pub fn status(&self) -> KpiStatus {
        KpiStatus {
            containment_rate: TargetStatus::for_rate(self.containment_rate, self.targets.containment_rate),
            fcr_rate: TargetStatus::for_rate(self.fcr_rate, self.targets.fcr_rate),
            avg_handle_time: TargetStatus::for_handle_time(
                self.avg_handle_time,
                self.targets.avg_handle_time,
            ),
        }
    }

    pub fn ai_resolved_today(&self) -> u32 {
        ai_resolved(self.calls_today, self.containment_rate)
    }

    pub fn ai_resolved_yesterday(&self) -> u32 {
        ai_resolved(self.calls_yesterday, self.containment_yesterday)
    }

    /// The four today-vs-yesterday tiles
    pub fn comparison(&self) -> KpiComparison {
        let resolved_today = self.ai_resolved_today();
        let resolved_yesterday = self.ai_resolved_yesterday();

        KpiComparison {
            total_calls: row(u64::from(self.calls_today), u64::from(self.calls_yesterday), true),
            ai_resolved: row(u64::from(resolved_today), u64::from(resolved_yesterday), true),
            escalated: row(
                u64::from(escalated(self.calls_today, self.containment_rate)),
                u64::from(escalated(self.calls_yesterday, self.containment_yesterday)),
                false,
            ),
            cost_savings: row(cost_savings(resolved_today), cost_savings(resolved_yesterday), true),
        }
    }
}

fn row(today: u64, yesterday: u64, higher_is_better: bool) -> ComparisonRow {
    ComparisonRow {
        today,
        yesterday,
        change_pct: percentage_change(today as f64, yesterday as f64),
        higher_is_better,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{seeded_rng, PinnedSource};

    fn kpis(calls_today: u32, calls_yesterday: u32, containment: f64, containment_yesterday: f64) -> PerformanceKpis {
        PerformanceKpis {
            containment_rate: containment,
            fcr_rate: 71.0,
            avg_handle_time: 6.0,
            calls_today,
            calls_yesterday,
            containment_yesterday,
            fcr_yesterday: 69.5,
            aht_yesterday: 6.5,
            targets: KpiTargets::STANDARD,
        }
    }

    #[test]
    fn test_percentage_change_zero_baseline() {
        assert_eq!(percentage_change(120.0, 0.0), 0.0);
        assert_eq!(percentage_change(0.0, 0.0), 0.0);
        assert_eq!(percentage_change(-5.0, 0.0), 0.0);
        assert!((percentage_change(110.0, 100.0) - 10.0).abs() < 1e-9);
        assert!((percentage_change(90.0, 100.0) + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolution_split_and_savings() {
        assert_eq!(ai_resolved(5000, 72.0), 3600);
        assert_eq!(escalated(5000, 72.0), 1400);
        assert_eq!(cost_savings(3600), 180_000);
        assert_eq!(ai_resolved(4999, 68.3), 3414);
    }

    #[test]
    fn test_kpi_ranges() {
        let mut rng = seeded_rng(Some(3));
        for _ in 0..1000 {
            let k = generate_kpis(&mut rng);
            assert!((4.5..=7.5).contains(&k.avg_handle_time));
            assert!((68.0..=78.0).contains(&k.containment_rate));
            assert!((65.0..=75.0).contains(&k.fcr_rate));
            assert!((4.5..=7.5).contains(&k.aht_yesterday));
            assert!((4000..=5500).contains(&k.calls_yesterday));
        }
    }

    #[test]
    fn test_deltas_invert_handle_time() {
        let k = kpis(5000, 4800, 72.0, 70.0);
        let deltas = k.deltas();
        assert!((deltas.containment_rate - 2.0).abs() < 1e-9);
        assert!((deltas.fcr_rate - 1.5).abs() < 1e-9);
        // AHT dropped from 6.5 to 6.0: an improvement
        assert!((deltas.avg_handle_time - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_comparison() {
        let k = kpis(5000, 4000, 72.0, 70.0);
        let cmp = k.comparison();

        assert_eq!(cmp.total_calls.today, 5000);
        assert!((cmp.total_calls.change_pct - 25.0).abs() < 1e-9);

        assert_eq!(cmp.ai_resolved.today, 3600);
        assert_eq!(cmp.ai_resolved.yesterday, 2800);
        assert_eq!(cmp.escalated.today, 1400);
        assert_eq!(cmp.escalated.yesterday, 1200);
        assert!(!cmp.escalated.higher_is_better);
        assert!(!cmp.escalated.improved());

        assert_eq!(cmp.cost_savings.today, 180_000);
        assert_eq!(cmp.cost_savings.yesterday, 140_000);
    }

    #[test]
    fn test_comparison_with_empty_yesterday() {
        let k = kpis(5000, 0, 72.0, 70.0);
        let cmp = k.comparison();
        assert_eq!(cmp.total_calls.change_pct, 0.0);
        assert_eq!(cmp.ai_resolved.change_pct, 0.0);
        assert_eq!(cmp.escalated.change_pct, 0.0);
        assert_eq!(cmp.cost_savings.change_pct, 0.0);
    }

    #[test]
    fn test_target_status() {
        assert_eq!(TargetStatus::for_rate(70.0, 70.0), TargetStatus::Met);
        assert_eq!(TargetStatus::for_rate(63.0, 70.0), TargetStatus::Near);
        assert_eq!(TargetStatus::for_rate(62.9, 70.0), TargetStatus::Missed);
        assert_eq!(TargetStatus::for_handle_time(8.0, 8.0), TargetStatus::Met);
        assert_eq!(TargetStatus::for_handle_time(8.1, 8.0), TargetStatus::Missed);

        let status = generate_kpis(&mut PinnedSource::Low).status();
        assert_eq!(status.containment_rate, TargetStatus::Near);
        assert_eq!(status.fcr_rate, TargetStatus::Near);
        assert_eq!(status.avg_handle_time, TargetStatus::Met);
    }

    #[test]
    fn test_aht_gauge_score() {
        assert!((aht_gauge_score(6.0) - 50.0).abs() < 1e-9);
        assert!((aht_gauge_score(8.0) - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(aht_gauge_score(15.0), 0.0);
    }
}
