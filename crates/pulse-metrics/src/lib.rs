//! # Pulse Metrics
//!
//! Mock telemetry for the voice agent executive dashboard. Every generator is
//! a pure function of a reference time and an explicitly passed random source,
//! so a seeded source reproduces a dashboard exactly.
//!
//! - **Raw signals** - live counters and categorical distributions, modulated
//!   by time of day ([`live`], [`distribution`])
//! - **KPI derivation** - containment, FCR, AHT, day-over-day deltas and cost
//!   savings ([`kpi`])
//! - **Temporal aggregates** - hourly volume and daily trends ([`temporal`])
//! - **Snapshot composition** - one bundle per refresh tick, shaped by the
//!   display mode and date range selectors ([`snapshot`])
//!
//! ## Example
//! ```rust
//! use chrono::NaiveDate;
//! use pulse_core::DashboardView;
//! use pulse_metrics::SnapshotGenerator;
//!
//! let now = NaiveDate::from_ymd_opt(2026, 10, 18)
//!     .unwrap()
//!     .and_hms_opt(14, 0, 0)
//!     .unwrap();
//! let mut generator = SnapshotGenerator::seeded(Some(7));
//! let snapshot = generator.compose(&DashboardView::default(), now);
//! assert_eq!(snapshot.generated_at, now);
//! ```

pub mod distribution;
pub mod kpi;
pub mod live;
pub mod model;
pub mod snapshot;
pub mod source;
pub mod temporal;
pub mod time_of_day;

pub use distribution::{generate_language_distribution, generate_resolution_breakdown, generate_top_intents};
pub use kpi::{
    ai_resolved, aht_gauge_score, cost_savings, escalated, generate_kpis, percentage_change,
    TargetStatus,
};
pub use live::{generate_live_deltas, generate_live_metrics};
pub use model::*;
pub use snapshot::{compose_snapshot, DashboardSnapshot, Panels, SnapshotGenerator};
pub use source::{PinnedSource, RandomSource};
pub use temporal::{generate_daily_trend, generate_hourly_volume, VolumeMode};
pub use time_of_day::LoadProfile;

/// Nominal daily call volume the live counters and language mix scale from
pub const BASELINE_DAILY_CALLS: u32 = 4500;

/// Value of one AI-resolved call in currency units
pub const COST_PER_RESOLVED_CALL: u64 = 50;

/// Queue depth above which the queue tile is flagged
pub const QUEUE_ALERT_THRESHOLD: u32 = 20;
