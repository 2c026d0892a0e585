//! Snapshot refresh engine
//!
//! Owns the random source behind a lock, composes a snapshot per tick and
//! publishes it on a watch channel. Renderers and HTTP handlers only ever read
//! the latest published value.

use chrono::NaiveDateTime;
use parking_lot::Mutex;
use pulse_core::DashboardView;
use pulse_metrics::{DashboardSnapshot, MetricsSnapshot, PerformanceKpis, SnapshotGenerator};
use pulse_telemetry::{Counter, Gauge, Histogram, HistogramSummary};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Latest published snapshot, `None` until the first refresh
pub type SnapshotSlot = Option<Arc<DashboardSnapshot>>;

/// Source of the wall-clock time snapshots are stamped with
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// Local time, since the load profile follows the call center's business hours
pub fn system_clock() -> Clock {
    Arc::new(|| chrono::Local::now().naive_local())
}

/// What caused a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    Startup,
    Interval,
    Manual,
}

impl RefreshTrigger {
    fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Interval => "interval",
            Self::Manual => "manual",
        }
    }
}

/// Refresh counters and generation latency
pub struct RefreshMetrics {
    pub interval_refreshes: Counter,
    pub manual_refreshes: Counter,
    pub previews: Counter,
    pub active_calls: Gauge,
    pub queue_depth: Gauge,
    pub generation_us: Histogram,
}

impl RefreshMetrics {
    fn new() -> Self {
        Self {
            interval_refreshes: Counter::new("dashboard_interval_refreshes_total"),
            manual_refreshes: Counter::new("dashboard_manual_refreshes_total"),
            previews: Counter::new("dashboard_previews_total"),
            active_calls: Gauge::new("dashboard_active_calls"),
            queue_depth: Gauge::new("dashboard_calls_queue"),
            generation_us: Histogram::new("dashboard_generation_us"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshStats {
    pub interval_refreshes: u64,
    pub manual_refreshes: u64,
    pub previews: u64,
    pub active_calls: u64,
    pub calls_queue: u64,
    pub generation_us: HistogramSummary,
}

pub struct RefreshEngine {
    generator: Mutex<SnapshotGenerator>,
    view: DashboardView,
    clock: Clock,
    publisher: watch::Sender<SnapshotSlot>,
    metrics: RefreshMetrics,
}

impl RefreshEngine {
    pub fn new(generator: SnapshotGenerator, view: DashboardView, clock: Clock) -> Self {
        let (publisher, _) = watch::channel(None);
        Self {
            generator: Mutex::new(generator),
            view,
            clock,
            publisher,
            metrics: RefreshMetrics::new(),
        }
    }

    /// The view published snapshots are composed for
    pub fn view(&self) -> DashboardView {
        self.view
    }

    /// Compose a snapshot for the configured view and publish it
    pub fn refresh(&self, trigger: RefreshTrigger) -> Arc<DashboardSnapshot> {
        let snapshot = Arc::new(self.compose(&self.view));

        match trigger {
            RefreshTrigger::Interval => self.metrics.interval_refreshes.inc(),
            RefreshTrigger::Manual => self.metrics.manual_refreshes.inc(),
            RefreshTrigger::Startup => {}
        }

        let live = snapshot.live();
        self.metrics.active_calls.set(u64::from(live.active_calls));
        self.metrics.queue_depth.set(u64::from(live.calls_queue));

        info!(
            trigger = trigger.as_str(),
            mode = %self.view.mode,
            range = %self.view.range,
            active_calls = live.active_calls,
            calls_queue = live.calls_queue,
            queue_alert = live.queue_alert(),
            "Dashboard refreshed"
        );

        self.publisher.send_replace(Some(snapshot.clone()));
        snapshot
    }

    /// Compose a snapshot for an arbitrary view without publishing it
    pub fn preview(&self, view: &DashboardView) -> DashboardSnapshot {
        self.metrics.previews.inc();
        self.compose(view)
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    pub fn live(&self) -> MetricsSnapshot {
        let now = self.now();
        self.generator.lock().live(now)
    }

    pub fn kpis(&self) -> PerformanceKpis {
        self.generator.lock().kpis()
    }

    pub fn latest(&self) -> SnapshotSlot {
        self.publisher.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SnapshotSlot> {
        self.publisher.subscribe()
    }

    pub fn stats(&self) -> RefreshStats {
        RefreshStats {
            interval_refreshes: self.metrics.interval_refreshes.get(),
            manual_refreshes: self.metrics.manual_refreshes.get(),
            previews: self.metrics.previews.get(),
            active_calls: self.metrics.active_calls.get(),
            calls_queue: self.metrics.queue_depth.get(),
            generation_us: self.metrics.generation_us.summary(),
        }
    }

    /// Publish an initial snapshot, then one per tick when `auto_refresh` is on
    pub async fn run(self: Arc<Self>, interval: Duration, auto_refresh: bool) {
        self.refresh(RefreshTrigger::Startup);

        if !auto_refresh {
            info!("Auto-refresh disabled, snapshots refresh on demand only");
            return;
        }

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately and the startup snapshot covers it
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.refresh(RefreshTrigger::Interval);
        }
    }

    fn compose(&self, view: &DashboardView) -> DashboardSnapshot {
        let now = self.now();
        let started = Instant::now();
        let snapshot = self.generator.lock().compose(view, now);
        let elapsed = started.elapsed();

        self.metrics.generation_us.record(elapsed.as_secs_f64() * 1_000_000.0);
        debug!(elapsed_us = elapsed.as_micros() as u64, "Snapshot composed");

        snapshot
    }
}
