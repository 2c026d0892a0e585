//! HTTP handlers for the Executive Dashboard API

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use pulse_core::{DashboardError, DashboardView, DateRange, DisplayMode, HealthStatus, ReadinessStatus};
use pulse_metrics::{
    DashboardSnapshot, KpiComparison, KpiDeltas, KpiStatus, MetricsSnapshot, PerformanceKpis,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiResult;
use crate::refresh::{RefreshStats, RefreshTrigger};
use crate::AppState;

/// Stats response
#[derive(Serialize)]
pub struct StatsResponse {
    pub uptime_secs: u64,
    pub refresh_interval_secs: u64,
    pub auto_refresh: bool,
    pub view: DashboardView,
    #[serde(flatten)]
    pub refresh: RefreshStats,
}

/// Selector overrides for a preview; absent fields fall back to the configured view
#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    pub mode: Option<String>,
    pub range: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// KPIs together with everything derived from them
#[derive(Serialize)]
pub struct KpiResponse {
    pub kpis: PerformanceKpis,
    pub deltas: KpiDeltas,
    pub status: KpiStatus,
    pub comparison: KpiComparison,
}

// ============================================
// Health & Metrics Handlers
// ============================================

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.health())
}

pub async fn ready(State(state): State<AppState>) -> Json<ReadinessStatus> {
    Json(state.ready())
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        uptime_secs: state.uptime_secs(),
        refresh_interval_secs: state.config.refresh_interval_secs,
        auto_refresh: state.config.auto_refresh,
        view: state.engine.view(),
        refresh: state.engine.stats(),
    })
}

// ============================================
// Snapshot Handlers
// ============================================

pub async fn snapshot(State(state): State<AppState>) -> ApiResult<Json<Arc<DashboardSnapshot>>> {
    let latest = state
        .engine
        .latest()
        .ok_or_else(|| DashboardError::Unavailable("no snapshot published yet".to_string()))?;
    Ok(Json(latest))
}

pub async fn preview(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> ApiResult<Json<DashboardSnapshot>> {
    let today = state.engine.now().date();
    let view = resolve_view(state.engine.view(), &query, today)?;
    Ok(Json(state.engine.preview(&view)))
}

pub async fn refresh(State(state): State<AppState>) -> Json<Arc<DashboardSnapshot>> {
    Json(state.engine.refresh(RefreshTrigger::Manual))
}

pub async fn live(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.engine.live())
}

pub async fn kpis(State(state): State<AppState>) -> Json<KpiResponse> {
    let kpis = state.engine.kpis();

    Json(KpiResponse {
        deltas: kpis.deltas(),
        status: kpis.status(),
        comparison: kpis.comparison(),
        kpis,
    })
}

/// Apply query overrides to the configured view
///
/// A custom range with neither bound given opens on the week ending `today`.
fn resolve_view(base: DashboardView, query: &PreviewQuery, today: NaiveDate) -> pulse_core::Result<DashboardView> {
    let mode = match &query.mode {
        Some(raw) => raw.parse::<DisplayMode>()?,
        None => base.mode,
    };

    let range = match (&query.range, query.from, query.to) {
        (None, None, None) => base.range,
        (None, from, to) => DateRange::from_selector("custom_range", from, to)?,
        (Some(kind), None, None)
            if matches!(kind.trim().to_ascii_lowercase().as_str(), "custom_range" | "custom") =>
        {
            DateRange::default_custom(today)
        }
        (Some(kind), from, to) => DateRange::from_selector(kind, from, to)?,
    };

    Ok(DashboardView::new(mode, range))
}
