//! Executive Dashboard
//!
//! Host service for the voice agent executive dashboard:
//! - Auto-refresh loop publishing one snapshot per tick
//! - Manual refresh and on-demand previews for any display mode / date range
//! - JSON API for renderers (TV wall display and desktop)

mod error;
mod handlers;
mod refresh;
mod routes;

use parking_lot::Mutex;
use pulse_core::{
    DashboardConfig, DashboardService, DependencyStatus, HealthStatus, ReadinessStatus, Result,
    ServiceRuntime,
};
use pulse_metrics::SnapshotGenerator;
use pulse_telemetry::TelemetryConfig;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use refresh::{Clock, RefreshEngine};

const SERVICE_ID: &str = "executive-dashboard";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DashboardConfig>,
    pub engine: Arc<RefreshEngine>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: DashboardConfig, clock: Clock) -> Self {
        let generator = SnapshotGenerator::seeded(config.rng_seed);
        let engine = Arc::new(RefreshEngine::new(generator, config.default_view, clock));

        Self {
            config: Arc::new(config),
            engine,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            healthy: true,
            service_id: SERVICE_ID.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.uptime_secs(),
        }
    }

    /// Ready once the first snapshot is published
    pub fn ready(&self) -> ReadinessStatus {
        let published = self.engine.latest().is_some();
        ReadinessStatus {
            ready: published,
            dependencies: vec![DependencyStatus {
                name: "snapshot".to_string(),
                available: published,
                latency_ms: None,
            }],
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::from_env()?;

    pulse_telemetry::init_tracing(&TelemetryConfig::new(
        &config.service_name,
        &config.log_level,
        config.json_logs,
    ))?;

    info!("Starting Executive Dashboard");

    let service = Arc::new(DashboardHost::new(config));
    ServiceRuntime::run(service).await?;

    Ok(())
}

pub struct DashboardHost {
    state: AppState,
    refresh_task: Mutex<Option<JoinHandle<()>>>,
}

impl DashboardHost {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(config, refresh::system_clock()),
            refresh_task: Mutex::new(None),
        }
    }

    fn spawn_refresh_loop(&self) {
        let engine = self.state.engine.clone();
        let interval = self.state.config.refresh_interval();
        let auto_refresh = self.state.config.auto_refresh;

        let handle = tokio::spawn(engine.run(interval, auto_refresh));
        if let Some(previous) = self.refresh_task.lock().replace(handle) {
            previous.abort();
        }
    }
}

#[async_trait::async_trait]
impl DashboardService for DashboardHost {
    fn service_id(&self) -> &'static str {
        SERVICE_ID
    }

    async fn health(&self) -> HealthStatus {
        self.state.health()
    }

    async fn ready(&self) -> ReadinessStatus {
        self.state.ready()
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down Executive Dashboard");
        if let Some(task) = self.refresh_task.lock().take() {
            task.abort();
        }
        Ok(())
    }

    async fn start(&self) -> Result<()> {
        let config = &self.state.config;
        info!(
            http = %config.http_bind,
            refresh_interval_secs = config.refresh_interval_secs,
            auto_refresh = config.auto_refresh,
            mode = %config.default_view.mode,
            range = %config.default_view.range,
            "Starting Executive Dashboard"
        );

        self.spawn_refresh_loop();

        let app = routes::create_router(self.state.clone());
        let listener = TcpListener::bind(&config.http_bind).await?;
        info!("Executive Dashboard listening on {}", config.http_bind);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
