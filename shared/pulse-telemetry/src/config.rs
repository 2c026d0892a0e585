//! Telemetry Configuration

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub log_level: String,
    pub json_logs: bool,
}

impl TelemetryConfig {
    pub fn new(service_name: impl Into<String>, log_level: impl Into<String>, json_logs: bool) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: log_level.into(),
            json_logs,
        }
    }
}
