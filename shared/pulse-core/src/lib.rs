//! Pulse Core - Shared dashboard types and service infrastructure
//!
//! This crate provides:
//! - Display selectors (display mode, date range) as closed enums
//! - Error handling utilities
//! - Environment-driven configuration
//! - Standard service trait and runtime bootstrap

pub mod config;
pub mod domain;
pub mod error;
pub mod service;

pub use config::DashboardConfig;
pub use domain::*;
pub use error::{DashboardError, Result};
pub use service::{DashboardService, DependencyStatus, HealthStatus, ReadinessStatus, ServiceRuntime};
