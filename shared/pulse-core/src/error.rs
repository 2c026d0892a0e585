//! Error types for Pulse services

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Unavailable(_) => 503,
            _ => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Unavailable(_) => "UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(DashboardError::Validation("bad".into()).status_code(), 400);
        assert_eq!(DashboardError::Unavailable("warming up".into()).status_code(), 503);
        assert_eq!(DashboardError::Config("x".into()).status_code(), 500);
    }

    #[test]
    fn test_io_error_maps_to_network() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: DashboardError = io.into();
        assert_eq!(err.error_code(), "NETWORK_ERROR");
        assert!(err.to_string().contains("port taken"));
    }
}
