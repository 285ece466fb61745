use std::time::Duration;

/// Endpoints and client limits for the real-backend variant.
pub struct BackendConfig {
    pub predict_path: &'static str,
    pub health_path: &'static str,
    pub request_timeout: Duration,
}

pub const BACKEND: BackendConfig = BackendConfig {
    predict_path: "/predict",
    health_path: "/health",
    request_timeout: Duration::from_secs(30),
};
