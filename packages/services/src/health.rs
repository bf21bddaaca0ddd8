// ABOUTME: Liveness reporting for the health endpoint
// ABOUTME: Answers a fixed status without touching storage

/// Reports service liveness for the health endpoint
#[derive(Debug, Default, Clone)]
pub struct HealthCheckService;

impl HealthCheckService {
    pub fn new() -> Self {
        Self
    }

    pub fn check_health(&self) -> &'static str {
        "OK"
    }
}
