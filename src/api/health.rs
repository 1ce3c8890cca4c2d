use std::time::Instant;

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Liveness report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    /// Seconds since the server state was built.
    pub uptime: f64,
}

pub fn process_health(started: Instant) -> HealthResponse {
    HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        uptime: started.elapsed().as_secs_f64(),
    }
}

/// Axum handler for `GET /api/health`.
pub async fn health_handler(State(started): State<Instant>) -> Json<HealthResponse> {
    Json(process_health(started))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_report() {
        let report = process_health(Instant::now());
        assert_eq!(report.status, "healthy");
        assert!(report.uptime >= 0.0);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["timestamp"].is_string());
    }
}
