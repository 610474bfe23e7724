use serde::Serialize;
use utoipa::ToSchema;

/// Overall health response
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// Server state (healthy/degraded/unhealthy)
    pub status: HealthState,
    /// Server version
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    /// Uptime in seconds
    #[schema(example = 3600)]
    pub uptime_secs: u64,
    /// Dependency checks
    pub checks: HealthChecks,
}

/// Server state
#[derive(Serialize, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    /// Every dependency is up
    Healthy,
    /// Some dependency is down
    Degraded,
    /// Nothing is up
    Unhealthy,
}

/// Dependency check results
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthChecks {
    /// Whether the AI generator was configured at startup
    pub ai_generator: CheckResult,
    /// Database reachability
    pub database: CheckResult,
}

/// Single check result
#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// Check passed
    #[schema(example = true)]
    pub status: bool,
    /// Round-trip latency (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 12)]
    pub latency_ms: Option<u64>,
    /// Error message on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    pub fn success(latency_ms: Option<u64>) -> Self {
        Self {
            status: true,
            latency_ms,
            error: None,
        }
    }

    pub fn failure(latency_ms: Option<u64>, error: String) -> Self {
        Self {
            status: false,
            latency_ms,
            error: Some(error),
        }
    }

    pub fn timeout(latency_ms: u64) -> Self {
        Self::failure(Some(latency_ms), "Timeout".to_string())
    }
}
