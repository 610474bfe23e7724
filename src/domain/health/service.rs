use std::time::{Duration, Instant};

use tokio::time::timeout;

use super::dto::{CheckResult, HealthChecks, HealthState, HealthStatus};
use crate::state::AppState;

/// Server start time
static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// Database check timeout (5s)
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Records the server start time. Call once from `main`.
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

pub fn get_uptime_secs() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

pub async fn check_health(state: &AppState) -> HealthStatus {
    let ai_generator = match &state.ai {
        Ok(_) => CheckResult::success(None),
        Err(e) => CheckResult::failure(None, e.to_string()),
    };
    let database = check_database(state).await;

    HealthStatus {
        status: determine_health_state(&ai_generator, &database),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: get_uptime_secs(),
        checks: HealthChecks {
            ai_generator,
            database,
        },
    }
}

fn determine_health_state(ai: &CheckResult, database: &CheckResult) -> HealthState {
    match (ai.status, database.status) {
        (true, true) => HealthState::Healthy,
        (false, false) => HealthState::Unhealthy,
        _ => HealthState::Degraded,
    }
}

/// Acquires a scoped connection and pings it.
async fn check_database(state: &AppState) -> CheckResult {
    let start = Instant::now();

    let probe = async {
        let store = state.store.acquire().await?;
        store.ping().await
    };

    match timeout(HEALTH_CHECK_TIMEOUT, probe).await {
        Ok(Ok(())) => CheckResult::success(Some(start.elapsed().as_millis() as u64)),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Database health check failed");
            CheckResult::failure(Some(start.elapsed().as_millis() as u64), e.to_string())
        }
        Err(_) => {
            tracing::warn!("Database health check timed out");
            CheckResult::timeout(HEALTH_CHECK_TIMEOUT.as_millis() as u64)
        }
    }
}
