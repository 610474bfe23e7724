use crate::config::ConfigError;
use crate::domain::ai::AiClient;
use crate::domain::term::SharedStoreConnector;

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup and never reconfigured; `Err` means every term request answers 503.
    pub ai: Result<AiClient, ConfigError>,
    /// Opens one store handle per request.
    pub store: SharedStoreConnector,
}
