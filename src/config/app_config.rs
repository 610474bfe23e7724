use std::env;

const DEFAULT_SERVER_PORT: &str = "8000";
const DEFAULT_DB_PORT: &str = "3306";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Application settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,

    // AI Service
    pub openai_api_key: Option<String>,
    pub openai_api_base: Option<String>,
    pub openai_model: String,

    // Database
    pub database: DatabaseSettings,
}

/// MySQL connection settings
///
/// `DATABASE_URL` wins over the individual `DB_*` parts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: Option<String>,
    pub user: Option<String>,
    pub password: String,
}

impl DatabaseSettings {
    /// Builds the connection URL, or fails if neither a URL nor the required parts are set.
    pub fn connection_url(&self) -> Result<String, ConfigError> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }

        let name = self
            .name
            .as_deref()
            .ok_or(ConfigError::MissingDatabase("DB_DATABASE"))?;
        let user = self
            .user
            .as_deref()
            .ok_or(ConfigError::MissingDatabase("DB_USER"))?;

        Ok(format!(
            "mysql://{}:{}@{}:{}/{}",
            user, self.password, self.host, self.port, name
        ))
    }
}

impl AppConfig {
    /// Loads settings from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort("SERVER_PORT"))?;

        let openai_api_key = non_blank("OPENAI_API_KEY");
        if openai_api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY is not set; term generation will answer 503.");
        }
        let openai_api_base = non_blank("OPENAI_API_BASE");
        let openai_model =
            non_blank("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());

        let database = DatabaseSettings {
            url: non_blank("DATABASE_URL"),
            host: non_blank("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: env::var("DB_PORT")
                .unwrap_or_else(|_| DEFAULT_DB_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort("DB_PORT"))?,
            name: non_blank("DB_DATABASE"),
            user: non_blank("DB_USER"),
            password: env::var("DB_PASSWORD").unwrap_or_default(),
        };

        Ok(Self {
            server_port,
            openai_api_key,
            openai_api_base,
            openai_model,
            database,
        })
    }
}

fn non_blank(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number in {0}")]
    InvalidPort(&'static str),
    #[error("OPENAI_API_KEY environment variable is not set")]
    MissingApiKey,
    #[error("{0} environment variable is required when DATABASE_URL is not set")]
    MissingDatabase(&'static str),
}
