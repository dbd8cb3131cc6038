use std::env;
use std::path::PathBuf;

const DEFAULT_PROFILE_PATH: &str = "data/profile.json";
const DEFAULT_USERNAME: &str = "Collector_One";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,

    // Local profile store
    pub profile_path: PathBuf,
    pub default_username: String,

    // Bearer token for /api routes (auth disabled when unset)
    pub api_token: Option<String>,

    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .unwrap_or(10),

            profile_path: env::var("PROFILE_PATH")
                .unwrap_or_else(|_| DEFAULT_PROFILE_PATH.into())
                .into(),
            default_username: env::var("DEFAULT_USERNAME")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_USERNAME.into()),

            api_token: env::var("API_TOKEN").ok().filter(|s| !s.is_empty()),

            log_format: LogFormat::from_str(&env::var("LOG_FORMAT").unwrap_or_default()),
        })
    }

    /// Returns true if `/api` routes require a bearer token.
    pub fn auth_enabled(&self) -> bool {
        self.api_token.is_some()
    }
}
