use std::time::Duration;

/// Longest identity cache lifetime honoured, one day.
pub const MAX_IDENTITY_CACHE_TTL_SECONDS: u64 = 86_400;
/// Upstream requests never wait longer than this.
pub const MAX_UPSTREAM_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, thiserror::Error)]
pub enum AppConfigError {
    #[error("missing required environment variable {0}")]
    MissingVariable(&'static str),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub debug: bool,
    pub invidious_instance: String,
    pub production_instance: String,
    pub allowed_origins: Vec<String>,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub identity_cache_ttl_seconds: u64,
    pub identity_cache_capacity: usize,
    pub upstream_timeout_seconds: u64,
    pub reconciliation_interval_seconds: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        Ok(Self {
            port: parsed_or("PORT", 8080),
            debug: std::env::var("SYNCIOUS_DEBUG")
                .map(|raw| matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            invidious_instance: required("SYNCIOUS_INVIDIOUS_INSTANCE")?
                .trim_end_matches('/')
                .to_string(),
            production_instance: required("SYNCIOUS_PRODUCTION_INSTANCE")?
                .trim_end_matches('/')
                .to_string(),
            allowed_origins: std::env::var("SYNCIOUS_ALLOWED_ORIGINS")
                .ok()
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(|s| s.trim_end_matches('/').to_string())
                        .collect()
                })
                .unwrap_or_default(),
            postgres_host: required("SYNCIOUS_POSTGRE_HOST")?,
            postgres_port: parsed_or("SYNCIOUS_POSTGRE_PORT", 5432),
            postgres_user: std::env::var("SYNCIOUS_POSTGRE_USER")
                .unwrap_or_else(|_| "kemal".to_string()),
            postgres_password: std::env::var("SYNCIOUS_POSTGRE_PASSWORD")
                .unwrap_or_else(|_| "kemal".to_string()),
            postgres_database: std::env::var("SYNCIOUS_POSTGRE_DATABASE")
                .unwrap_or_else(|_| "invidious".to_string()),
            identity_cache_ttl_seconds: parsed_or("SYNCIOUS_IDENTITY_CACHE_TTL_SECONDS", 60)
                .min(MAX_IDENTITY_CACHE_TTL_SECONDS),
            identity_cache_capacity: parsed_or("SYNCIOUS_IDENTITY_CACHE_CAPACITY", 10_000),
            upstream_timeout_seconds: parsed_or("SYNCIOUS_UPSTREAM_TIMEOUT_SECONDS", 10)
                .clamp(1, MAX_UPSTREAM_TIMEOUT_SECONDS),
            reconciliation_interval_seconds: parsed_or(
                "SYNCIOUS_RECONCILIATION_INTERVAL_SECONDS",
                3600,
            ),
        })
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }

    pub fn identity_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.identity_cache_ttl_seconds.min(MAX_IDENTITY_CACHE_TTL_SECONDS))
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds.clamp(1, MAX_UPSTREAM_TIMEOUT_SECONDS))
    }

    pub fn reconciliation_interval(&self) -> Duration {
        Duration::from_secs(self.reconciliation_interval_seconds.max(1))
    }

    /// Origins allowed by CORS: the public instance plus any extra configured ones.
    pub fn cors_origins(&self) -> Vec<String> {
        let mut origins = vec![self.production_instance.clone()];
        for origin in &self.allowed_origins {
            if !origins.contains(origin) {
                origins.push(origin.clone());
            }
        }
        origins
    }
}

fn required(name: &'static str) -> Result<String, AppConfigError> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(AppConfigError::MissingVariable(name))
}

fn parsed_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
