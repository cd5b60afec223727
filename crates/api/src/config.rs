use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL recovery links point at.
    pub frontend_url: String,
    /// Startup connection attempts before giving up (default: `5`).
    pub db_connect_attempts: u32,
    /// Fixed pause between connection attempts (default: `5`).
    pub db_connect_backoff_secs: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                  |
    /// |---------------------------|--------------------------|
    /// | `HOST`                    | `0.0.0.0`                |
    /// | `PORT`                    | `3000`                   |
    /// | `CORS_ORIGINS`            | `http://localhost:3000`  |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                     |
    /// | `FRONTEND_URL`            | `http://localhost:3000`  |
    /// | `DB_CONNECT_ATTEMPTS`     | `5`                      |
    /// | `DB_CONNECT_BACKOFF_SECS` | `5`                      |
    ///
    /// JWT settings are read by [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let db_connect_attempts: u32 = std::env::var("DB_CONNECT_ATTEMPTS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_CONNECT_ATTEMPTS must be a valid u32");

        let db_connect_backoff_secs: u64 = std::env::var("DB_CONNECT_BACKOFF_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_CONNECT_BACKOFF_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            frontend_url,
            db_connect_attempts,
            db_connect_backoff_secs,
            jwt,
        }
    }
}
