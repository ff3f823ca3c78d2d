/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
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

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Database connection settings: the credential trio (user, password,
/// database name) plus host and port.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub name: String,
    pub host: String,
    pub port: u16,
}

impl DatabaseConfig {
    /// Load database settings from environment variables with defaults.
    ///
    /// | Env Var       | Default     |
    /// |---------------|-------------|
    /// | `DB_USER`     | `microgram` |
    /// | `DB_PASSWORD` | `microgram` |
    /// | `DB_NAME`     | `microgram` |
    /// | `DB_HOST`     | `localhost` |
    /// | `DB_PORT`     | `5432`      |
    pub fn from_env() -> Self {
        let user = std::env::var("DB_USER").unwrap_or_else(|_| "microgram".into());
        let password = std::env::var("DB_PASSWORD").unwrap_or_else(|_| "microgram".into());
        let name = std::env::var("DB_NAME").unwrap_or_else(|_| "microgram".into());
        let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into());

        let port: u16 = std::env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".into())
            .parse()
            .expect("DB_PORT must be a valid u16");

        Self {
            user,
            password,
            name,
            host,
            port,
        }
    }

    /// Compose the connection URL from the individual settings.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

/// Resolve the database URL: `DATABASE_URL` wins when set, otherwise the
/// URL is composed from the individual `DB_*` variables.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DatabaseConfig::from_env().url())
}
