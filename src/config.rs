//! Service configuration
//!
//! All configuration comes from environment variables (a local `.env` is
//! loaded in development):
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | DATABASE_URL | sqlite://staff-admin.db | SQLite database location |
//! | HTTP_PORT | 8080 | HTTP listen port |
//! | CORS_ALLOWED_ORIGINS | (empty) | comma-separated origin allow-list; empty allows any origin |
//! | ENVIRONMENT | development | development / staging / production |

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// HTTP listen port
    pub http_port: u16,
    /// CORS origin allow-list; empty means any origin
    pub cors_allowed_origins: Vec<String>,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://staff-admin.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}
