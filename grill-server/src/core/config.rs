use std::path::PathBuf;
use std::str::FromStr;

use chrono_tz::Tz;
use shared::{AppError, AppResult};

/// Where documents are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// redb file at `DATA_DIR/grill.redb`
    File,
    /// redb in-memory backend, lost on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(AppError::config(format!(
                "Unknown STORE_BACKEND '{other}', expected 'file' or 'memory'"
            ))),
        }
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_HOST | 0.0.0.0 | bind address |
/// | HTTP_PORT | 5000 | bind port |
/// | DATA_DIR | ./data | directory of the store file |
/// | STORE_BACKEND | file | `file` or `memory` |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | default log level |
/// | LOG_DIR | (unset) | rolling log directory |
/// | BUSINESS_TIMEZONE | UTC | IANA zone for timestamps and estimates |
/// | STRICT_ORDER_VALIDATION | false | reject empty items and unknown delivery modes |
/// | VERIFY_DELIVERY_ORDER | false | delivery registration requires an existing order |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 BUSINESS_TIMEZONE=Africa/Lagos cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    pub data_dir: PathBuf,
    pub store_backend: StoreBackend,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub timezone: Tz,
    pub strict_order_validation: bool,
    pub verify_delivery_order: bool,
    pub request_timeout_ms: u64,
    /// Variables that were set but unparsable and replaced by their default
    pub fallbacks: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_host: "0.0.0.0".into(),
            http_port: 5000,
            data_dir: PathBuf::from("./data"),
            store_backend: StoreBackend::File,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            timezone: chrono_tz::UTC,
            strict_order_validation: false,
            verify_delivery_order: false,
            request_timeout_ms: 30000,
            fallbacks: Vec::new(),
        }
    }
}

/// Parse `key`, falling back to `default` when unset or unparsable
///
/// Unparsable keys are recorded in `fallbacks`; they are logged once the
/// logger, which itself depends on the configuration, is installed.
fn env_or<T: FromStr>(key: &str, default: T, fallbacks: &mut Vec<String>) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            fallbacks.push(format!("{key}={raw}"));
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or malformed values use defaults, except an unknown
    /// `BUSINESS_TIMEZONE` or `STORE_BACKEND`, which are rejected.
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        let mut fallbacks = Vec::new();

        let timezone = match std::env::var("BUSINESS_TIMEZONE") {
            Ok(name) => name.trim().parse::<Tz>().map_err(|_| {
                AppError::config(format!("Unknown BUSINESS_TIMEZONE '{name}'"))
            })?,
            Err(_) => defaults.timezone,
        };
        let store_backend = match std::env::var("STORE_BACKEND") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.store_backend,
        };

        Ok(Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or(defaults.http_host),
            http_port: env_or("HTTP_PORT", defaults.http_port, &mut fallbacks),
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            store_backend,
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            timezone,
            strict_order_validation: env_or(
                "STRICT_ORDER_VALIDATION",
                defaults.strict_order_validation,
                &mut fallbacks,
            ),
            verify_delivery_order: env_or(
                "VERIFY_DELIVERY_ORDER",
                defaults.verify_delivery_order,
                &mut fallbacks,
            ),
            request_timeout_ms: env_or(
                "REQUEST_TIMEOUT_MS",
                defaults.request_timeout_ms,
                &mut fallbacks,
            ),
            fallbacks,
        })
    }

    /// Defaults with an in-memory store, for tests
    pub fn in_memory() -> Self {
        Self {
            store_backend: StoreBackend::Memory,
            ..Self::default()
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// Path of the redb file used by the file backend
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("grill.redb")
    }

    /// Warn about every variable that was replaced by its default
    pub fn log_fallbacks(&self) {
        for entry in &self.fallbacks {
            tracing::warn!(value = %entry, "Invalid config value, using default");
        }
    }
}
