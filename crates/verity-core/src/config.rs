//! Configuration module
//!
//! Server configuration is read once at startup from the environment (and an
//! optional `.env` file) and passed explicitly into application setup.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_STATIC_DIR: &str = "static";
const MAX_FILE_SIZE_MB: usize = 16;
const HTTP_CONCURRENCY_LIMIT: usize = 1024;
const BYTES_PER_MB: usize = 1024 * 1024;

/// Allowance on top of the file size limit for multipart framing
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Parse an optional numeric variable, falling back to `default` when unset.
fn parse_number<T: FromStr>(
    value: Option<String>,
    key: &str,
    default: T,
) -> Result<T, anyhow::Error> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} must be a valid number, got '{}'", key, v)),
        None => Ok(default),
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Directory uploads are persisted to
    pub upload_dir: PathBuf,
    /// Directory the landing page is read from
    pub static_dir: PathBuf,
    pub max_file_size_bytes: usize,
    pub cors_origins: Vec<String>,
    pub http_concurrency_limit: usize,
    pub environment: String,
    /// Emit logs as JSON lines (`LOG_FORMAT=json`)
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            max_file_size_bytes: MAX_FILE_SIZE_MB * BYTES_PER_MB,
            cors_origins: vec!["*".to_string()],
            http_concurrency_limit: HTTP_CONCURRENCY_LIMIT,
            environment: "development".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset keys fall
    /// back to defaults; malformed values for required numbers are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or(defaults.environment);

        let host = match lookup("HOST") {
            Some(h) => h
                .parse()
                .map_err(|_| anyhow::anyhow!("HOST must be a valid IP address"))?,
            None => defaults.host,
        };

        let port = parse_number(lookup("PORT"), "PORT", defaults.port)?;

        let max_file_size_mb: usize =
            parse_number(lookup("MAX_FILE_SIZE_MB"), "MAX_FILE_SIZE_MB", MAX_FILE_SIZE_MB)?;
        let max_file_size_bytes = max_file_size_mb
            .checked_mul(BYTES_PER_MB)
            .ok_or_else(|| {
                anyhow::anyhow!("MAX_FILE_SIZE_MB is too large: {}", max_file_size_mb)
            })?;

        let http_concurrency_limit = parse_number(
            lookup("HTTP_CONCURRENCY_LIMIT"),
            "HTTP_CONCURRENCY_LIMIT",
            defaults.http_concurrency_limit,
        )?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let config = Config {
            host,
            port,
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            max_file_size_bytes,
            cors_origins,
            http_concurrency_limit,
            environment,
            log_json: lookup("LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.log_json),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.port == 0 {
            return Err(anyhow::anyhow!("PORT cannot be 0"));
        }

        if self.upload_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR cannot be empty"));
        }

        if self.static_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("STATIC_DIR cannot be empty"));
        }

        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("Max file size cannot be 0"));
        }

        if self.request_body_limit().is_none() {
            return Err(anyhow::anyhow!(
                "Max file size of {} bytes leaves no room for multipart framing",
                self.max_file_size_bytes
            ));
        }

        if self.http_concurrency_limit == 0 {
            return Err(anyhow::anyhow!("HTTP_CONCURRENCY_LIMIT cannot be 0"));
        }

        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Largest request body accepted: the file limit plus multipart framing.
    /// `None` when the sum does not fit in `usize`.
    pub fn request_body_limit(&self) -> Option<usize> {
        self.max_file_size_bytes.checked_add(MULTIPART_OVERHEAD_BYTES)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
