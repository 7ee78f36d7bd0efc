/// Runtime configuration loaded from the environment (and `.env` when present)
use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3333";
const DEFAULT_MAIL_FROM: &str = "Gympoint <noreply@gympoint.com>";
const MAX_WINDOW_DAYS: i64 = 3650;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_pool_size: u32,
}

#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub enabled: bool,
    pub poll_interval: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckinPolicy {
    pub max_checkins: i64,
    pub window_days: i64,
}

impl Default for CheckinPolicy {
    fn default() -> Self {
        Self {
            max_checkins: 5,
            window_days: 7,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub bind_address: SocketAddr,
    pub worker: WorkerConfig,
    pub checkin_policy: CheckinPolicy,
    pub mail_from: String,
}

impl AppConfig {
    /// Load configuration from process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").ok_or_else(|| {
            AppError::ConfigError("DATABASE_URL environment variable not found".to_string())
        })?;
        validate_database_url(&url)?;

        let max_pool_size = match lookup("DATABASE_POOL_SIZE") {
            Some(raw) => parse_value::<u32>("DATABASE_POOL_SIZE", &raw)?,
            None => default_pool_size(),
        };
        if max_pool_size == 0 {
            return Err(AppError::ConfigError(
                "DATABASE_POOL_SIZE must be positive".to_string(),
            ));
        }

        let bind_address = parse_value::<SocketAddr>(
            "BIND_ADDRESS",
            &lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        )?;

        let enabled = match lookup("WORKER_ENABLED") {
            Some(raw) => parse_bool("WORKER_ENABLED", &raw)?,
            None => true,
        };
        let poll_secs = match lookup("WORKER_POLL_INTERVAL_SECS") {
            Some(raw) => parse_value::<u64>("WORKER_POLL_INTERVAL_SECS", &raw)?,
            None => 5,
        };

        let defaults = CheckinPolicy::default();
        let max_checkins = match lookup("CHECKIN_LIMIT") {
            Some(raw) => parse_value::<i64>("CHECKIN_LIMIT", &raw)?,
            None => defaults.max_checkins,
        };
        let window_days = match lookup("CHECKIN_WINDOW_DAYS") {
            Some(raw) => parse_value::<i64>("CHECKIN_WINDOW_DAYS", &raw)?,
            None => defaults.window_days,
        };
        if max_checkins < 1 || window_days < 1 {
            return Err(AppError::ConfigError(
                "CHECKIN_LIMIT and CHECKIN_WINDOW_DAYS must be positive".to_string(),
            ));
        }
        if window_days > MAX_WINDOW_DAYS {
            return Err(AppError::ConfigError(format!(
                "CHECKIN_WINDOW_DAYS cannot exceed {}",
                MAX_WINDOW_DAYS
            )));
        }

        Ok(Self {
            database: DatabaseConfig { url, max_pool_size },
            bind_address,
            worker: WorkerConfig {
                enabled,
                poll_interval: Duration::from_secs(poll_secs.max(1)),
            },
            checkin_policy: CheckinPolicy {
                max_checkins,
                window_days,
            },
            mail_from: lookup("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
        })
    }
}

fn validate_database_url(url: &str) -> AppResult<()> {
    if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
        return Err(AppError::ConfigError(
            "Invalid database URL format. Must start with postgres:// or postgresql://"
                .to_string(),
        ));
    }
    Ok(())
}

/// Pool size based on CPU count, capped at 20
fn default_pool_size() -> u32 {
    let cpu_count = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);
    std::cmp::min(cpu_count * 2, 20) as u32
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::ConfigError(format!("Invalid value for {}: '{}'", key, raw)))
}

fn parse_bool(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::ConfigError(format!(
            "Invalid value for {}: '{}'",
            key, raw
        ))),
    }
}
