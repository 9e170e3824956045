// product_api/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Where the products table lives. Either a full connection URL or the
/// discrete libpq-style settings.
#[derive(Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
  Url(String),
  Parts {
    host: String,
    port: u16,
    user: String,
    password: String,
    name: String,
    ssl_mode: String,
  },
}

// Keeps credentials out of `?config` log lines.
impl fmt::Debug for DatabaseConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DatabaseConfig::Url(_) => f.write_str("Url([REDACTED])"),
      DatabaseConfig::Parts {
        host,
        port,
        user,
        name,
        ssl_mode,
        ..
      } => f
        .debug_struct("Parts")
        .field("host", host)
        .field("port", port)
        .field("user", user)
        .field("password", &"[REDACTED]")
        .field("name", name)
        .field("ssl_mode", ssl_mode)
        .finish(),
    }
  }
}

impl DatabaseConfig {
  pub fn connect_options(&self) -> Result<PgConnectOptions> {
    match self {
      DatabaseConfig::Url(url) => PgConnectOptions::from_str(url)
        .map_err(|e| AppError::Config(format!("Invalid DATABASE_URL: {}", e))),
      DatabaseConfig::Parts {
        host,
        port,
        user,
        password,
        name,
        ssl_mode,
      } => {
        let ssl_mode = PgSslMode::from_str(ssl_mode)
          .map_err(|e| AppError::Config(format!("Invalid DB_SSLMODE '{}': {}", ssl_mode, e)))?;
        Ok(
          PgConnectOptions::new()
            .host(host)
            .port(*port)
            .username(user)
            .password(password)
            .database(name)
            .ssl_mode(ssl_mode),
        )
      }
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database: DatabaseConfig,
  pub db_max_connections: u32,
  pub db_acquire_timeout_secs: u64,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "0.0.0.0".to_string(),
      server_port: 9000,
      database: DatabaseConfig::Parts {
        host: "127.0.0.1".to_string(),
        port: 5432,
        user: "postgres".to_string(),
        password: String::new(),
        name: "postgres".to_string(),
        ssl_mode: "disable".to_string(),
      },
      db_max_connections: 5,
      db_acquire_timeout_secs: 30,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from any key/value source. `from_env` passes the process environment.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = Self::default();
    let get_or = |var_name: &str, default: &str| lookup(var_name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", &defaults.server_host);
    let server_port: u16 = parse_var("SERVER_PORT", get_or("SERVER_PORT", "9000"))?;

    let database = match lookup("DATABASE_URL") {
      Some(url) if !url.is_empty() => DatabaseConfig::Url(url),
      _ => DatabaseConfig::Parts {
        host: get_or("DB_HOST", "127.0.0.1"),
        port: parse_var("DB_PORT", get_or("DB_PORT", "5432"))?,
        user: lookup("DB_USER").ok_or_else(|| missing("DB_USER"))?,
        password: get_or("DB_PASSWORD", ""),
        name: lookup("DB_NAME").ok_or_else(|| missing("DB_NAME"))?,
        ssl_mode: get_or("DB_SSLMODE", "disable"),
      },
    };

    let db_max_connections: u32 = parse_var("DB_MAX_CONNECTIONS", get_or("DB_MAX_CONNECTIONS", "5"))?;
    if db_max_connections == 0 {
      return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
    }
    let db_acquire_timeout_secs: u64 = parse_var("DB_ACQUIRE_TIMEOUT_SECS", get_or("DB_ACQUIRE_TIMEOUT_SECS", "30"))?;

    tracing::info!("Application configuration loaded successfully.");
    tracing::debug!(database = ?database, "Loaded database settings");

    Ok(Self {
      server_host,
      server_port,
      database,
      db_max_connections,
      db_acquire_timeout_secs,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn missing(var_name: &str) -> AppError {
  AppError::Config(format!(
    "Missing environment variable '{}' (or set DATABASE_URL)",
    var_name
  ))
}

fn parse_var<T>(var_name: &str, raw: String) -> Result<T>
where
  T: FromStr,
  T::Err: fmt::Display,
{
  raw
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {}: {}", var_name, e)))
}
