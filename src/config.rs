use std::{env, time::Duration};

use anyhow::{anyhow, Context};

use crate::db::DEFAULT_TIMEOUT;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
  pub port: u16,
  pub database_url: String,
  pub db_timeout: Duration,
  pub max_connections: u32,
  /// Fixes the placeholder city/week-day picks when set.
  pub placeholder_seed: Option<u64>,
}

impl Config {
  pub fn from_env() -> anyhow::Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let database_url = lookup("DATABASE_URL")
      .or_else(|| lookup("DSN"))
      .ok_or_else(|| anyhow!("DATABASE_URL environment variable must be set."))?;

    let port = match lookup("PORT") {
      Some(raw) => raw.parse::<u16>().with_context(|| format!("Invalid PORT: {}", raw))?,
      None => DEFAULT_PORT,
    };

    let db_timeout = match lookup("DB_TIMEOUT_SECS") {
      Some(raw) => Duration::from_secs(
        raw
          .parse::<u64>()
          .with_context(|| format!("Invalid DB_TIMEOUT_SECS: {}", raw))?,
      ),
      None => DEFAULT_TIMEOUT,
    };

    let max_connections = match lookup("DB_MAX_CONNECTIONS") {
      Some(raw) => raw
        .parse::<u32>()
        .with_context(|| format!("Invalid DB_MAX_CONNECTIONS: {}", raw))?,
      None => DEFAULT_MAX_CONNECTIONS,
    };

    let placeholder_seed = lookup("PLACEHOLDER_SEED")
      .map(|raw| raw.parse::<u64>().with_context(|| format!("Invalid PLACEHOLDER_SEED: {}", raw)))
      .transpose()?;

    Ok(Self {
      port,
      database_url,
      db_timeout,
      max_connections,
      placeholder_seed,
    })
  }
}
