use std::str::FromStr;

use anyhow::{bail, Context, Result};
use tokio::net::TcpListener;

/// Deployment profile, selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// `Cache-Control` value sent with static assets.
    pub fn static_cache_control(&self) -> &'static str {
        match self {
            Environment::Development => "no-cache",
            Environment::Production => "public, max-age=86400",
        }
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => bail!("Unknown APP_ENV '{other}' (expected 'development' or 'production')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; startup fails only on values that do not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub environment: Environment,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8000,
            rust_log: "info".to_string(),
            environment: Environment::Development,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: match std::env::var("PORT") {
                Ok(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                Err(_) => defaults.port,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            environment: match std::env::var("APP_ENV") {
                Ok(raw) => raw.parse()?,
                Err(_) => defaults.environment,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Binds the listener. `HOST` may be an IP address or a resolvable hostname.
    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = self.bind_addr();
        TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr} (check HOST and PORT)"))
    }
}
