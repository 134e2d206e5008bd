// src/config.rs
use std::{str::FromStr, time::Duration};

use anyhow::{Context, bail};

use crate::services::completion::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub app_name: String,
    pub service_name: String,
    pub service_version: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub openai_timeout: Duration,
    pub products_delay: ProductDelay,
}

/// Bounds of the artificial latency on the catalog route, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for ProductDelay {
    fn default() -> Self {
        Self { min_ms: 100, max_ms: 300 }
    }
}

impl ProductDelay {
    pub const NONE: Self = Self { min_ms: 0, max_ms: 0 };
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let products_delay = ProductDelay {
            min_ms: parse(&lookup, "PRODUCTS_DELAY_MIN_MS", 100)?,
            max_ms: parse(&lookup, "PRODUCTS_DELAY_MAX_MS", 300)?,
        };
        if products_delay.min_ms > products_delay.max_ms {
            bail!(
                "PRODUCTS_DELAY_MIN_MS ({}) is greater than PRODUCTS_DELAY_MAX_MS ({})",
                products_delay.min_ms,
                products_delay.max_ms
            );
        }

        let timeout_secs: u64 = parse(&lookup, "OPENAI_TIMEOUT_SECS", 30)?;
        if timeout_secs == 0 {
            bail!("OPENAI_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Self {
            host: get("HOST", "0.0.0.0"),
            port: parse(&lookup, "PORT", 8000)?,
            app_name: get("APP_NAME", "ecommerce-app"),
            service_name: get("SERVICE_NAME", "ecommerce-service"),
            service_version: get("SERVICE_VERSION", "1.0.0"),
            openai_api_key: get("OPENAI_API_KEY", "demo-key"),
            openai_base_url: get("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            openai_model: get("OPENAI_MODEL", DEFAULT_MODEL),
            openai_timeout: Duration::from_secs(timeout_secs),
            products_delay,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T, F>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}
