use std::{env, str::FromStr, time::Duration};

use anyhow::{Context, Result};
use derive_getters::Getters;

pub const DEFAULT_API_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates";

#[derive(Clone, Debug, Getters)]
pub struct Config {
    api_url: String,
    days_limit: u32,
    concurrency: usize,
    timeout: Duration,
    max_retries: u32,
    retry_backoff: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_API_URL),
            days_limit: 10,
            concurrency: 4,
            timeout: Duration::from_secs(30),
            max_retries: 2,
            retry_backoff: Duration::from_millis(250),
        }
    }
}

impl Config {
    /// Reads `PRIVAT_*` overrides from the environment. Unset variables keep
    /// their defaults, malformed ones are an error.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let concurrency = read_var("PRIVAT_CONCURRENCY")?.unwrap_or(defaults.concurrency);
        if concurrency == 0 {
            anyhow::bail!("PRIVAT_CONCURRENCY must be at least 1");
        }

        Ok(Self {
            api_url: env::var("PRIVAT_API_URL").unwrap_or(defaults.api_url),
            days_limit: read_var("PRIVAT_DAYS_LIMIT")?.unwrap_or(defaults.days_limit),
            concurrency,
            timeout: read_var("PRIVAT_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            max_retries: read_var("PRIVAT_MAX_RETRIES")?.unwrap_or(defaults.max_retries),
            retry_backoff: read_var("PRIVAT_RETRY_BACKOFF_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.retry_backoff),
        })
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.to_string();
        self
    }

    pub fn with_days_limit(mut self, days_limit: u32) -> Self {
        self.days_limit = days_limit;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

fn read_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Failed to parse {} '{}'", name, value)),
        Err(_) => Ok(None),
    }
}
