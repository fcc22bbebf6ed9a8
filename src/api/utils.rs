use anyhow::{Context, Error, Result};
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::config::Config;

/// Issues a GET and returns the body of a successful response. Transport
/// errors are retried with a linear backoff, HTTP statuses are not.
pub async fn make_request(client: &Client, url: &str, config: &Config) -> Result<String> {
    let mut attempt = 0;

    let res = loop {
        debug!("GET {} (attempt {})", url, attempt + 1);
        match client.get(url).send().await {
            Ok(res) => break res,
            Err(err) if attempt < *config.max_retries() && is_transient(&err) => {
                attempt += 1;
                let delay = *config.retry_backoff() * attempt;
                warn!("Request to {} failed ({}), retrying in {:?}", url, err, delay);
                sleep(delay).await;
            }
            Err(err) => return Err(err).with_context(|| format!("Request to {} failed", url)),
        }
    };

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    res.text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))
}

pub fn parse_response_object<T>(text: &str, error_msg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(text).with_context(|| error_msg.to_string())
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout() || err.is_request()
}
