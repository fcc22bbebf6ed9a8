use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::RateHistory;

pub fn render(history: &RateHistory) -> Result<String> {
    serde_json::to_string_pretty(history).context("Failed to serialize exchange rates")
}

pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

pub async fn save_to_file(history: &RateHistory, path: &str) -> Result<PathBuf> {
    let path = expand_path(path);
    let json = render(history)?;

    tokio::fs::write(&path, json)
        .await
        .with_context(|| format!("Failed to write exchange rates to {}", path.display()))?;

    Ok(path)
}

pub async fn load_from_file(path: &str) -> Result<RateHistory> {
    let path = expand_path(path);
    let text = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to open exchange rate file at path: {}", path.display()))?;

    serde_json::from_str::<RateHistory>(&text)
        .with_context(|| format!("Failed to parse exchange rate file {}", path.display()))
}
