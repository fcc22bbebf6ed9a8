pub mod cli;
pub mod output;

use anyhow::{Context, Result};
use log::info;

pub use cli::Args;

use crate::{
    config::Config,
    models::RateHistory,
    services::{CollectOptions, RateHistoryService},
};

pub async fn run(args: Args) -> Result<()> {
    if let Some(path) = args.load.as_deref() {
        let history = output::load_from_file(path).await?;
        println!("{}", output::render(&history)?);
        return Ok(());
    }

    let days = args.days.context("Number of days is required")?;
    let config = Config::from_env()?;
    let service = RateHistoryService::new(config)?;

    let options = CollectOptions::new(args.strategy, args.policy);
    let history =
        collect_and_save(&service, &args.currencies, days, options, args.output.as_deref())
            .await?;

    println!("{}", output::render(&history)?);

    Ok(())
}

/// Collects the history and, only once that succeeded, writes it to `output_path`.
pub async fn collect_and_save(
    service: &RateHistoryService,
    codes: &[String],
    days: i64,
    options: CollectOptions,
    output_path: Option<&str>,
) -> Result<RateHistory> {
    let history = service.collect(codes, days, options).await?;

    if let Some(path) = output_path {
        let written = output::save_to_file(&history, path).await?;
        info!("Saved exchange rates to {}", written.display());
    }

    Ok(history)
}
