use anyhow::{Context, Result};
use futures::{StreamExt, stream};
use log::{debug, info, warn};
use reqwest::Client;

use super::options::{CollectOptions, FailurePolicy, Strategy};
use crate::{
    api::privat::get_exchange_rates,
    config::Config,
    error::{CollectError, ValidationError},
    models::{Currency, DateKey, DayRates, HistoryEntry, RateHistory},
};

pub struct RateHistoryService {
    client: Client,
    config: Config,
}

impl RateHistoryService {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(*config.timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Collects `days` days of rates for `codes`, counting back from the
    /// local date.
    pub async fn collect(
        &self,
        codes: &[String],
        days: i64,
        options: CollectOptions,
    ) -> Result<RateHistory, CollectError> {
        self.collect_as_of(DateKey::today(), codes, days, options)
            .await
    }

    pub async fn collect_as_of(
        &self,
        today: DateKey,
        codes: &[String],
        days: i64,
        options: CollectOptions,
    ) -> Result<RateHistory, CollectError> {
        let (currencies, days) = self.validate(codes, days)?;

        let history = match options.strategy() {
            Strategy::Anchor => {
                self.collect_anchored(today, &currencies, days, *options.policy())
                    .await?
            }
            Strategy::Computed => {
                self.collect_computed(today, &currencies, days, *options.policy())
                    .await?
            }
        };

        info!(
            "Collected {} of {} day(s) using the {} strategy",
            history.len(),
            days,
            options.strategy()
        );

        Ok(history)
    }

    pub fn validate(
        &self,
        codes: &[String],
        days: i64,
    ) -> Result<(Vec<Currency>, u32), ValidationError> {
        let limit = *self.config.days_limit();
        let days = u32::try_from(days)
            .ok()
            .filter(|d| (1..=limit).contains(d))
            .ok_or(ValidationError::DaysOutOfRange { days, limit })?;

        let currencies = Currency::parse_selection(codes)?;

        Ok((currencies, days))
    }

    async fn collect_anchored(
        &self,
        today: DateKey,
        currencies: &[Currency],
        days: u32,
        policy: FailurePolicy,
    ) -> Result<RateHistory, CollectError> {
        let mut history = RateHistory::new();
        let mut cursor: Option<DateKey> = None;

        for offset in 0..days {
            // The first request asks for the latest document, every later one
            // follows the date chain.
            let requested = match (offset, cursor) {
                (0, _) => None,
                (_, Some(date)) => Some(date),
                (_, None) => break,
            };

            match get_exchange_rates(requested.as_ref(), &self.client, &self.config).await {
                Ok(doc) => {
                    let date = doc.date().or(requested).unwrap_or(today);
                    record(&mut history, date, doc.rates_for(currencies));
                    cursor = doc
                        .previous_date()
                        .filter(|previous| *previous < date)
                        .or_else(|| date.previous());
                }
                Err(err) => {
                    handle_failure(policy, err)?;
                    cursor = requested.unwrap_or(today).previous();
                }
            }
        }

        Ok(history)
    }

    async fn collect_computed(
        &self,
        today: DateKey,
        currencies: &[Currency],
        days: u32,
        policy: FailurePolicy,
    ) -> Result<RateHistory, CollectError> {
        let client = &self.client;
        let config = &self.config;
        let dates: Vec<DateKey> = (0..days).filter_map(|n| today.days_back(n)).collect();

        // `buffered` yields in request order, whatever order responses land in.
        let mut responses = stream::iter(dates)
            .map(move |date| async move {
                let res = get_exchange_rates(Some(&date), client, config).await;
                (date, res)
            })
            .buffered(*config.concurrency());

        let mut history = RateHistory::new();
        while let Some((requested, res)) = responses.next().await {
            match res {
                Ok(doc) => {
                    let date = doc.date().unwrap_or(requested);
                    record(&mut history, date, doc.rates_for(currencies));
                }
                Err(err) => handle_failure(policy, err)?,
            }
        }

        Ok(history)
    }
}

fn record(history: &mut RateHistory, date: DateKey, rates: DayRates) {
    if rates.is_empty() {
        debug!("No requested currency published for {}", date);
    }
    if !history.push(HistoryEntry::new(date, rates)) {
        warn!("Duplicate document for {}, keeping the first one", date);
    }
}

fn handle_failure(policy: FailurePolicy, err: CollectError) -> Result<(), CollectError> {
    match policy {
        FailurePolicy::Strict => Err(err),
        FailurePolicy::Tolerant => {
            info!("Skipping day after failure: {}", err);
            Ok(())
        }
    }
}
