use log::{debug, warn};
use reqwest::Client;

use super::{
    privat_dto::PrivatRatesDto,
    utils::{make_request, parse_response_object},
};
use crate::{config::Config, error::CollectError, models::DateKey};

pub fn rates_url(base_url: &str, date: Option<&DateKey>) -> String {
    let date = date.map(|d| d.to_string()).unwrap_or_default();
    format!("{}?json&date={}", base_url, date)
}

/// Fetches the rate document for `date`, or the latest published one when
/// `date` is `None`.
pub async fn get_exchange_rates(
    date: Option<&DateKey>,
    client: &Client,
    config: &Config,
) -> Result<PrivatRatesDto, CollectError> {
    let url = rates_url(config.api_url(), date);
    let body = make_request(client, &url, config)
        .await
        .map_err(|e| logged(CollectError::fetch(date, format!("{:#}", e))))?;

    let doc = parse_response_object::<PrivatRatesDto>(&body, "Unexpected exchange rate document")
        .map_err(|e| logged(CollectError::parse(date, format!("{:#}", e))))?;

    debug!("Received rates for {} from {}", url, doc.source());
    Ok(doc)
}

fn logged(err: CollectError) -> CollectError {
    warn!("{}", err);
    err
}
