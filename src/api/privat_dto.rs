use std::collections::HashMap;

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{Currency, DateKey, DayRates, RateRecord};

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct PrivatRatesDto {
    #[serde(default)]
    date: Option<DateKey>,
    #[serde(default)]
    previous_date: Option<DateKey>,
    #[serde(default)]
    bank: Option<String>,
    #[serde(default)]
    base_currency_lit: Option<String>,
    exchange_rate: ExchangeRateTable,
}

impl PrivatRatesDto {
    /// Short description of the publisher for log lines.
    pub fn source(&self) -> String {
        format!(
            "{} ({})",
            self.bank.as_deref().unwrap_or("unknown bank"),
            self.base_currency_lit.as_deref().unwrap_or("UAH")
        )
    }

    pub fn rates_for(&self, currencies: &[Currency]) -> DayRates {
        currencies
            .iter()
            .filter_map(|currency| {
                self.exchange_rate
                    .find(*currency)
                    .and_then(|entry| entry.to_rate_record())
                    .map(|record| (*currency, record))
            })
            .collect()
    }
}

/// The live API returns a list of entries; older captures key them by code.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ExchangeRateTable {
    List(Vec<PrivatRateEntryDto>),
    ByCurrency(HashMap<String, PrivatRateEntryDto>),
}

impl ExchangeRateTable {
    pub fn find(&self, currency: Currency) -> Option<&PrivatRateEntryDto> {
        let code = currency.to_string();
        match self {
            ExchangeRateTable::List(entries) => entries.iter().find(|entry| {
                entry
                    .currency
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(&code))
            }),
            ExchangeRateTable::ByCurrency(entries) => entries
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(&code))
                .map(|(_, entry)| entry),
        }
    }
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct PrivatRateEntryDto {
    #[serde(default)]
    currency: Option<String>,
    #[serde(default, deserialize_with = "permissive_rate")]
    sale_rate: Option<f64>,
    #[serde(default, deserialize_with = "permissive_rate")]
    purchase_rate: Option<f64>,
}

impl PrivatRateEntryDto {
    pub fn to_rate_record(&self) -> Option<RateRecord> {
        match (self.sale_rate, self.purchase_rate) {
            (Some(sale), Some(purchase)) => Some(RateRecord::new(sale, purchase)),
            _ => None,
        }
    }
}

// Rates arrive as numbers or numeric strings. Any other value, and any
// non-finite number, counts as absent.
fn permissive_rate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let rate = match raw {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(rate.filter(|value| value.is_finite()))
}
