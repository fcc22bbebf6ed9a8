use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::ValidationError;

/// Currencies the bank publishes cash rates for.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Currency {
    Usd,
    Eur,
    Chf,
    Gbp,
    Pln,
    Czk,
    Cad,
}

impl Currency {
    pub fn defaults() -> Vec<Currency> {
        vec![Currency::Usd, Currency::Eur]
    }

    pub fn from_code(code: &str) -> Result<Currency, ValidationError> {
        code.trim()
            .parse::<Currency>()
            .map_err(|_| ValidationError::UnsupportedCurrency(code.to_string()))
    }

    /// Parses every code, keeping first-seen order and dropping repeats.
    /// An empty selection falls back to the defaults.
    pub fn parse_selection(codes: &[String]) -> Result<Vec<Currency>, ValidationError> {
        if codes.is_empty() {
            return Ok(Self::defaults());
        }

        let mut selection = Vec::with_capacity(codes.len());
        for code in codes {
            let currency = Self::from_code(code)?;
            if !selection.contains(&currency) {
                selection.push(currency);
            }
        }

        Ok(selection)
    }
}
