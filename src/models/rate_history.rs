use std::collections::BTreeMap;

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use super::{Currency, DateKey, RateRecord};

pub type DayRates = BTreeMap<Currency, RateRecord>;

/// One day of rates. On the wire this is `{"DD.MM.YYYY": {"USD": {...}}}`.
#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
#[serde(
    try_from = "BTreeMap<DateKey, DayRates>",
    into = "BTreeMap<DateKey, DayRates>"
)]
pub struct HistoryEntry {
    date: DateKey,
    rates: DayRates,
}

impl TryFrom<BTreeMap<DateKey, DayRates>> for HistoryEntry {
    type Error = String;

    fn try_from(map: BTreeMap<DateKey, DayRates>) -> Result<Self, Self::Error> {
        if map.len() != 1 {
            return Err(format!(
                "expected exactly one date per history entry, found {}",
                map.len()
            ));
        }

        map.into_iter()
            .next()
            .map(|(date, rates)| HistoryEntry::new(date, rates))
            .ok_or_else(|| String::from("empty history entry"))
    }
}

impl From<HistoryEntry> for BTreeMap<DateKey, DayRates> {
    fn from(entry: HistoryEntry) -> Self {
        BTreeMap::from([(entry.date, entry.rates)])
    }
}

/// Per-day rates, most recent first. Entries are append-only.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")]
pub struct RateHistory {
    entries: Vec<HistoryEntry>,
}

impl TryFrom<Vec<HistoryEntry>> for RateHistory {
    type Error = String;

    fn try_from(entries: Vec<HistoryEntry>) -> Result<Self, Self::Error> {
        let mut history = RateHistory::new();
        for entry in entries {
            let date = *entry.date();
            if !history.push(entry) {
                return Err(format!("date {} appears more than once", date));
            }
        }
        Ok(history)
    }
}

impl From<RateHistory> for Vec<HistoryEntry> {
    fn from(history: RateHistory) -> Self {
        history.entries
    }
}

impl RateHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the entry unless its date is already recorded.
    pub fn push(&mut self, entry: HistoryEntry) -> bool {
        if self.contains(entry.date()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, date: &DateKey) -> bool {
        self.entries.iter().any(|e| e.date() == date)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn dates(&self) -> Vec<DateKey> {
        self.entries.iter().map(|e| *e.date()).collect()
    }

    pub fn get(&self, date: &DateKey, currency: Currency) -> Option<&RateRecord> {
        self.entries
            .iter()
            .find(|e| e.date() == date)
            .and_then(|e| e.rates().get(&currency))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
