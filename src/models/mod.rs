pub mod currency;
pub mod date_key;
pub mod rate_history;
pub mod rate_record;

pub use currency::Currency;
pub use date_key::DateKey;
pub use rate_history::{DayRates, HistoryEntry, RateHistory};
pub use rate_record::RateRecord;
