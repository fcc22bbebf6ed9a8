pub mod options;
pub mod rate_history_service;

pub use options::{CollectOptions, FailurePolicy, Strategy};
pub use rate_history_service::RateHistoryService;
