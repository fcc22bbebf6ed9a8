use clap::ValueEnum;
use derive_getters::Getters;
use derive_new::new;
use strum_macros::Display;

/// How request dates are chosen.
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// Start from the latest document and follow its `previousDate` link.
    #[default]
    Anchor,
    /// Count back from today and fetch the days concurrently.
    Computed,
}

/// What a failed day does to the rest of the collection.
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort on the first failed day.
    #[default]
    Strict,
    /// Log the failed day and carry on without it.
    Tolerant,
}

#[derive(Clone, Copy, Debug, Default, Getters, new)]
pub struct CollectOptions {
    strategy: Strategy,
    policy: FailurePolicy,
}
