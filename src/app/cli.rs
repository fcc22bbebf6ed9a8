use clap::Parser;

use crate::services::{FailurePolicy, Strategy};

#[derive(Debug, Parser)]
#[command(
    name = "privat-rates",
    version,
    about = "Fetch PrivatBank exchange rates for the last few days"
)]
pub struct Args {
    /// Number of days to retrieve exchange rates for
    #[arg(required_unless_present = "load", allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Currency code to include, repeatable (defaults to USD and EUR)
    #[arg(short, long = "currency", value_name = "CODE")]
    pub currencies: Vec<String>,

    /// File to save the exchange rates to
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    #[arg(long, value_enum, default_value_t = Strategy::Anchor)]
    pub strategy: Strategy,

    #[arg(long, value_enum, default_value_t = FailurePolicy::Strict)]
    pub policy: FailurePolicy,

    /// Print a previously saved history file instead of fetching
    #[arg(long, value_name = "PATH", conflicts_with_all = ["days", "output"])]
    pub load: Option<String>,
}
