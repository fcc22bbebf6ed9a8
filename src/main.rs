use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;

use privat_rates::app::{self, Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    app::run(args).await
}
