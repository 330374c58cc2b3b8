mod app;
mod cli;
mod report_renderer;
mod return_fetcher;
mod yahoo_client;

use crate::app::App;
use clap::Parser;
use cli::Cli;
use log::LevelFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
    let args = Cli::parse();
    App::new(args).run().await
}
