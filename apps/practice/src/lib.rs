pub mod cli;
pub mod config;
pub mod db;
pub mod state;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::Config;
use crate::state::{build_session, AppStore};

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.apply(Config::from_env());
    tracing::debug!(?config, "loaded configuration");

    let store = AppStore::open(&config);
    if !store.is_durable() {
        tracing::warn!("progress from this run will not be saved");
    }
    let mut session = build_session(store, &config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::execute(&cli.command, &mut session, cli.json, &mut out)
}
