//! kost-service entry point

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use kost_service::config::Config;
use kost_service::geo::positionstack::PositionstackClient;
use kost_service::server::{self, state::AppState};
use kost_service::store::memory::MemoryStore;

/// REST backend for the kost rental listing platform
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address (host:port)
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> kost_service::Result<()> {
    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(bind) = &args.bind {
        config.set_bind_addr(bind)?;
    }

    let store = Arc::new(MemoryStore::new());
    let geocoder = Arc::new(PositionstackClient::new(
        config.geocoder.endpoint.clone(),
        config.geocoder.access_key.clone(),
    ));

    let state = Arc::new(AppState::new(config, store.clone(), store, geocoder));
    server::run(state).await
}
