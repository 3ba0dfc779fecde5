use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info};

use trainlog::config::Config;
use trainlog::server::{self, AppState};
use trainlog::store::DocumentStore;

/// Personal fitness tracking backend
#[derive(Parser)]
#[command(name = "trainlog")]
#[command(about = "Track workout sessions and plans over a JSON file store", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = 5050)]
    port: u16,

    /// Path to the JSON data file
    #[arg(long, default_value = "fitness-data.json")]
    data_file: PathBuf,

    /// Directory of static assets served for non-API requests
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    let config = Config {
        port: cli.port,
        data_file: cli.data_file,
        static_dir: cli.static_dir,
    };
    debug!("configuration: {config:?}");

    if let Err(e) = run(config).await {
        error!("Fatal error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let store = DocumentStore::new(&config.data_file);

    // Fail fast on an unusable data path instead of on the first request.
    store.ensure_initialized().await.with_context(|| {
        format!(
            "failed to initialize data file {}",
            config.data_file.display()
        )
    })?;
    info!("data file: {}", config.data_file.display());

    let state = Arc::new(AppState::new(store));
    server::serve(&config, state).await
}
