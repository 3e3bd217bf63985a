//! BETGEN — synthetic bet generation service.
//!
//! Entry point. Loads configuration, initialises structured logging,
//! and serves the HTTP API with graceful shutdown.

use anyhow::Result;
use tracing::info;

use betgen::config;
use betgen::server;

const BANNER: &str = r#"
 ____  _____ _____ ____ _____ _   _
| __ )| ____|_   _/ ___| ____| \ | |
|  _ \|  _|   | || |  _|  _| |  \| |
| |_) | |___  | || |_| | |___| |\  |
|____/|_____| |_| \____|_____|_| \_|

  Bet Generator — match scoring service
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cfg = config::AppConfig::load("config.toml")?;

    init_logging();

    println!("{BANNER}");
    info!(
        service = %cfg.service.name,
        version = env!("CARGO_PKG_VERSION"),
        host = %cfg.service.host,
        port = cfg.service.port,
        "betgen starting up"
    );

    server::serve(&cfg.service).await?;

    info!("betgen shut down cleanly.");
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("betgen=info"));

    let json_logging = std::env::var("BETGEN_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
