use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, Layer};

use config::Config;
use snapshot::events::StatusSignal;
use snapshot::Sources;

#[tokio::main]
async fn main() {
    // Loaded ".env"
    dotenv::dotenv().ok();

    // Initialize logging
    let file_appender = tracing_appender::rolling::daily("./log", "log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(
                fmt::Layer::default()
                    .with_ansi(false)
                    .with_timer(fmt::time::UtcTime::rfc_3339())
                    .with_writer(file_writer)
                    .with_filter(LevelFilter::INFO),
            )
            .with(
                fmt::Layer::default()
                    .with_ansi(true)
                    .with_timer(fmt::time::UtcTime::rfc_3339())
                    .with_writer(std::io::stdout)
                    .with_filter(LevelFilter::INFO),
            ),
    )
    .expect("Failed to set global log subscriber");

    // Load config, a fresh install starts from the defaults
    let config_path = env::var("PORTAL_CONFIG").unwrap_or_else(|_| "./config.json".to_string());
    let config = Arc::new(Config::new(&config_path).expect("Failed to load config"));

    let client = reqwest::Client::new();
    let signal = StatusSignal::new(16);

    // Start loops
    let sources = Sources::new(&config.data_url);
    snapshot::loops::start_loops(signal.clone(), client.clone(), sources, config.d2gs_poll_secs).await;
    d2portal::loops::start_loops(client, Arc::clone(&config), signal).await;

    info!("Portal running, fragments under {}", config.out_dir);

    tokio::signal::ctrl_c().await.expect("Could not register ctrl+c handler");

    // shutdown codes
    info!("Saving config file");
    config.store(&config_path);
}
