//! Countries - list and search countries from the command line.
//!
//! Fetches the country list once, then prints every entry whose name or
//! capital matches the query given on the command line.

use std::io;

use anyhow::{Context, Result};
use countries_core::{AppController, Config};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that overrides the configured endpoint
const URL_ENV_VAR: &str = "COUNTRIES_URL";

const USAGE: &str = "Usage: countries [QUERY...]

Lists countries whose name or capital contains QUERY (case-insensitive).
With no QUERY, lists every country.

Environment:
  COUNTRIES_URL   endpoint to fetch from (overrides config.json)
  RUST_LOG        log filter, e.g. RUST_LOG=debug";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }
    let query = args.join(" ");

    init_tracing();

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Ok(url) = std::env::var(URL_ENV_VAR) {
        config.countries_url = Some(url);
    }
    info!(endpoint = config.endpoint(), "Countries starting");

    let app = AppController::new(&config).context("Failed to create HTTP client")?;
    app.refresh_now()
        .await
        .context("Failed to fetch countries")?;

    let rows = app.rows(&query).await;
    for row in &rows {
        println!("{}\n", row);
    }

    let total = app.countries().await.len();
    let updated = app.last_updated_display().await;
    if query.is_empty() {
        println!("{} countries (updated {})", total, updated);
    } else {
        println!(
            "{} of {} countries match \"{}\" (updated {})",
            rows.len(),
            total,
            query,
            updated
        );
    }

    Ok(())
}
