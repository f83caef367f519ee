//! demodash — web host for the demographic migration dashboard
//!
//! Loads the migration dataset once, then serves a single page with a
//! bubble map and a bar chart that follow three filter widgets.
//!
//! Usage examples
//! --------------
//!
//! - Serve on the default port (8050, all interfaces)
//!   $ demodash --input data/migration.csv
//!
//! - Serve on port 80 with debug logging
//!   $ demodash --debug serve --port 80
//!
//! - Print a dataset summary
//!   $ demodash -i data/migration.csv.gz stats
//!
//! Data source
//! -----------
//!
//! The input is a CSV (or gzipped CSV) with the columns `CITY`, `COUNTRY`,
//! `NATIVE_MOTHER_COUNTRY_CODE`, `LAT`, `LON`, `YEAR` and `POPULATION`. A
//! missing or malformed file stops the process before anything is served.
mod args;
mod page;
mod routes;

use crate::args::{CliArgs, Commands, ServeArgs};
use anyhow::Context;
use clap::Parser;
use demodash_core::Table;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let input_path = args.input.unwrap_or_else(Table::default_dataset_path);

    let table = Table::load_from_path(&input_path)
        .with_context(|| format!("failed to load dataset {}", input_path.display()))?;

    match args.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Stats => {
            let stats = table.stats();
            println!("Dataset statistics:");
            println!("  Rows: {}", stats.rows);
            println!("  Countries: {}", stats.countries);
            println!("  Metro areas: {}", stats.cities);
            match (stats.first_year, stats.last_year) {
                (Some(first), Some(last)) => {
                    println!("  Years: {} ({first} - {last})", stats.years)
                }
                _ => println!("  Years: 0"),
            }
            println!("  Total population: {}", stats.total_population);
        }

        Commands::Serve(serve) => {
            let addr: SocketAddr = format!("{}:{}", serve.host, serve.port)
                .parse()
                .with_context(|| format!("invalid host/port {}:{}", serve.host, serve.port))?;

            let app = routes::router(routes::AppState::new(Arc::new(table)));

            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("bind {addr} failed"))?;
            info!(%addr, "dashboard listening on http://{addr}");

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
                .context("server failed")?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
