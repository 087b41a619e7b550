use crate::opt::{Cli, Commands, Run};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use kokoro_core::journal::{JournalStore, SharedJournalStore};
use kokoro_utils::net::create_listener;
use kokoro_utils::tracing::TracingConfig;
use std::net::{IpAddr, Ipv4Addr};

mod app;
mod opt;
mod routes;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

async fn run(opt: Run) -> Result<()> {
    let _guard = kokoro_utils::tracing::setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(opt.sentry_dsn)
            .env(opt.env)
            .format(opt.log_format)
            .build(),
    )?;

    // Entries live for the lifetime of the process
    let store = SharedJournalStore::new(JournalStore::new());
    let app = app::create_app(store, &opt.origins)?;

    let listener = create_listener((opt.host, opt.port), (DEFAULT_HOST, DEFAULT_PORT)).await?;
    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("app stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(opt) => run(opt).await?,
    }

    Ok(())
}
