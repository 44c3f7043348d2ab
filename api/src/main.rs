use std::{sync::Arc, time::Duration};

use clap::Parser;
use dotenv::dotenv;
use foodswap_core::application::sweeper::spawn_expiry_sweeper;
use tracing::info;

use crate::{
    application::http::server::http_server::{router, state},
    args::Args,
};

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = Arc::new(Args::parse());

    init_tracing(&args);

    let state = state(args.clone()).await?;

    spawn_expiry_sweeper(
        state.service.clone(),
        Duration::from_secs(args.sweep_interval_seconds),
    );

    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(args: &Args) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if args.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}
