//! HTTP server command
//!
//! Usage: trivia serve [--host <HOST>] [--port <PORT>]

use anyhow::Context;
use clap::Args;
use tokio::net::TcpListener;
use trivia_api::{AppState, Settings};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind, overriding the settings
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overriding the settings
    #[arg(long)]
    pub port: Option<u16>,
}

pub fn execute(args: ServeArgs, mut settings: Settings) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }

    // schema is brought up to date once; requests open their own handles
    drop(super::open_migrated(&settings)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async move {
        let address = settings.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {}", address))?;
        let state = AppState::new(settings.database.path.clone());
        trivia_api::serve(listener, state)
            .await
            .context("server error")
    })
}
