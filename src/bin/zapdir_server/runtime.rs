use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use super::routes::app_router;
use super::types::AppState;

#[derive(Parser)]
#[command(name = "zapdir-server")]
#[command(about = "Directory backend stand-in (development)", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Admin panel credentials
    #[arg(long, default_value = "admin@pecanozap.com.br")]
    admin_email: String,

    #[arg(long, default_value = "admin")]
    admin_password: String,
}

pub(crate) async fn run() -> Result<()> {
    let args = Args::parse();

    let state = Arc::new(AppState::seeded(
        args.admin_email.clone(),
        args.admin_password.clone(),
    ));
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    eprintln!("zapdir-server listening on {}", local_addr);

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
