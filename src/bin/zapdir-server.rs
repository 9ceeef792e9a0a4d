//! Development stand-in for the directory backend.
//!
//! Serves the same resources the production API exposes, seeded from the
//! crate's canned tables and applying the same query semantics, so client
//! integration tests can exercise the online path, probing, and failover
//! against a real listener.

use anyhow::Result;

#[path = "zapdir_server/types.rs"]
mod types;
#[path = "zapdir_server/http_error.rs"]
mod http_error;
#[path = "zapdir_server/handlers_public.rs"]
mod handlers_public;
#[path = "zapdir_server/handlers_auth.rs"]
mod handlers_auth;
#[path = "zapdir_server/handlers_admin.rs"]
mod handlers_admin;
#[path = "zapdir_server/routes.rs"]
mod routes;
#[path = "zapdir_server/runtime.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    runtime::run().await
}
