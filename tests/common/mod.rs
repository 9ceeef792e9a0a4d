#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use zapdir::api::{ApiClient, ApiClientOptions};
use zapdir::registry::EndpointRegistry;

/// A candidate that refuses connections immediately.
pub const DEAD_URL: &str = "http://127.0.0.1:1/api";

pub struct ServerGuard {
    /// Probe-ready base URL, `/api` prefix included.
    pub base_url: String,
    _tmp: tempfile::TempDir,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub fn spawn_server() -> Result<ServerGuard> {
    let tmp = tempfile::tempdir().context("create server tempdir")?;
    let addr_file = tmp.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_zapdir-server"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().unwrap(),
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn zapdir-server")?;

    let base_url = read_addr_file(&addr_file)?;
    wait_for_health(&base_url)?;

    Ok(ServerGuard {
        base_url,
        _tmp: tmp,
        child,
    })
}

fn read_addr_file(addr_file: &std::path::Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}/api", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_health(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("server did not become healthy at {}/test-db", base_url);
        }
        match client.get(format!("{}/test-db", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

/// Client over an explicit candidate list, with timeouts tightened so tests
/// that exercise unreachable candidates stay fast.
pub fn client_for(urls: &[&str]) -> Result<ApiClient> {
    let registry = EndpointRegistry::new(urls.iter().map(|s| s.to_string()).collect());
    ApiClient::with_options(
        registry,
        ApiClientOptions {
            probe_timeout: Duration::from_secs(2),
            request_timeout: Duration::from_secs(5),
        },
    )
}
