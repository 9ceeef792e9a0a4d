//! Backend reachability scan.

use std::time::Duration;

use tracing::debug;

use crate::registry::EndpointRegistry;

/// Per-candidate budget for the health check.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Walks the registry in priority order and returns the first candidate whose
/// `GET <base>/test-db` health check answers 2xx within `timeout`.
///
/// First match wins; later candidates are never consulted once one answers.
/// A timeout counts the same as a connection error: the candidate is skipped
/// and the scan moves on. `None` means every candidate was attempted exactly
/// once and none was reachable. Connectivity state is left to the caller so
/// the scan stays independently testable.
pub fn probe(
    client: &reqwest::blocking::Client,
    registry: &EndpointRegistry,
    timeout: Duration,
) -> Option<String> {
    for base in registry.iter() {
        match client
            .get(format!("{}/test-db", base))
            .timeout(timeout)
            .send()
        {
            Ok(resp) if resp.status().is_success() => {
                debug!(base, "probe hit");
                return Some(base.to_string());
            }
            Ok(resp) => {
                debug!(base, status = %resp.status(), "probe rejected");
            }
            Err(err) => {
                debug!(base, error = %err, "probe unreachable");
            }
        }
    }
    None
}
