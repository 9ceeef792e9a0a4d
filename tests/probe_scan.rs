mod common;

use std::time::Duration;

use anyhow::Result;

use zapdir::probe::probe;
use zapdir::registry::EndpointRegistry;

fn http() -> reqwest::blocking::Client {
    reqwest::blocking::Client::new()
}

#[test]
fn probe_selects_the_first_reachable_candidate() -> Result<()> {
    let first = common::spawn_server()?;
    let second = common::spawn_server()?;

    // Both candidates answer; registry order decides, not latency.
    let registry = EndpointRegistry::new(vec![first.base_url.clone(), second.base_url.clone()]);
    let selected = probe(&http(), &registry, Duration::from_secs(2));
    assert_eq!(selected.as_deref(), Some(first.base_url.as_str()));

    Ok(())
}

#[test]
fn probe_skips_dead_candidates_in_order() -> Result<()> {
    let live = common::spawn_server()?;

    let registry = EndpointRegistry::new(vec![
        common::DEAD_URL.to_string(),
        live.base_url.clone(),
    ]);
    let selected = probe(&http(), &registry, Duration::from_secs(2));
    assert_eq!(selected.as_deref(), Some(live.base_url.as_str()));

    Ok(())
}

#[test]
fn probe_exhausts_every_candidate_and_reports_none() {
    let registry = EndpointRegistry::new(vec![
        common::DEAD_URL.to_string(),
        "http://127.0.0.1:2/api".to_string(),
    ]);
    assert_eq!(probe(&http(), &registry, Duration::from_secs(2)), None);
}

#[test]
fn probe_of_an_empty_registry_is_none() {
    let registry = EndpointRegistry::new(Vec::new());
    assert_eq!(probe(&http(), &registry, Duration::from_secs(2)), None);
}
