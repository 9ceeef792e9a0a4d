mod common;

use anyhow::Result;

use zapdir::api::{RequestDescriptor, Source};
use zapdir::connectivity::ConnectivityMode;
use zapdir::offline::OfflineDataset;

#[test]
fn failed_live_call_demotes_and_serves_the_offline_equivalent() -> Result<()> {
    let server = common::spawn_server()?;
    let client = common::client_for(&[&server.base_url])?;

    // Warm up online.
    let first = client.execute(&RequestDescriptor::get("/categories"))?;
    assert_eq!(first.source, Source::Live);
    assert_eq!(client.mode(), ConnectivityMode::Online);

    // Kill the backend mid-session.
    drop(server);

    // The very call that fails is answered from the canned dataset.
    let desc = RequestDescriptor::get("/businesses").query("category_id", 1);
    let dispatched = client.execute(&desc)?;
    assert_eq!(dispatched.source, Source::Offline);
    assert_eq!(client.mode(), ConnectivityMode::Offline);
    assert_eq!(client.base_url(), None);

    let expected = OfflineDataset::new().filter("/businesses", &desc.query);
    assert_eq!(dispatched.payload, expected);

    Ok(())
}

#[test]
fn demotion_is_sticky_until_a_forced_reprobe() -> Result<()> {
    let server = common::spawn_server()?;
    let client = common::client_for(&[&server.base_url])?;

    client.execute(&RequestDescriptor::get("/categories"))?;
    drop(server);
    client.execute(&RequestDescriptor::get("/cities"))?;
    assert_eq!(client.mode(), ConnectivityMode::Offline);

    // No automatic re-probe: every later call stays offline.
    for _ in 0..3 {
        let d = client.execute(&RequestDescriptor::get("/categories"))?;
        assert_eq!(d.source, Source::Offline);
    }
    assert_eq!(client.mode(), ConnectivityMode::Offline);

    // Only an explicit reset makes the next call scan again.
    client.force_reprobe();
    assert_eq!(client.mode(), ConnectivityMode::Unknown);

    Ok(())
}

#[test]
fn mode_change_listener_observes_the_demotion() -> Result<()> {
    use std::sync::{Arc, Mutex};

    let server = common::spawn_server()?;
    let client = common::client_for(&[&server.base_url])?;

    let transitions: Arc<Mutex<Vec<ConnectivityMode>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = transitions.clone();
    client.on_connectivity_change(move |mode| {
        sink.lock().unwrap().push(mode);
    });

    client.execute(&RequestDescriptor::get("/categories"))?;
    drop(server);
    client.execute(&RequestDescriptor::get("/categories"))?;

    let seen = transitions.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![ConnectivityMode::Online, ConnectivityMode::Offline]
    );

    Ok(())
}
