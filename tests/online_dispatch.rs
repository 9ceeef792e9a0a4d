mod common;

use anyhow::{Context, Result};

use zapdir::api::{BusinessQuery, NewReview, RegisterRequest, RequestDescriptor, Source};
use zapdir::connectivity::ConnectivityMode;
use zapdir::offline::OfflineDataset;

#[test]
fn first_reachable_candidate_serves_live_payloads_unmodified() -> Result<()> {
    let server = common::spawn_server()?;
    let client = common::client_for(&[common::DEAD_URL, &server.base_url])?;

    let dispatched = client.execute(&RequestDescriptor::get("/categories"))?;
    assert_eq!(dispatched.source, Source::Live);
    assert_eq!(client.mode(), ConnectivityMode::Online);
    assert_eq!(client.base_url().as_deref(), Some(server.base_url.as_str()));

    // The payload is exactly what the endpoint serves.
    let direct: serde_json::Value = reqwest::blocking::Client::new()
        .get(format!("{}/categories", server.base_url))
        .send()
        .context("direct GET /categories")?
        .json()
        .context("parse direct categories")?;
    assert_eq!(dispatched.payload, direct);

    Ok(())
}

#[test]
fn live_and_offline_filtering_agree_on_every_supported_key() -> Result<()> {
    let server = common::spawn_server()?;
    let client = common::client_for(&[&server.base_url])?;
    let dataset = OfflineDataset::new();

    let descriptors = [
        RequestDescriptor::get("/businesses").query("category_id", 1),
        RequestDescriptor::get("/businesses").query("city_id", 10),
        RequestDescriptor::get("/businesses").query("search", "delivery"),
        RequestDescriptor::get("/businesses")
            .query("category_id", 1)
            .query("search", "hamburgueria"),
        RequestDescriptor::get("/businesses")
            .query("page", 2)
            .query("per_page", 2),
        RequestDescriptor::get("/businesses/nearby")
            .query("lat", -23.438)
            .query("lng", -45.073)
            .query("radius", 5),
    ];

    for desc in descriptors {
        let live = client.execute(&desc)?;
        assert_eq!(live.source, Source::Live, "for {}", desc.path);
        let canned = dataset.filter(&desc.path, &desc.query);
        assert_eq!(live.payload, canned, "for {} {:?}", desc.path, desc.query);
    }

    Ok(())
}

#[test]
fn register_login_dashboard_roundtrip() -> Result<()> {
    let server = common::spawn_server()?;
    let client = common::client_for(&[&server.base_url])?;

    let ack = client.register(&RegisterRequest {
        email: "dona@quitanda.com".to_string(),
        password: "segredo".to_string(),
        business_name: "Quitanda da Dona".to_string(),
        phone: "12911112222".to_string(),
        category_id: 3,
        city_id: 10,
        address: "Rua das Flores, 1".to_string(),
        description: "Hortifruti de bairro".to_string(),
    })?;
    assert!(ack.success);
    assert!(ack.persisted);

    let resp = client.login("dona@quitanda.com", "segredo")?;
    assert!(resp.authenticated());
    assert!(client.session().is_authenticated());

    let dashboard = client.dashboard()?;
    assert_eq!(
        dashboard["user"]["email"],
        serde_json::json!("dona@quitanda.com")
    );

    Ok(())
}

#[test]
fn duplicate_registration_demotes_and_serves_the_offline_ack() -> Result<()> {
    let server = common::spawn_server()?;
    let client = common::client_for(&[&server.base_url])?;

    let request = RegisterRequest {
        email: "dup@example.com".to_string(),
        password: "x".to_string(),
        business_name: "Dup".to_string(),
        phone: "12900000000".to_string(),
        category_id: 1,
        city_id: 1,
        address: "Rua A".to_string(),
        description: String::new(),
    };
    client.register(&request)?;

    // A 400 is a failed live call: the dispatcher demotes and serves the
    // offline acknowledgment instead of surfacing the error.
    let ack = client.register(&request)?;
    assert!(!ack.persisted);
    assert_eq!(client.mode(), ConnectivityMode::Offline);

    Ok(())
}

#[test]
fn live_reviews_are_persisted_and_readable() -> Result<()> {
    let server = common::spawn_server()?;
    let client = common::client_for(&[&server.base_url])?;

    let before = client.reviews(2)?.len();
    let ack = client.create_review(&NewReview {
        business_id: 2,
        author: "Beto".to_string(),
        rating: 4,
        comment: "Peça certa na primeira visita.".to_string(),
    })?;
    assert!(ack.success);
    assert!(ack.persisted);

    let after = client.reviews(2)?;
    assert_eq!(after.len(), before + 1);
    assert!(after.iter().any(|r| r.author == "Beto"));

    Ok(())
}

#[test]
fn unauthenticated_dashboard_falls_back_offline() -> Result<()> {
    let server = common::spawn_server()?;
    let client = common::client_for(&[&server.base_url])?;

    // No session: the live call answers 401, which demotes the session and
    // serves the canned dashboard stub.
    let dashboard = client.dashboard()?;
    assert_eq!(client.mode(), ConnectivityMode::Offline);
    assert!(dashboard["stats"]["total_views"].is_number());

    Ok(())
}
