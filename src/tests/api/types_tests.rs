use serde_json::json;

use super::*;

#[test]
fn descriptor_builder_accumulates_query_pairs() {
    let desc = RequestDescriptor::get("/businesses")
        .query("category_id", 1)
        .query("search", "farma");
    assert_eq!(desc.method, Method::Get);
    assert_eq!(
        desc.query,
        vec![
            ("category_id".to_string(), "1".to_string()),
            ("search".to_string(), "farma".to_string()),
        ]
    );
    assert!(desc.body.is_none());
}

#[test]
fn every_method_but_get_is_a_mutation() {
    assert!(!Method::Get.is_mutation());
    assert!(Method::Post.is_mutation());
    assert!(Method::Put.is_mutation());
    assert!(Method::Delete.is_mutation());
}

#[test]
fn live_payloads_count_as_persisted_by_default() {
    let d = Dispatched {
        payload: json!({ "message": "ok" }),
        source: Source::Live,
    };
    assert!(d.persisted());
}

#[test]
fn offline_acks_are_explicitly_unpersisted() {
    let d = Dispatched {
        payload: json!({ "success": true, "persisted": false }),
        source: Source::Offline,
    };
    assert!(!d.persisted());

    let ack = Ack::from_dispatched(&d);
    assert!(ack.success);
    assert!(!ack.persisted);
    assert_eq!(ack.message, None);
}

#[test]
fn ack_reads_the_server_error_message() {
    let d = Dispatched {
        payload: json!({ "error": "Email já cadastrado" }),
        source: Source::Live,
    };
    let ack = Ack::from_dispatched(&d);
    assert!(!ack.success);
    assert_eq!(ack.message.as_deref(), Some("Email já cadastrado"));
}

#[test]
fn login_response_offline_ack_is_unauthenticated() {
    let resp: LoginResponse =
        serde_json::from_value(json!({ "success": true, "persisted": false })).unwrap();
    assert!(!resp.authenticated());
    assert!(!resp.persisted);
}

#[test]
fn login_response_live_payload_is_authenticated_and_persisted() {
    let resp: LoginResponse = serde_json::from_value(json!({
        "access_token": "t0k3n",
        "user_id": 7,
        "business_name": "Smidi Farma",
        "email": "farma@example.com",
    }))
    .unwrap();
    assert!(resp.authenticated());
    assert!(resp.persisted);
    assert_eq!(resp.user_id, Some(7));
}

#[test]
fn business_query_emits_only_set_keys() {
    let query = BusinessQuery {
        category_id: Some(2),
        search: Some("auto".to_string()),
        ..Default::default()
    };
    assert_eq!(
        query.to_pairs(),
        vec![
            ("category_id".to_string(), "2".to_string()),
            ("search".to_string(), "auto".to_string()),
        ]
    );
}
