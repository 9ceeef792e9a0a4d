use super::*;

#[test]
fn default_registry_prefers_local_endpoints() {
    let registry = EndpointRegistry::default();
    let candidates: Vec<&str> = registry.iter().collect();
    assert_eq!(candidates.len(), 3);
    assert!(candidates[0].starts_with("http://localhost"));
    assert!(candidates[2].starts_with("https://"));
}

#[test]
fn iteration_preserves_insertion_order() {
    let registry = EndpointRegistry::new(vec![
        "http://b:1/api".to_string(),
        "http://a:1/api".to_string(),
        "http://b:1/api".to_string(),
    ]);
    let candidates: Vec<&str> = registry.iter().collect();
    assert_eq!(candidates, ["http://b:1/api", "http://a:1/api", "http://b:1/api"]);
}

#[test]
fn empty_registry_is_allowed() {
    let registry = EndpointRegistry::new(Vec::new());
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}
