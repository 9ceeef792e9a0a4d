use super::*;

#[test]
fn haversine_zero_distance() {
    assert!(haversine_km(-23.43, -45.07, -23.43, -45.07) < 1e-9);
}

#[test]
fn haversine_known_distance() {
    // São Paulo to Rio de Janeiro is roughly 360 km as the crow flies.
    let d = haversine_km(-23.5505, -46.6333, -22.9068, -43.1729);
    assert!(d > 330.0 && d < 390.0, "got {}", d);
}

#[test]
fn whatsapp_url_prefixes_country_code() {
    let url = whatsapp_url("12999887766", "Smidi Farma", None);
    assert!(url.starts_with("https://wa.me/5512999887766?text="));
}

#[test]
fn whatsapp_url_keeps_existing_country_code() {
    let url = whatsapp_url("(55) 12 99988-7766", "Smidi Farma", None);
    assert!(url.starts_with("https://wa.me/5512999887766?text="));
}

#[test]
fn whatsapp_url_mentions_location_when_given() {
    let url = whatsapp_url("12999887766", "Bendito Burguer", Some("Itaguá"));
    assert!(url.contains("Estou%20em%20Itagu%C3%A1"));
}
