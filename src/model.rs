use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub state: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub city: City,
    pub phone: String,
    pub address: String,
    pub description: String,
    pub rating: f64,

    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub business_id: i64,
    pub author: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: String,
}

/// Great-circle distance between two coordinates, in kilometers.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Builds a `wa.me` deep link for opening a WhatsApp chat with a business.
/// Numbers without a country prefix get the Brazilian one.
pub fn whatsapp_url(phone: &str, business_name: &str, user_location: Option<&str>) -> String {
    let clean: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let full = if clean.starts_with("55") {
        clean
    } else {
        format!("55{}", clean)
    };

    let mut message = format!(
        "Olá! Vi o {} no Peça no Zap e gostaria de mais informações.",
        business_name
    );
    if let Some(location) = user_location {
        message.push_str(&format!(" Estou em {}.", location));
    }

    format!("https://wa.me/{}?text={}", full, urlencode(&message))
}

fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(*b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
