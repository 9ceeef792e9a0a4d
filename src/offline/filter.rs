//! Query semantics shared between modes.
//!
//! Filters are conjunctive: a business must satisfy every recognized key to
//! be included. Unrecognized keys are ignored. The development server applies
//! the same rules to its live tables, which is what keeps the two code paths
//! equivalent for any supported query.

use crate::model::{Business, haversine_km};

pub const DEFAULT_PER_PAGE: usize = 20;
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 10.0;

pub fn filter_businesses<'a>(
    businesses: &'a [Business],
    query: &[(String, String)],
) -> Vec<&'a Business> {
    let category_id = query_value(query, "category_id").map(parse_id);
    let city_id = query_value(query, "city_id").map(parse_id);
    let search = query_value(query, "search").map(str::to_lowercase);

    businesses
        .iter()
        .filter(|b| match category_id {
            Some(Some(id)) => b.category.id == id,
            // An unparseable id matches no record rather than erroring.
            Some(None) => false,
            None => true,
        })
        .filter(|b| match city_id {
            Some(Some(id)) => b.city.id == id,
            Some(None) => false,
            None => true,
        })
        .filter(|b| match &search {
            Some(term) => {
                b.name.to_lowercase().contains(term)
                    || b.description.to_lowercase().contains(term)
            }
            None => true,
        })
        .collect()
}

/// Applies `page`/`per_page` when either key is present; otherwise the full
/// sequence passes through. Pages are 1-based.
pub fn paginate<'a>(matched: &[&'a Business], query: &[(String, String)]) -> Vec<&'a Business> {
    let page = query_value(query, "page").and_then(|v| v.parse::<usize>().ok());
    let per_page = query_value(query, "per_page").and_then(|v| v.parse::<usize>().ok());

    if page.is_none() && per_page.is_none() {
        return matched.to_vec();
    }

    let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);
    let page = page.unwrap_or(1).max(1);
    matched
        .iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .copied()
        .collect()
}

/// Radius search around `lat`/`lng`. Records without coordinates never match;
/// a missing or unparseable center matches nothing.
pub fn nearby_businesses<'a>(
    businesses: &'a [Business],
    query: &[(String, String)],
) -> Vec<&'a Business> {
    let lat = query_value(query, "lat").and_then(|v| v.parse::<f64>().ok());
    let lng = query_value(query, "lng").and_then(|v| v.parse::<f64>().ok());
    let radius = query_value(query, "radius")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(DEFAULT_NEARBY_RADIUS_KM);

    let (Some(lat), Some(lng)) = (lat, lng) else {
        return Vec::new();
    };

    businesses
        .iter()
        .filter(|b| match (b.lat, b.lng) {
            (Some(b_lat), Some(b_lng)) => haversine_km(lat, lng, b_lat, b_lng) <= radius,
            _ => false,
        })
        .collect()
}

pub fn query_value<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}
