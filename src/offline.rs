//! Canned records served when no backend is reachable.
//!
//! The tables are static for the process lifetime. Reads go through
//! [`OfflineDataset::filter`], which applies the same query semantics the
//! live API implements, so a caller cannot tell the two modes apart by
//! filtering behavior. Writes are accepted but never persisted; the
//! acknowledgment says so explicitly.

use serde_json::{Value, json};

use crate::model::{Business, Category, City, Review};

mod data;
mod filter;

pub use self::data::{seed_businesses, seed_categories, seed_cities, seed_reviews};
pub use self::filter::{
    DEFAULT_NEARBY_RADIUS_KM, DEFAULT_PER_PAGE, filter_businesses, nearby_businesses, paginate,
    query_value,
};

pub struct OfflineDataset {
    categories: Vec<Category>,
    cities: Vec<City>,
    businesses: Vec<Business>,
    reviews: Vec<Review>,
}

impl OfflineDataset {
    pub fn new() -> Self {
        Self {
            categories: data::seed_categories(),
            cities: data::seed_cities(),
            businesses: data::seed_businesses(),
            reviews: data::seed_reviews(),
        }
    }

    /// Resolves a GET-shaped read against the canned tables.
    ///
    /// Unknown resource paths produce an empty array, never an error.
    /// Recognized filters are conjunctive; unrecognized query keys are
    /// ignored.
    pub fn filter(&self, path: &str, query: &[(String, String)]) -> Value {
        match path.trim_end_matches('/') {
            "/categories" | "/admin/categories" => json!(self.categories),
            "/cities" | "/admin/cities" => json!(self.cities),
            "/businesses" => {
                let matched = filter::filter_businesses(&self.businesses, query);
                json!(filter::paginate(&matched, query))
            }
            "/businesses/nearby" => {
                json!(filter::nearby_businesses(&self.businesses, query))
            }
            "/dashboard" => self.dashboard(),
            "/admin/dashboard" => self.admin_dashboard(),
            "/admin/users" => json!([]),
            "/admin/reviews" => json!(self.reviews),
            other => {
                if let Some(id) = strip_id(other, "/businesses/") {
                    return self
                        .businesses
                        .iter()
                        .find(|b| b.id == id)
                        .map(|b| json!(b))
                        .unwrap_or(Value::Null);
                }
                if let Some(business_id) = strip_id(other, "/reviews/") {
                    let reviews: Vec<&Review> = self
                        .reviews
                        .iter()
                        .filter(|r| r.business_id == business_id)
                        .collect();
                    return json!(reviews);
                }
                json!([])
            }
        }
    }

    /// Acknowledgment for a mutating operation served offline. The change is
    /// not applied anywhere; `persisted: false` makes that visible to the
    /// caller instead of faking durability.
    pub fn mutation_ack(&self) -> Value {
        json!({ "success": true, "persisted": false })
    }

    fn dashboard(&self) -> Value {
        json!({
            "user": {
                "id": Value::Null,
                "email": Value::Null,
                "business_name": Value::Null,
                "phone": Value::Null,
                "address": Value::Null,
            },
            "stats": {
                "total_views": 156,
                "whatsapp_clicks": 23,
                "rating": 4.5,
            },
        })
    }

    fn admin_dashboard(&self) -> Value {
        json!({
            "stats": {
                "total_users": 0,
                "active_users": 0,
                "inactive_users": 0,
                "total_reviews": self.reviews.len(),
                "pending_reviews": 0,
                "approved_reviews": self.reviews.len(),
                "total_cities": self.cities.len(),
                "total_categories": self.categories.len(),
            },
        })
    }
}

impl Default for OfflineDataset {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_id(path: &str, prefix: &str) -> Option<i64> {
    path.strip_prefix(prefix)?.parse().ok()
}

#[cfg(test)]
#[path = "tests/offline_tests.rs"]
mod tests;
