use std::collections::HashMap;

use anyhow::Result;
use serde::Serialize;
use tokio::sync::RwLock;

use zapdir::model::{Business, Category, City, Review};
use zapdir::offline;

/// Registered business owner. Dev server only: credentials live in memory
/// and the password is stored as received.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct UserRecord {
    pub(crate) id: i64,
    pub(crate) email: String,
    #[serde(skip_serializing)]
    pub(crate) password: String,
    pub(crate) business_name: String,
    pub(crate) phone: String,
    pub(crate) category_id: i64,
    pub(crate) city_id: i64,
    pub(crate) address: String,
    pub(crate) description: String,
    pub(crate) active: bool,
    pub(crate) created_at: String,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct TokenOwner {
    pub(crate) user_id: i64,
    pub(crate) admin: bool,
}

/// Identity attached to a request by the bearer middleware.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Subject {
    pub(crate) user_id: i64,
    pub(crate) admin: bool,
}

pub(crate) struct AppState {
    pub(crate) categories: RwLock<Vec<Category>>,
    pub(crate) cities: RwLock<Vec<City>>,
    pub(crate) businesses: RwLock<Vec<Business>>,
    pub(crate) reviews: RwLock<Vec<Review>>,
    pub(crate) users: RwLock<Vec<UserRecord>>,
    pub(crate) tokens: RwLock<HashMap<String, TokenOwner>>,
    pub(crate) admin_email: String,
    pub(crate) admin_password: String,
}

impl AppState {
    pub(crate) fn seeded(admin_email: String, admin_password: String) -> Self {
        Self {
            categories: RwLock::new(offline::seed_categories()),
            cities: RwLock::new(offline::seed_cities()),
            businesses: RwLock::new(offline::seed_businesses()),
            reviews: RwLock::new(offline::seed_reviews()),
            users: RwLock::new(Vec::new()),
            tokens: RwLock::new(HashMap::new()),
            admin_email,
            admin_password,
        }
    }
}

pub(crate) fn mint_token() -> Result<String> {
    let mut bytes = [0u8; 16];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;
    Ok(bytes.iter().map(|b| format!("{:02x}", b)).collect())
}

pub(crate) fn now_rfc3339() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::new())
}

pub(crate) fn next_id<T>(items: &[T], id_of: impl Fn(&T) -> i64) -> i64 {
    items.iter().map(&id_of).max().unwrap_or(0) + 1
}
