//! Request descriptors, dispatch results, and wire DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub(super) fn as_reqwest(&self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    pub fn is_mutation(&self) -> bool {
        !matches!(self, Method::Get)
    }
}

/// One resource operation, constructed fresh per call.
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }
}

/// Where a dispatch result came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Live,
    Offline,
}

#[derive(Clone, Debug)]
pub struct Dispatched {
    pub payload: Value,
    pub source: Source,
}

impl Dispatched {
    /// Whether a mutation was durably applied. Live acknowledgments default
    /// to persisted; offline ones carry an explicit `persisted: false`.
    pub fn persisted(&self) -> bool {
        self.payload
            .get("persisted")
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub business_name: String,
    pub phone: String,
    pub category_id: i64,
    pub city_id: i64,
    pub address: String,
    pub description: String,
}

fn default_persisted() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub error: Option<String>,

    /// False only for the synthetic offline acknowledgment.
    #[serde(default = "default_persisted")]
    pub persisted: bool,
}

impl LoginResponse {
    pub fn authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

#[derive(Clone, Debug, Default)]
pub struct BusinessQuery {
    pub category_id: Option<i64>,
    pub city_id: Option<i64>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl BusinessQuery {
    pub(super) fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.category_id {
            pairs.push(("category_id".to_string(), id.to_string()));
        }
        if let Some(id) = self.city_id {
            pairs.push(("city_id".to_string(), id.to_string()));
        }
        if let Some(term) = &self.search {
            pairs.push(("search".to_string(), term.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        pairs
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct NewReview {
    pub business_id: i64,
    pub author: String,
    pub rating: u8,
    pub comment: String,
}

/// Caller-facing acknowledgment for mutating operations.
#[derive(Clone, Debug)]
pub struct Ack {
    pub success: bool,
    pub persisted: bool,
    pub message: Option<String>,
}

impl Ack {
    pub(super) fn from_dispatched(d: &Dispatched) -> Self {
        let message = d
            .payload
            .get("message")
            .or_else(|| d.payload.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let success = d
            .payload
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(d.payload.get("error").is_none());
        Self {
            success,
            persisted: d.persisted(),
            message,
        }
    }
}

#[cfg(test)]
#[path = "../tests/api/types_tests.rs"]
mod tests;
