//! Ordered list of candidate backend base URLs.

/// Candidate base URLs in priority order: local development endpoints first,
/// the public production deployment last. The first reachable entry wins.
///
/// Each entry already carries the common `/api` path prefix, so request paths
/// are appended verbatim.
#[derive(Clone, Debug)]
pub struct EndpointRegistry {
    candidates: Vec<String>,
}

pub const DEFAULT_CANDIDATES: [&str; 3] = [
    "http://localhost:5000/api",
    "http://127.0.0.1:5000/api",
    "https://pecanozap-production.up.railway.app/api",
];

impl EndpointRegistry {
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
