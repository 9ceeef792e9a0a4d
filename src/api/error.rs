use thiserror::Error;

/// Failure taxonomy for one live attempt. The dispatcher recovers from every
/// variant by demoting to offline mode and serving the canned dataset, so
/// these never reach UI callers.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Connection refused, DNS failure, or timeout. All count the same.
    #[error("backend unreachable ({0})")]
    Unreachable(String),

    /// Non-2xx answer; carries the server's structured message when present.
    #[error("http {status} ({})", message.as_deref().unwrap_or("no detail"))]
    Http { status: u16, message: Option<String> },

    /// 2xx with a body that was declared JSON but does not parse.
    #[error("malformed response body")]
    MalformedResponse,
}

impl RequestError {
    pub(super) fn from_transport(err: reqwest::Error) -> Self {
        Self::Unreachable(err.to_string())
    }
}
