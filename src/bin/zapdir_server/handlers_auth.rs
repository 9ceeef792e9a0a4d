use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use serde_json::{Value, json};

use super::http_error::{not_found, unauthorized};
use super::types::{AppState, Subject};

pub(crate) async fn require_bearer(
    State(state): State<Arc<AppState>>,
    mut req: axum::extract::Request,
    next: Next,
) -> Response {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return unauthorized();
    };

    let Ok(value) = value.to_str() else {
        return unauthorized();
    };

    let Some(token) = value.strip_prefix("Bearer ") else {
        return unauthorized();
    };

    let owner = {
        let tokens = state.tokens.read().await;
        tokens.get(token).copied()
    };
    let Some(owner) = owner else {
        return unauthorized();
    };

    req.extensions_mut().insert(Subject {
        user_id: owner.user_id,
        admin: owner.admin,
    });
    next.run(req).await
}

pub(crate) async fn dashboard(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
) -> Result<Json<Value>, Response> {
    let users = state.users.read().await;
    let Some(user) = users.iter().find(|u| u.id == subject.user_id) else {
        return Err(not_found());
    };

    Ok(Json(json!({
        "user": {
            "id": user.id,
            "email": user.email,
            "business_name": user.business_name,
            "phone": user.phone,
            "address": user.address,
        },
        "stats": {
            "total_views": 156,
            "whatsapp_clicks": 23,
            "rating": 4.5,
        },
    })))
}
