use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde::Deserialize;
use serde_json::{Value, json};

use zapdir::model::Review;
use zapdir::offline;

use super::http_error::{bad_request, internal_error, not_found};
use super::types::{AppState, TokenOwner, UserRecord, mint_token, next_id, now_rfc3339};

pub(crate) async fn root_status() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Peça no Zap API funcionando!",
    }))
}

pub(crate) async fn test_db() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!(*state.categories.read().await))
}

pub(crate) async fn list_cities(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!(*state.cities.read().await))
}

pub(crate) async fn list_businesses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<Vec<(String, String)>>,
) -> Json<Value> {
    let businesses = state.businesses.read().await;
    let matched = offline::filter_businesses(&businesses, &query);
    Json(json!(offline::paginate(&matched, &query)))
}

pub(crate) async fn nearby_businesses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<Vec<(String, String)>>,
) -> Json<Value> {
    let businesses = state.businesses.read().await;
    Json(json!(offline::nearby_businesses(&businesses, &query)))
}

pub(crate) async fn get_business(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, Response> {
    let businesses = state.businesses.read().await;
    match businesses.iter().find(|b| b.id == id) {
        Some(b) => Ok(Json(json!(b))),
        None => Err(not_found()),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterPayload {
    email: String,
    password: String,
    business_name: String,
    phone: String,
    category_id: i64,
    city_id: i64,
    address: String,
    #[serde(default)]
    description: String,
}

pub(crate) async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<Value>), Response> {
    let mut users = state.users.write().await;
    if users.iter().any(|u| u.email == payload.email) {
        return Err(bad_request("Email já cadastrado"));
    }

    let id = next_id(&users, |u| u.id);
    users.push(UserRecord {
        id,
        email: payload.email,
        password: payload.password,
        business_name: payload.business_name,
        phone: payload.phone,
        category_id: payload.category_id,
        city_id: payload.city_id,
        address: payload.address,
        description: payload.description,
        active: true,
        created_at: now_rfc3339(),
    });

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Usuário cadastrado com sucesso!" })),
    ))
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginPayload {
    email: String,
    password: String,
}

pub(crate) async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<Value>, Response> {
    let users = state.users.read().await;
    let Some(user) = users
        .iter()
        .find(|u| u.email == payload.email && u.password == payload.password && u.active)
    else {
        return Err(unauthorized_login());
    };

    let token = mint_token().map_err(internal_error)?;
    state.tokens.write().await.insert(
        token.clone(),
        TokenOwner {
            user_id: user.id,
            admin: false,
        },
    );

    Ok(Json(json!({
        "access_token": token,
        "user_id": user.id,
        "business_name": user.business_name,
        "email": user.email,
    })))
}

fn unauthorized_login() -> Response {
    use axum::response::IntoResponse;
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Email ou senha inválidos" })),
    )
        .into_response()
}

pub(crate) async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<i64>,
) -> Json<Value> {
    let reviews = state.reviews.read().await;
    let matched: Vec<&Review> = reviews
        .iter()
        .filter(|r| r.business_id == business_id)
        .collect();
    Json(json!(matched))
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewPayload {
    business_id: i64,
    author: String,
    rating: u8,
    #[serde(default)]
    comment: String,
}

pub(crate) async fn create_review(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ReviewPayload>,
) -> Result<(StatusCode, Json<Value>), Response> {
    if payload.rating == 0 || payload.rating > 5 {
        return Err(bad_request("rating must be between 1 and 5"));
    }

    let mut reviews = state.reviews.write().await;
    let id = next_id(&reviews, |r| r.id);
    let review = Review {
        id,
        business_id: payload.business_id,
        author: payload.author,
        rating: payload.rating,
        comment: payload.comment,
        created_at: now_rfc3339(),
    };
    reviews.push(review.clone());

    Ok((StatusCode::CREATED, Json(json!(review))))
}
