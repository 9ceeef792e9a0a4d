use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use serde::Deserialize;
use serde_json::{Value, json};

use zapdir::model::{Category, City};

use super::http_error::{forbidden, internal_error, not_found, unauthorized};
use super::types::{AppState, Subject, TokenOwner, mint_token, next_id};

pub(crate) async fn require_admin(
    Extension(subject): Extension<Subject>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    if !subject.admin {
        return forbidden();
    }
    next.run(req).await
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdminLoginPayload {
    email: String,
    password: String,
}

pub(crate) async fn admin_login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AdminLoginPayload>,
) -> Result<Json<Value>, Response> {
    if payload.email != state.admin_email || payload.password != state.admin_password {
        return Err(unauthorized());
    }

    let token = mint_token().map_err(internal_error)?;
    state.tokens.write().await.insert(
        token.clone(),
        TokenOwner {
            user_id: 0,
            admin: true,
        },
    );

    Ok(Json(json!({
        "access_token": token,
        "email": state.admin_email,
    })))
}

pub(crate) async fn admin_dashboard(State(state): State<Arc<AppState>>) -> Json<Value> {
    let users = state.users.read().await;
    let reviews = state.reviews.read().await;
    let cities = state.cities.read().await;
    let categories = state.categories.read().await;

    let active = users.iter().filter(|u| u.active).count();
    Json(json!({
        "stats": {
            "total_users": users.len(),
            "active_users": active,
            "inactive_users": users.len() - active,
            "total_reviews": reviews.len(),
            "pending_reviews": 0,
            "approved_reviews": reviews.len(),
            "total_cities": cities.len(),
            "total_categories": categories.len(),
        },
    }))
}

pub(crate) async fn admin_list_users(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!(*state.users.read().await))
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserStatusPayload {
    active: bool,
}

pub(crate) async fn admin_update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UserStatusPayload>,
) -> Result<Json<Value>, Response> {
    let mut users = state.users.write().await;
    let Some(user) = users.iter_mut().find(|u| u.id == id) else {
        return Err(not_found());
    };
    user.active = payload.active;
    Ok(Json(json!({ "success": true })))
}

pub(crate) async fn admin_delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, Response> {
    let mut users = state.users.write().await;
    let before = users.len();
    users.retain(|u| u.id != id);
    if users.len() == before {
        return Err(not_found());
    }
    Ok(Json(json!({ "success": true })))
}

pub(crate) async fn admin_list_cities(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!(*state.cities.read().await))
}

#[derive(Debug, Deserialize)]
pub(crate) struct CityPayload {
    name: String,
    state: String,
}

pub(crate) async fn admin_create_city(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CityPayload>,
) -> (StatusCode, Json<Value>) {
    let mut cities = state.cities.write().await;
    let city = City {
        id: next_id(&cities, |c| c.id),
        name: payload.name,
        state: payload.state,
    };
    cities.push(city.clone());
    (StatusCode::CREATED, Json(json!(city)))
}

pub(crate) async fn admin_update_city(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<CityPayload>,
) -> Result<Json<Value>, Response> {
    let mut cities = state.cities.write().await;
    let Some(city) = cities.iter_mut().find(|c| c.id == id) else {
        return Err(not_found());
    };
    city.name = payload.name;
    city.state = payload.state;
    Ok(Json(json!(city.clone())))
}

pub(crate) async fn admin_delete_city(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, Response> {
    let mut cities = state.cities.write().await;
    let before = cities.len();
    cities.retain(|c| c.id != id);
    if cities.len() == before {
        return Err(not_found());
    }
    Ok(Json(json!({ "success": true })))
}

pub(crate) async fn admin_list_categories(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!(*state.categories.read().await))
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryPayload {
    name: String,
    #[serde(default = "default_icon")]
    icon: String,
}

fn default_icon() -> String {
    "🏪".to_string()
}

pub(crate) async fn admin_create_category(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CategoryPayload>,
) -> (StatusCode, Json<Value>) {
    let mut categories = state.categories.write().await;
    let category = Category {
        id: next_id(&categories, |c| c.id),
        name: payload.name,
        icon: payload.icon,
    };
    categories.push(category.clone());
    (StatusCode::CREATED, Json(json!(category)))
}

pub(crate) async fn admin_update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<Value>, Response> {
    let mut categories = state.categories.write().await;
    let Some(category) = categories.iter_mut().find(|c| c.id == id) else {
        return Err(not_found());
    };
    category.name = payload.name;
    category.icon = payload.icon;
    Ok(Json(json!(category.clone())))
}

pub(crate) async fn admin_delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, Response> {
    let mut categories = state.categories.write().await;
    let before = categories.len();
    categories.retain(|c| c.id != id);
    if categories.len() == before {
        return Err(not_found());
    }
    Ok(Json(json!({ "success": true })))
}

pub(crate) async fn admin_list_reviews(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!(*state.reviews.read().await))
}

pub(crate) async fn admin_delete_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, Response> {
    let mut reviews = state.reviews.write().await;
    let before = reviews.len();
    reviews.retain(|r| r.id != id);
    if reviews.len() == before {
        return Err(not_found());
    }
    Ok(Json(json!({ "success": true })))
}
