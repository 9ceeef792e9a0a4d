//! Route registration for the development server.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post, put};

use super::handlers_admin::{
    admin_create_category, admin_create_city, admin_dashboard, admin_delete_category,
    admin_delete_city, admin_delete_review, admin_delete_user, admin_list_categories,
    admin_list_cities, admin_list_reviews, admin_list_users, admin_login, admin_update_category,
    admin_update_city, admin_update_user, require_admin,
};
use super::handlers_auth::{dashboard, require_bearer};
use super::handlers_public::{
    create_review, get_business, list_businesses, list_categories, list_cities, list_reviews,
    login, nearby_businesses, register, root_status, test_db,
};
use super::types::AppState;

pub(crate) fn app_router(state: Arc<AppState>) -> Router {
    let public = Router::new()
        .route("/test-db", get(test_db))
        .route("/categories", get(list_categories))
        .route("/cities", get(list_cities))
        .route("/businesses", get(list_businesses))
        .route("/businesses/nearby", get(nearby_businesses))
        .route("/businesses/:id", get(get_business))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/reviews", post(create_review))
        .route("/reviews/:business_id", get(list_reviews))
        .route("/admin/login", post(admin_login));

    let authed = Router::new()
        .route("/dashboard", get(dashboard))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    let admin = Router::new()
        .route("/admin/dashboard", get(admin_dashboard))
        .route("/admin/users", get(admin_list_users))
        .route(
            "/admin/users/:id",
            put(admin_update_user).delete(admin_delete_user),
        )
        .route(
            "/admin/cities",
            get(admin_list_cities).post(admin_create_city),
        )
        .route(
            "/admin/cities/:id",
            put(admin_update_city).delete(admin_delete_city),
        )
        .route(
            "/admin/categories",
            get(admin_list_categories).post(admin_create_category),
        )
        .route(
            "/admin/categories/:id",
            put(admin_update_category).delete(admin_delete_category),
        )
        .route("/admin/reviews", get(admin_list_reviews))
        .route("/admin/reviews/:id", delete(admin_delete_review))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    let api = public.merge(authed).merge(admin).with_state(state);

    Router::new().route("/", get(root_status)).nest("/api", api)
}
