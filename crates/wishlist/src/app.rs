use axum::{
    http::{header, Method, StatusCode},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        health::health,
        items::{create_item, delete_item, get_items, update_item},
        lists::{create_list, delete_list, get_list, get_lists, update_list},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // CORS configuration for browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(health))
        // Wishlist routes
        .route("/wishlists", get(get_lists).post(create_list))
        .route(
            "/wishlists/{id}",
            get(get_list).put(update_list).delete(delete_list),
        )
        // Item routes
        .route("/wishlists/{id}/items", get(get_items).post(create_item))
        .route(
            "/wishlists/{id}/items/{item_id}",
            put(update_item).delete(delete_item),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}
