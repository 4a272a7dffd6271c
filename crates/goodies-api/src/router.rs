//! Route definitions for the Goodies HTTP API.
//!
//! Gates are attached per handler through the `AuthUser` and `AdminUser`
//! extractors, so the table below lists paths only.

use axum::Router;
use axum::routing::{delete, get, put};

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route, threading `state` through them.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(part_routes())
        .merge(review_routes())
        .merge(order_routes())
        .merge(user_routes())
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::index))
        .route("/health", get(handlers::health::health))
}

fn part_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/parts",
            get(handlers::parts::list_parts).post(handlers::parts::create_part),
        )
        .route(
            "/parts/{id}",
            get(handlers::parts::get_part).delete(handlers::parts::delete_part),
        )
}

fn review_routes() -> Router<AppState> {
    Router::new().route(
        "/reviews",
        get(handlers::reviews::list_reviews).post(handlers::reviews::create_review),
    )
}

fn order_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/orders",
            get(handlers::orders::list_orders).post(handlers::orders::create_order),
        )
        .route("/orders/{id}", delete(handlers::orders::delete_order))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/{email}", put(handlers::users::upsert_user))
        .route("/user", get(handlers::users::list_users))
        .route("/user/admin/{email}", put(handlers::users::make_admin))
        // `{id}` is a document id for PUT and an email for DELETE.
        .route(
            "/user/{id}",
            put(handlers::users::update_profile).delete(handlers::users::delete_user),
        )
        .route("/admin/{email}", get(handlers::users::admin_status))
}
