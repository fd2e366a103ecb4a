use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/extract", post(handlers::extract::extract))
        .route("/api/search", post(handlers::search::search))
        .route(
            "/api/bookings",
            get(handlers::bookings::list_bookings).post(handlers::bookings::create_booking),
        )
        .route("/api/bookings/:id", get(handlers::bookings::get_booking))
        .route(
            "/api/bookings/:id/cancel",
            post(handlers::bookings::cancel_booking),
        )
        .with_state(state)
}
