use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, NewBooking};
use crate::services::booking;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 500;

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewBooking>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = {
        let db = state.db.lock().unwrap();
        let mut rng = StdRng::from_entropy();
        booking::create_booking(&db, payload, &mut rng)?
    };
    Ok((StatusCode::CREATED, Json(booking)))
}

// GET /api/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let status = query
        .status
        .as_deref()
        .map(|s| {
            BookingStatus::parse(s)
                .ok_or_else(|| AppError::Validation(format!("unknown booking status: {s}")))
        })
        .transpose()?;

    let bookings = {
        let db = state.db.lock().unwrap();
        queries::get_all_bookings(&db, status.as_ref(), limit)?
    };
    Ok(Json(bookings))
}

// GET /api/bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    let booking = {
        let db = state.db.lock().unwrap();
        queries::get_booking_by_id(&db, &id)?
    };
    booking
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))
}

// POST /api/bookings/:id/cancel
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    {
        let db = state.db.lock().unwrap();
        booking::cancel_booking(&db, &id)?;
    }
    Ok(Json(serde_json::json!({ "cancelled": true })))
}
