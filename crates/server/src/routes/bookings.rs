use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use models::{
    ack::{DeleteAck, InsertAck, UpdateAck},
    booking::{Booking, BookingView, UpdateBookingDate},
};
use serde::Deserialize;
use service::auth::domain::Identity;
use tracing::{info, warn};

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub email: Option<String>,
}

/// Guarded: the token's email must equal the `email` query value.
pub async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<BookingView>>, ApiError> {
    info!(query_email = ?q.email, token_email = ?identity.email, "bookings list requested");
    if identity.email != q.email {
        warn!(query_email = ?q.email, token_email = ?identity.email, "identity mismatch");
        return Err(ApiError::Forbidden);
    }

    let filter = q.email.as_deref().filter(|e| !e.is_empty());
    let items = state.bookings.list(filter).await?;
    Ok(Json(items.into_iter().map(BookingView::from).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(booking): Json<Booking>,
) -> Result<Json<InsertAck>, ApiError> {
    info!(booking = ?booking, "booking submitted");
    Ok(Json(state.bookings.create(booking).await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<BookingView>>, ApiError> {
    let found = state.bookings.get(&id).await?;
    Ok(Json(found.map(BookingView::from)))
}

/// Sets `date` only; upserts when the id matches nothing.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<UpdateBookingDate>,
) -> Result<Json<UpdateAck>, ApiError> {
    Ok(Json(state.bookings.update_date(&id, update).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    Ok(Json(state.bookings.delete(&id).await?))
}
