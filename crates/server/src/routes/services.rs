use axum::{
    extract::{Path, State},
    Json,
};
use models::service::ServiceView;

use crate::errors::ApiError;
use crate::state::AppState;

/// All services, highest availability first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ServiceView>>, ApiError> {
    let items = state.catalog.list().await?;
    Ok(Json(items.into_iter().map(ServiceView::from).collect()))
}

/// One service, or `null` when the id matches nothing.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<ServiceView>>, ApiError> {
    let found = state.catalog.get(&id).await?;
    Ok(Json(found.map(ServiceView::from)))
}
