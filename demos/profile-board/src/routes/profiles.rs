use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::routes::PageParams;
use crate::state::AppState;

/// GET /api/profiles?page=0&page_size=10
///
/// One page of profile documents as JSON, plus the total number of
/// profiles matching the listing filter.
pub async fn list_profiles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Value>, AppError> {
    let profiles = state.sdk.list(params.page(), params.page_size()).await?;
    let total = state.sdk.count().await?;

    Ok(Json(json!({
        "data": &profiles[..],
        "count": profiles.len(),
        "total": total,
    })))
}
