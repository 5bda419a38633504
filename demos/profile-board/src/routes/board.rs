use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;

use crate::error::AppError;
use crate::routes::PageParams;
use crate::state::AppState;

/// GET /?page=0&page_size=10
///
/// The profile board itself: one HTML page with a heading and a vertically
/// stacked card per profile.
pub async fn board_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Html<String>, AppError> {
    let html = state
        .sdk
        .render_page(params.page(), params.page_size())
        .await?;
    Ok(Html(html))
}
