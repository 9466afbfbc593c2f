//! Activity handlers

use axum::{
    extract::{OriginalUri, State},
    http::HeaderMap,
    Json,
};

use core_kernel::Page;

use crate::dto::{ActivityQueryParams, ActivityResponse};
use crate::error::ApiError;
use crate::extract::ValidatedQuery;
use crate::pagination::pagination_headers;
use crate::AppState;

/// Lists activities, newest first
pub async fn list_activities(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ValidatedQuery(params): ValidatedQuery<ActivityQueryParams>,
) -> Result<(HeaderMap, Json<Vec<ActivityResponse>>), ApiError> {
    let pagination = params.pagination();
    let page = match params.into_query() {
        Some(query) => state.activities.fetch(query).await?,
        None => Page::empty(pagination),
    };

    let headers = pagination_headers(&page, &uri);
    let items = page.items.into_iter().map(ActivityResponse::from).collect();
    Ok((headers, Json(items)))
}
