//! Owner handlers
//!
//! Same contract as the customer endpoints, without the address book.

use axum::{
    extract::{OriginalUri, Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use core_kernel::{OwnerId, Page};
use domain_profile::ProfileError;

use crate::dto::{CreateProfileRequest, EditProfileRequest, ProfileQueryParams, ProfileResponse};
use crate::error::ApiError;
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::pagination::pagination_headers;
use crate::AppState;

fn owner_id(raw: &str) -> Result<OwnerId, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::from(ProfileError::OwnerDoesNotExist))
}

pub async fn list_owners(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ValidatedQuery(params): ValidatedQuery<ProfileQueryParams>,
) -> Result<(HeaderMap, Json<Vec<ProfileResponse>>), ApiError> {
    let pagination = params.pagination();
    let page = match params.into_query::<OwnerId>() {
        Some(query) => state.owners.fetch(query).await?,
        None => Page::empty(pagination),
    };

    let headers = pagination_headers(&page, &uri);
    let items = page.items.iter().map(ProfileResponse::from_profile).collect();
    Ok((headers, Json(items)))
}

pub async fn create_owner(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), ApiError> {
    let owner = state.owners.create(request.into_new_profile()).await?;
    Ok((StatusCode::CREATED, Json(ProfileResponse::from_profile(&owner))))
}

pub async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let owner = state.owners.fetch_by_id(owner_id(&id)?).await?;
    Ok(Json(ProfileResponse::from_profile(&owner)))
}

pub async fn update_owner(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<EditProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let owner = state.owners.edit(owner_id(&id)?, request.into_changes()).await?;
    Ok(Json(ProfileResponse::from_profile(&owner)))
}

pub async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.owners.delete(owner_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
