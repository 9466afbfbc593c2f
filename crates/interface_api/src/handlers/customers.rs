//! Customer handlers
//!
//! Path identifiers accept the bare UUID or the `CUS-` prefixed form. An
//! identifier that does not parse is reported like an unknown customer.

use axum::{
    extract::{OriginalUri, Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use core_kernel::{CustomerId, Page};
use domain_profile::{Address, ProfileError};

use crate::dto::{
    AddressRequest, CreateProfileRequest, DeleteAddressRequest, EditAddressRequest,
    EditProfileRequest, ProfileQueryParams, ProfileResponse,
};
use crate::error::ApiError;
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::pagination::pagination_headers;
use crate::AppState;

fn customer_id(raw: &str) -> Result<CustomerId, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::from(ProfileError::CustomerDoesNotExist))
}

/// Lists customers matching the query, paginated
pub async fn list_customers(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ValidatedQuery(params): ValidatedQuery<ProfileQueryParams>,
) -> Result<(HeaderMap, Json<Vec<ProfileResponse>>), ApiError> {
    let pagination = params.pagination();
    let page = match params.into_query::<CustomerId>() {
        Some(query) => state.customers.fetch(query).await?,
        None => Page::empty(pagination),
    };

    let headers = pagination_headers(&page, &uri);
    let items = page.items.iter().map(ProfileResponse::from_profile).collect();
    Ok((headers, Json(items)))
}

/// Creates a customer
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), ApiError> {
    let customer = state.customers.create(request.into_new_profile()).await?;
    Ok((StatusCode::CREATED, Json(ProfileResponse::from_profile(&customer))))
}

/// Gets a customer by ID, deleted or not
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let customer = state.customers.fetch_by_id(customer_id(&id)?).await?;
    Ok(Json(ProfileResponse::from_profile(&customer)))
}

/// Edits an active customer
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<EditProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let customer = state
        .customers
        .edit(customer_id(&id)?, request.into_changes())
        .await?;
    Ok(Json(ProfileResponse::from_profile(&customer)))
}

/// Soft deletes an active customer
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.customers.delete(customer_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists the addresses of an active customer
pub async fn list_addresses(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Address>>, ApiError> {
    let addresses = state.customers.fetch_addresses(customer_id(&id)?).await?;
    Ok(Json(addresses))
}

/// Assigns a new address
pub async fn assign_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<AddressRequest>,
) -> Result<(StatusCode, Json<Address>), ApiError> {
    let address = state
        .customers
        .assign_address(customer_id(&id)?, request.to_address())
        .await?;
    Ok((StatusCode::CREATED, Json(address)))
}

/// Replaces an assigned address
pub async fn edit_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<EditAddressRequest>,
) -> Result<Json<Address>, ApiError> {
    let address = state
        .customers
        .edit_address(
            customer_id(&id)?,
            request.target.to_address(),
            request.replacement.to_address(),
        )
        .await?;
    Ok(Json(address))
}

/// Removes an assigned address
pub async fn delete_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<DeleteAddressRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .customers
        .delete_address(customer_id(&id)?, request.target.to_address())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
