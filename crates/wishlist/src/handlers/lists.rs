use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use wishlist_auth::CurrentUser;
use wishlist_core::storage::RepositoryError;
use wishlist_core::wishlist::Wishlist;

use crate::{error::ApiError, models::ListPayload, state::AppState};

/// List all wishlists owned by the authenticated user (GET /wishlists).
pub async fn get_lists(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<Vec<Wishlist>>, ApiError> {
    let lists = state.lists.get_lists(&identity.email).await?;

    Ok(Json(lists))
}

/// Create a new wishlist owned by the authenticated user (POST /wishlists).
pub async fn create_list(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Json(payload): Json<ListPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let list = state
        .lists
        .create_list(&payload.name, &identity.email)
        .await?;

    tracing::info!(list_id = %list.id, owner = %list.owner, "Created wishlist");

    Ok((StatusCode::CREATED, Json(list)))
}

/// Look up a single wishlist by id (GET /wishlists/{id}).
///
/// Intentionally public: anyone holding a list id may view it. Unknown
/// ids are 404, never an empty 200.
pub async fn get_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Wishlist>, ApiError> {
    let list = state
        .lists
        .get_list(&id)
        .await?
        .ok_or_else(|| RepositoryError::NotFound {
            entity_type: "Wishlist",
            id,
        })?;

    Ok(Json(list))
}

/// Rename a wishlist (PUT /wishlists/{id}).
pub async fn update_list(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<ListPayload>,
) -> Result<Json<Wishlist>, ApiError> {
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let list = state
        .lists
        .update_list(&id, &payload.name, &identity.email)
        .await?;

    tracing::info!(list_id = %id, "Updated wishlist");

    Ok(Json(list))
}

/// Delete a wishlist and all its items (DELETE /wishlists/{id}).
pub async fn delete_list(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.lists.delete_list(&id, &identity.email).await?;

    tracing::info!(list_id = %id, "Deleted wishlist and its items");

    Ok(StatusCode::NO_CONTENT)
}
