use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use wishlist_auth::CurrentUser;
use wishlist_core::wishlist::WishlistItem;

use crate::{error::ApiError, models::ItemPayload, state::AppState};

/// List the items of a wishlist (GET /wishlists/{id}/items).
///
/// Intentionally public. Items are queried by partition without
/// resolving the list first, so an unknown list yields an empty array.
pub async fn get_items(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<WishlistItem>>, ApiError> {
    let items = state.items.get_items(&id).await?;

    Ok(Json(items))
}

/// Add an item to a wishlist (POST /wishlists/{id}/items).
///
/// 403 unless the caller owns the list.
pub async fn create_item(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<ItemPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let item = state
        .items
        .create_item(&id, &identity.email, payload.into_draft())
        .await?;

    tracing::info!(list_id = %id, item_id = %item.id, "Created item");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an item (PUT /wishlists/{id}/items/{item_id}).
pub async fn update_item(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path((id, item_id)): Path<(String, String)>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<WishlistItem>, ApiError> {
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let item = state
        .items
        .update_item(&id, &item_id, &identity.email, payload.into_draft())
        .await?;

    tracing::info!(list_id = %id, item_id = %item_id, "Updated item");

    Ok(Json(item))
}

/// Delete an item (DELETE /wishlists/{id}/items/{item_id}).
pub async fn delete_item(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path((id, item_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state
        .items
        .delete_item(&id, &item_id, &identity.email)
        .await?;

    tracing::info!(list_id = %id, item_id = %item_id, "Deleted item");

    Ok(StatusCode::NO_CONTENT)
}
