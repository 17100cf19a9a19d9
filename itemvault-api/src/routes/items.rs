/// Item endpoints (Bearer token required)
///
/// - `GET    /items` - List all items ordered by id
/// - `POST   /items` - Create an item
/// - `GET    /items/:id` - Fetch one item
/// - `PUT    /items/:id` - Replace an item's name, price, and description
/// - `DELETE /items/:id` - Remove an item
///
/// Every handler takes the caller's [`AuthContext`] and logs who acted.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use itemvault_shared::{
    auth::middleware::AuthContext,
    models::{Item, ItemInput},
};
use serde::Deserialize;
use tracing::info;

/// Create/update request body
///
/// `price` defaults to 0 and `description` may be omitted. A missing
/// `name` is reported the same way as an empty one.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub price: i64,

    #[serde(default)]
    pub description: Option<String>,
}

impl From<ItemRequest> for ItemInput {
    fn from(req: ItemRequest) -> Self {
        ItemInput::new(req.name, req.price, req.description)
    }
}

fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest("Invalid ID format".to_string()))
}

/// Lists all items
pub async fn list_items(
    auth: AuthContext,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Item>>> {
    info!(username = %auth.username, email = ?auth.email, "list_items");

    let items = state.items.list_items().await?;
    Ok(Json(items))
}

/// Fetches one item
///
/// # Errors
///
/// - `400 Bad Request`: `:id` is not an integer
/// - `404 Not Found`: No item with that id
pub async fn get_item(
    auth: AuthContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Item>> {
    info!(username = %auth.username, email = ?auth.email, item_id = %id, "get_item");

    let id = parse_id(&id)?;
    let item = state.items.get_item(id).await?;
    Ok(Json(item))
}

/// Creates an item
///
/// # Endpoint
///
/// ```text
/// POST /items
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// { "name": "Mouse", "price": 50, "description": "wireless" }
/// ```
///
/// Responds `201 Created` with the stored item, including its new id.
pub async fn create_item(
    auth: AuthContext,
    State(state): State<AppState>,
    payload: Result<Json<ItemRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    info!(username = %auth.username, email = ?auth.email, "create_item");

    let Json(req) = payload?;
    let item = state.items.create_item(req.into()).await?;

    info!(item_id = item.id, "Item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Replaces an item's mutable fields
///
/// # Errors
///
/// - `400 Bad Request`: Invalid id, malformed body, or empty name
/// - `404 Not Found`: No item with that id
pub async fn update_item(
    auth: AuthContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ItemRequest>, JsonRejection>,
) -> ApiResult<Json<Item>> {
    info!(username = %auth.username, email = ?auth.email, item_id = %id, "update_item");

    let id = parse_id(&id)?;
    let Json(req) = payload?;
    let item = state.items.update_item(id, req.into()).await?;
    Ok(Json(item))
}

/// Deletes an item; responds `204 No Content`
pub async fn delete_item(
    auth: AuthContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    info!(username = %auth.username, email = ?auth.email, item_id = %id, "delete_item");

    let id = parse_id(&id)?;
    state.items.delete_item(id).await?;

    info!(item_id = id, "Item deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(ApiError::BadRequest(msg)) if msg == "Invalid ID format"));
        assert!(parse_id("1.5").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn test_item_request_defaults() {
        let req: ItemRequest = serde_json::from_str(r#"{"name":"Cable"}"#).unwrap();
        assert_eq!(req.price, 0);
        assert_eq!(req.description, None);

        let req: ItemRequest = serde_json::from_str(r#"{"price":10}"#).unwrap();
        assert!(req.name.is_empty());
    }
}
