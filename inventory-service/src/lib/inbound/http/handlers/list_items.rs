use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::add_item::ItemData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::inventory::ports::InventoryServicePort;

pub async fn list_items(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ListItemsResponseData>, ApiError> {
    let items = state
        .inventory_service
        .list_items(user.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListItemsResponseData {
            items: items.iter().map(ItemData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItemsResponseData {
    pub items: Vec<ItemData>,
}
