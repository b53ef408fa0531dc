use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::inventory::expiry;
use crate::domain::inventory::models::AddItemCommand;
use crate::domain::inventory::models::ItemAssignment;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::inventory::ports::InventoryServicePort;

pub async fn add_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<AddItemRequest>,
) -> Result<ApiSuccess<ItemData>, ApiError> {
    let expires_on = expiry::parse_expiration_date(&body.expiration_date)?;

    state
        .inventory_service
        .add_item(user.user_id, AddItemCommand::new(body.code, expires_on))
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::CREATED, item.into()))
}

/// HTTP request body for tracking a product (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddItemRequest {
    code: String,
    expiration_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemData {
    pub id: i64,
    pub code: String,
    pub description: String,
    pub stock: i64,
    pub expiration_date: NaiveDate,
    pub status: String,
}

impl From<&ItemAssignment> for ItemData {
    fn from(item: &ItemAssignment) -> Self {
        Self {
            id: item.id,
            code: item.code.clone(),
            description: item.description.clone(),
            stock: item.stock,
            expiration_date: item.expires_on,
            status: item.status.clone(),
        }
    }
}
