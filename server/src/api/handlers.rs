use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::domain::{DomainError, DomainResult, Item, ItemPatch, NewItem};
use crate::repository::{ItemRepository, Repository};

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Items
// ============================================================

pub async fn list_items(State(repo): State<ItemRepository>) -> DomainResult<Json<Vec<Item>>> {
    Ok(Json(repo.list().await?))
}

pub async fn get_item(
    State(repo): State<ItemRepository>,
    Path(id): Path<String>,
) -> DomainResult<Json<Item>> {
    repo.find_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| DomainError::NotFound(format!("item {}", id)))
}

pub async fn create_item(
    State(repo): State<ItemRepository>,
    Json(input): Json<NewItem>,
) -> DomainResult<(StatusCode, Json<Item>)> {
    let item = input.into_item(|| chrono::Utc::now().timestamp_millis().to_string())?;
    let created = repo.create(&item).await?;
    tracing::info!("Created item {} ({})", created.id, created.label);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_item(
    State(repo): State<ItemRepository>,
    Path(id): Path<String>,
    Json(patch): Json<ItemPatch>,
) -> DomainResult<Json<Item>> {
    let mut item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("item {}", id)))?;
    item.apply(&patch)?;
    let updated = repo.update(&item).await?;
    tracing::info!("Updated item {} (checked={})", updated.id, updated.checked);
    Ok(Json(updated))
}

pub async fn delete_item(
    State(repo): State<ItemRepository>,
    Path(id): Path<String>,
) -> DomainResult<StatusCode> {
    repo.delete(&id).await?;
    tracing::info!("Deleted item {}", id);
    Ok(StatusCode::NO_CONTENT)
}
