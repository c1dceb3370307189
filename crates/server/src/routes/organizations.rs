use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use models::{Category, Organization, OrganizationInput};
use service::organizations::OrganizationStore;

use crate::errors::{from_service, ApiError};

/// PUT body for the funding update endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateFundingInput {
    pub fund_amount: String,
}

fn parse_category(token: &str) -> Result<Category, ApiError> {
    token.parse::<Category>().map_err(|_| ApiError::invalid_type())
}

/// Orphanages sorted by funding amount, lowest first.
pub async fn list_orphanages(
    State(store): State<Arc<OrganizationStore>>,
) -> Json<Vec<Organization>> {
    Json(store.list_sorted(Category::Orphanage).await)
}

/// Old-age homes sorted by funding amount, lowest first.
pub async fn list_oldage_homes(
    State(store): State<Arc<OrganizationStore>>,
) -> Json<Vec<Organization>> {
    Json(store.list_sorted(Category::OldageHome).await)
}

pub async fn get_by_id(
    State(store): State<Arc<OrganizationStore>>,
    Path((org_type, id)): Path<(String, u32)>,
) -> Result<Json<Organization>, ApiError> {
    let category = parse_category(&org_type)?;
    match store.get(category, id).await {
        Some(org) => Ok(Json(org)),
        None => Err(ApiError::not_found()),
    }
}

pub async fn create(
    State(store): State<Arc<OrganizationStore>>,
    Path(org_type): Path<String>,
    Json(input): Json<OrganizationInput>,
) -> Result<(StatusCode, Json<Organization>), ApiError> {
    let category = parse_category(&org_type)?;
    let created = store
        .create(category, input)
        .await
        .map_err(|e| from_service(e, "save"))?;
    info!(category = %category, id = created.id, "organization created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_funding(
    State(store): State<Arc<OrganizationStore>>,
    Path((org_type, id)): Path<(String, u32)>,
    Json(input): Json<UpdateFundingInput>,
) -> Result<Json<Organization>, ApiError> {
    let category = parse_category(&org_type)?;
    let updated = store
        .update_funding(category, id, input.fund_amount)
        .await
        .map_err(|e| from_service(e, "update"))?;
    info!(category = %category, id, "funding updated");
    Ok(Json(updated))
}

pub async fn delete(
    State(store): State<Arc<OrganizationStore>>,
    Path((org_type, id)): Path<(String, u32)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let category = parse_category(&org_type)?;
    let removed = store
        .delete(category, id)
        .await
        .map_err(|e| from_service(e, "delete"))?;
    info!(category = %category, id, "organization deleted");
    Ok(Json(serde_json::json!({
        "message": "Organization deleted successfully",
        "organization": removed,
    })))
}
