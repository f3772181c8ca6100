use axum::extract::{Path, State};
use axum::Json;
use http::StatusCode;
use ministry_match_store::{NewOpportunity, Opportunity, Store};
use tracing::info;

use crate::error::AppError;
use crate::routes::validate_opportunity_keys;

pub async fn create(
    State(store): State<Store>,
    Path(organization): Path<String>,
    Json(payload): Json<NewOpportunity>,
) -> Result<(StatusCode, Json<Opportunity>), AppError> {
    validate_opportunity_keys(&payload)?;
    let opportunity = store.create_opportunity(&organization, payload).await;
    info!(organization, id = opportunity.id, "created opportunity");
    Ok((StatusCode::CREATED, Json(opportunity)))
}

pub async fn list(
    State(store): State<Store>,
    Path(organization): Path<String>,
) -> Json<Vec<Opportunity>> {
    Json(store.opportunities(&organization).await)
}

pub async fn get(
    State(store): State<Store>,
    Path((organization, id)): Path<(String, u64)>,
) -> Result<Json<Opportunity>, AppError> {
    Ok(Json(store.opportunity(&organization, id).await?))
}

pub async fn update(
    State(store): State<Store>,
    Path((organization, id)): Path<(String, u64)>,
    Json(payload): Json<NewOpportunity>,
) -> Result<Json<Opportunity>, AppError> {
    validate_opportunity_keys(&payload)?;
    let opportunity = store.update_opportunity(&organization, id, payload).await?;
    info!(organization, id, "updated opportunity");
    Ok(Json(opportunity))
}

pub async fn delete(
    State(store): State<Store>,
    Path((organization, id)): Path<(String, u64)>,
) -> Result<StatusCode, AppError> {
    store.delete_opportunity(&organization, id).await?;
    info!(organization, id, "deleted opportunity");
    Ok(StatusCode::NO_CONTENT)
}
