use crate::adapters::http::error::ApiError;
use crate::adapters::http::AppState;
use crate::domain::model::{Property, PropertyListResponse};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeedResponse {
    pub message: String,
    pub count: usize,
}

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Kora Backend API Running".to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

#[tracing::instrument(skip(catalog))]
pub async fn list_properties(
    State(catalog): State<AppState>,
) -> Result<Json<PropertyListResponse>, ApiError> {
    let properties = catalog.list_properties().await?;
    tracing::debug!("returning {} properties", properties.len());
    Ok(Json(PropertyListResponse { properties }))
}

#[tracing::instrument(skip(catalog))]
pub async fn get_property(
    State(catalog): State<AppState>,
    Path(property_id): Path<String>,
) -> Result<Json<Property>, ApiError> {
    let property = catalog.get_property(&property_id).await?;
    Ok(Json(property))
}

#[tracing::instrument(skip(catalog))]
pub async fn seed_properties(
    State(catalog): State<AppState>,
) -> Result<Json<SeedResponse>, ApiError> {
    let count = catalog.reseed().await?;
    Ok(Json(SeedResponse {
        message: "Database seeded successfully".to_string(),
        count,
    }))
}
