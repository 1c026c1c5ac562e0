use crate::errors::{ErrorBody, Result};
use anyhow::Context;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Route catalog served at `GET /api`, keyed by `"<METHOD> <path>"`.
const ENDPOINTS: &str = include_str!("../../../endpoints.json");

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EndpointCatalog {
    /// Description, accepted queries and example bodies for each route
    #[schema(value_type = Object)]
    pub pathways: Value,
}

#[utoipa::path(
    get,
    path = "/api",
    tag = "discovery",
    summary = "Describe endpoints",
    responses(
        (status = 200, description = "Every route with a description, accepted queries and examples", body = EndpointCatalog),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_endpoints() -> Result<Json<EndpointCatalog>> {
    let pathways: Value = serde_json::from_str(ENDPOINTS).context("parsing embedded endpoint catalog")?;
    Ok(Json(EndpointCatalog { pathways }))
}
