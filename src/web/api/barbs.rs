use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::barb::{align, bin_barbs, BarbPoint, Sample};
use crate::units::SpeedUnit;
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct BarbRequest {
    pub magnitude: Vec<Sample>,
    pub direction: Vec<Sample>,
    /// Bin count; the configured default applies when omitted.
    #[serde(default)]
    pub bins: Option<usize>,
    /// Output speed unit; the configured default applies when omitted.
    #[serde(default)]
    pub unit: Option<SpeedUnit>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BarbResponse {
    pub barbs: Vec<BarbPoint>,
    pub unit: SpeedUnit,
    pub sample_count: usize,
}

#[utoipa::path(
    post,
    path = "/api/barbs",
    request_body = BarbRequest,
    responses(
        (status = 200, description = "Binned wind barbs; empty when the series share no timestamps", body = BarbResponse),
        (status = 400, description = "Unsorted series or invalid bin count", body = ErrorResponse)
    ),
    tag = "barbs"
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<BarbRequest>,
) -> ApiResult<Json<BarbResponse>> {
    let bins = request.bins.unwrap_or(state.config.barbs.default_bins);
    let unit = request.unit.unwrap_or(state.config.barbs.speed_unit);

    let aligned = align(&request.magnitude, &request.direction)?;
    let barbs = bin_barbs(&aligned, bins, unit)?;

    log::debug!(
        "aggregated {} aligned samples into {} barbs",
        aligned.len(),
        barbs.len()
    );

    Ok(Json(BarbResponse {
        barbs,
        unit,
        sample_count: aligned.len(),
    }))
}
