use utoipa::OpenApi;

use super::api::barbs::{BarbRequest, BarbResponse};
use super::api::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(super::api::barbs::generate),
    components(
        schemas(
            BarbRequest,
            BarbResponse,
            ErrorResponse,
            crate::barb::Sample,
            crate::barb::BarbPoint,
            crate::units::SpeedUnit,
        )
    ),
    info(
        title = "Windbarb API",
        description = "Wind series aggregation for barb charts",
        version = "0.1.0"
    ),
    tags(
        (name = "barbs", description = "Wind barb aggregation")
    )
)]
pub struct ApiDoc;
