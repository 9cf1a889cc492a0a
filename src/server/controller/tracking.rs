use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        tracking::TrackingView,
    },
    server::{error::Error, model::app::AppState, service::tracking::TrackingService},
};

pub static TRACKING_TAG: &str = "tracking";

#[derive(Deserialize, IntoParams)]
pub struct TrackingQuery {
    /// Order request ID, must parse as a UUID
    pub order_id: String,
}

/// Get live shipment tracking for an accepted order
#[utoipa::path(
    get,
    path = "/api/tracking",
    tag = TRACKING_TAG,
    params(TrackingQuery),
    responses(
        (status = 200, description = "Tracking details", body = ApiResponse<TrackingView>),
        (status = 400, description = "Malformed order ID", body = ErrorDto),
        (status = 404, description = "Order or tracking number not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tracking(
    State(state): State<AppState>,
    Query(query): Query<TrackingQuery>,
) -> Result<impl IntoResponse, Error> {
    let order_id = Uuid::parse_str(&query.order_id)
        .map_err(|_| Error::ValidationError("order_id must be a valid UUID".to_string()))?;

    let tracking = TrackingService::new(&state.db, &state.carrier)
        .get_tracking_by_order_id(order_id)
        .await?;

    Ok(Json(ApiResponse::ok(tracking)))
}
