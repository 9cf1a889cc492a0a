use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Normalized tracking view assembled from the carrier's nested response.
/// Every field degrades to `None`/empty when the carrier omits the data.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackingView {
    pub tracking_number: Option<String>,
    pub carrier: String,
    pub service_type: Option<String>,
    pub current_status: CurrentStatus,
    pub route: Route,
    pub pickup_details: PickupDetails,
    pub package: PackageInfo,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentStatus {
    pub status: Option<String>,
    pub description: Option<String>,
    pub location: Location,
    pub last_updated: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Route {
    pub origin: Location,
    pub destination: Location,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PickupDetails {
    pub is_hold_at_location: bool,
    pub address: Option<PickupAddress>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PickupAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PackageInfo {
    pub weight: Option<String>,
    pub dimensions: Option<String>,
    pub count: Option<String>,
}

/// One synthesized timeline entry. The date is fabricated forward-looking
/// from the request time; the carrier's real event timestamp is discarded.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TimelineEntry {
    pub date: String,
    pub status: Option<String>,
    pub location: String,
}
