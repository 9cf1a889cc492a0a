//! Deserialization types for the carrier tracking payload.
//!
//! The carrier omits most fields for packages early in their lifecycle, so
//! everything is optional and defaults apply at every level.

use serde::Deserialize;

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackResponse {
    pub output: Output,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct Output {
    pub complete_track_results: Vec<CompleteTrackResult>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct CompleteTrackResult {
    pub tracking_number: Option<String>,
    pub track_results: Vec<TrackResult>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackResult {
    pub tracking_number_info: TrackingNumberInfo,
    pub latest_status_detail: LatestStatusDetail,
    pub service_detail: ServiceDetail,
    pub scan_events: Vec<ScanEvent>,
    pub shipper_information: PartyInformation,
    pub recipient_information: PartyInformation,
    pub holding_location: Option<HoldingLocation>,
    pub package_details: PackageDetails,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackingNumberInfo {
    pub tracking_number: Option<String>,
    pub carrier_code: Option<String>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct LatestStatusDetail {
    pub status_by_locale: Option<String>,
    pub description: Option<String>,
    pub scan_date: Option<String>,
    pub scan_location: Option<ScanLocation>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceDetail {
    pub description: Option<String>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanEvent {
    pub date: Option<String>,
    pub event_description: Option<String>,
    pub scan_location: Option<ScanLocation>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanLocation {
    pub street_lines: Vec<String>,
    pub city: Option<String>,
    pub state_or_province_code: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyInformation {
    pub address: Option<ScanLocation>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct HoldingLocation {
    pub location_contact_and_address: Option<LocationContactAndAddress>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationContactAndAddress {
    pub address: Option<ScanLocation>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageDetails {
    pub weight_and_dimensions: WeightAndDimensions,
    pub count: Option<String>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightAndDimensions {
    pub weight: Vec<Weight>,
    pub dimensions: Vec<Dimensions>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct Weight {
    pub value: Option<String>,
    pub unit: Option<String>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct Dimensions {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub units: Option<String>,
}
