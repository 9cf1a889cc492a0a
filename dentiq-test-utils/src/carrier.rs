//! Mock carrier API endpoints and payload builders.

use mockito::{Mock, ServerGuard};
use serde_json::{json, Value};

use crate::constant::TEST_CARRIER_ACCESS_TOKEN;

/// Mocks the carrier's OAuth token endpoint.
pub async fn mock_token_endpoint(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/oauth/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "access_token": TEST_CARRIER_ACCESS_TOKEN,
                "token_type": "bearer",
                "expires_in": 3600,
            })
            .to_string(),
        )
        .create_async()
        .await
}

/// Mocks the tracking endpoint, requiring the bearer token issued by
/// [`mock_token_endpoint`].
pub async fn mock_track_endpoint(server: &mut ServerGuard, body: Value) -> Mock {
    server
        .mock("POST", "/track/v1/trackingnumbers")
        .match_header(
            "authorization",
            format!("Bearer {TEST_CARRIER_ACCESS_TOKEN}").as_str(),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Tracking payload with every section the mapper reads. Scan events are
/// `(date, description, city, state)` tuples.
pub fn mock_track_payload(
    tracking_number: &str,
    scan_events: Vec<(&str, &str, Option<&str>, Option<&str>)>,
) -> Value {
    let events: Vec<Value> = scan_events
        .into_iter()
        .map(|(date, description, city, state)| {
            json!({
                "date": date,
                "eventDescription": description,
                "scanLocation": {
                    "city": city,
                    "stateOrProvinceCode": state,
                },
            })
        })
        .collect();

    json!({
        "output": {
            "completeTrackResults": [
                {
                    "trackingNumber": tracking_number,
                    "trackResults": [
                        {
                            "trackingNumberInfo": {
                                "trackingNumber": tracking_number,
                                "carrierCode": "FDXE",
                            },
                            "latestStatusDetail": {
                                "statusByLocale": "In transit",
                                "description": "Package in transit",
                                "scanDate": "2026-08-20T09:00:00-05:00",
                                "scanLocation": {
                                    "city": "Memphis",
                                    "stateOrProvinceCode": "TN",
                                    "countryCode": "US",
                                },
                            },
                            "serviceDetail": {
                                "description": "FedEx Priority Overnight",
                            },
                            "scanEvents": events,
                            "shipperInformation": {
                                "address": {
                                    "city": "Dallas",
                                    "stateOrProvinceCode": "TX",
                                    "countryCode": "US",
                                    "countryName": "United States",
                                },
                            },
                            "recipientInformation": {
                                "address": {
                                    "city": "Austin",
                                    "stateOrProvinceCode": "TX",
                                    "countryCode": "US",
                                    "countryName": "United States",
                                },
                            },
                            "packageDetails": {
                                "weightAndDimensions": {
                                    "weight": [
                                        { "value": "1.2", "unit": "LB" }
                                    ],
                                    "dimensions": [
                                        { "length": 10.0, "width": 8.0, "height": 4.0, "units": "IN" }
                                    ],
                                },
                                "count": "1",
                            },
                        }
                    ],
                }
            ],
        }
    })
}
