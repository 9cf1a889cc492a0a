//! Mapping of the carrier's nested tracking payload into the normalized view.

use chrono::{DateTime, Duration, Utc};

use crate::{
    model::tracking::{
        CurrentStatus, Location, PackageInfo, PickupAddress, PickupDetails, Route, TimelineEntry,
        TrackingView,
    },
    server::carrier::model::{ScanEvent, ScanLocation, TrackResponse, TrackResult},
};

/// Description that restarts the synthesized timeline at its seed date.
const PICKUP_DESCRIPTION: &str = "Picked up";

/// Offset between the request time and the timeline seed date.
const TIMELINE_SEED_OFFSET_DAYS: i64 = 3;

/// Maps a raw tracking response to the normalized view. Returns `None` only
/// when the payload carries no track result at all.
pub fn map_tracking_response(
    response: &TrackResponse,
    now: DateTime<Utc>,
) -> Option<TrackingView> {
    let result = response.output.complete_track_results.first()?;
    let track = result.track_results.first()?;

    Some(TrackingView {
        tracking_number: track
            .tracking_number_info
            .tracking_number
            .clone()
            .or_else(|| result.tracking_number.clone()),
        carrier: "FedEx".to_string(),
        service_type: track.service_detail.description.clone(),
        current_status: current_status(track),
        route: Route {
            origin: route_location(track.shipper_information.address.as_ref()),
            destination: route_location(track.recipient_information.address.as_ref()),
        },
        pickup_details: pickup_details(track),
        package: package_info(track),
        timeline: synthesize_timeline(&track.scan_events, now),
    })
}

/// Builds the forward-looking delivery timeline.
///
/// Scan events are sorted ascending by their reported date, then walked with
/// a cursor seeded at `now + 3 days`. An event described exactly
/// `"Picked up"` resets the cursor to the seed; any other event advances the
/// cursor one day before it is used. The carrier's real event dates are
/// discarded; only their order matters.
pub fn synthesize_timeline(scan_events: &[ScanEvent], now: DateTime<Utc>) -> Vec<TimelineEntry> {
    let mut events: Vec<&ScanEvent> = scan_events.iter().collect();
    events.sort_by(|a, b| a.date.cmp(&b.date));

    let seed = now + Duration::days(TIMELINE_SEED_OFFSET_DAYS);
    let mut cursor = seed;

    events
        .into_iter()
        .map(|event| {
            if event.event_description.as_deref() == Some(PICKUP_DESCRIPTION) {
                cursor = seed;
            } else {
                cursor += Duration::days(1);
            }

            TimelineEntry {
                date: cursor.to_rfc3339(),
                status: event.event_description.clone(),
                location: event
                    .scan_location
                    .as_ref()
                    .map(location_label)
                    .unwrap_or_else(|| "N/A".to_string()),
            }
        })
        .collect()
}

fn current_status(track: &TrackResult) -> CurrentStatus {
    let detail = &track.latest_status_detail;

    CurrentStatus {
        status: detail.status_by_locale.clone(),
        description: detail.description.clone(),
        location: location(detail.scan_location.as_ref()),
        last_updated: detail.scan_date.clone(),
    }
}

fn pickup_details(track: &TrackResult) -> PickupDetails {
    let address = track
        .holding_location
        .as_ref()
        .and_then(|holding| holding.location_contact_and_address.as_ref())
        .and_then(|contact| contact.address.as_ref());

    PickupDetails {
        // The package is held as soon as a holding location is reported,
        // even before the carrier fills in its address.
        is_hold_at_location: track.holding_location.is_some(),
        address: address.map(|address| PickupAddress {
            street: address.street_lines.first().cloned(),
            city: address.city.clone(),
            state: address.state_or_province_code.clone(),
            postal_code: address.postal_code.clone(),
            country: address.country_code.clone(),
        }),
    }
}

fn package_info(track: &TrackResult) -> PackageInfo {
    let weight_and_dimensions = &track.package_details.weight_and_dimensions;

    let weight = weight_and_dimensions.weight.first().and_then(|weight| {
        match (&weight.value, &weight.unit) {
            (Some(value), Some(unit)) => Some(format!("{value} {unit}")),
            (Some(value), None) => Some(value.clone()),
            _ => None,
        }
    });

    let dimensions = weight_and_dimensions.dimensions.first().and_then(|dims| {
        match (dims.length, dims.width, dims.height) {
            (Some(length), Some(width), Some(height)) => {
                let units = dims.units.as_deref().unwrap_or("");
                Some(format!("{length} x {width} x {height} {units}").trim_end().to_string())
            }
            _ => None,
        }
    });

    PackageInfo {
        weight,
        dimensions,
        count: track.package_details.count.clone(),
    }
}

fn location(address: Option<&ScanLocation>) -> Location {
    match address {
        Some(address) => Location {
            city: address.city.clone(),
            state: address.state_or_province_code.clone(),
            country: address.country_code.clone(),
        },
        None => Location {
            city: None,
            state: None,
            country: None,
        },
    }
}

/// Route endpoints carry the carrier's display country name rather than the
/// two-letter code.
fn route_location(address: Option<&ScanLocation>) -> Location {
    match address {
        Some(address) => Location {
            city: address.city.clone(),
            state: address.state_or_province_code.clone(),
            country: address.country_name.clone(),
        },
        None => Location {
            city: None,
            state: None,
            country: None,
        },
    }
}

/// `"City, STATE"`, or just the city, or `"N/A"`.
fn location_label(address: &ScanLocation) -> String {
    match (&address.city, &address.state_or_province_code) {
        (Some(city), Some(state)) => format!("{city}, {state}"),
        (Some(city), None) => city.clone(),
        _ => "N/A".to_string(),
    }
}
