//! Tests for TrackingService::get_tracking_by_order_id.

use chrono::{DateTime, Duration};
use dentiq::server::{
    carrier::CarrierClient,
    error::{tracking::TrackingError, Error},
    service::tracking::TrackingService,
};
use dentiq_test_utils::{
    carrier::{mock_token_endpoint, mock_track_endpoint, mock_track_payload},
    constant::{TEST_CARRIER_CLIENT_ID, TEST_CARRIER_CLIENT_SECRET},
    fixtures::{
        order::{create_accepted_order, create_order_request},
        patient::create_patient,
    },
    prelude::*,
};
use entity::enums::OrderStatus;
use uuid::Uuid;

const TRACKING_NUMBER: &str = "794698937000";

fn carrier_client(test: &TestSetup) -> CarrierClient {
    CarrierClient::new(
        test.server.url(),
        TEST_CARRIER_CLIENT_ID.to_string(),
        TEST_CARRIER_CLIENT_SECRET.to_string(),
    )
}

/// An order with no accepted projection yields not-found.
#[tokio::test]
async fn missing_accepted_order_not_found() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let carrier = carrier_client(&test);
    let service = TrackingService::new(&test.db, &carrier);

    let result = service.get_tracking_by_order_id(Uuid::new_v4()).await;

    assert!(matches!(
        result,
        Err(Error::TrackingError(TrackingError::OrderNotFound))
    ));

    Ok(())
}

/// An accepted order without a tracking number fails before the carrier is
/// ever contacted.
#[tokio::test]
async fn missing_tracking_number_skips_carrier() -> Result<(), TestError> {
    let mut test = test_setup_with_order_tables!()?;
    let carrier = carrier_client(&test);

    let token_mock = test
        .server
        .mock("POST", "/oauth/token")
        .expect(0)
        .create_async()
        .await;

    let patient = create_patient(&test.db).await?;
    let order = create_order_request(&test.db, patient.id, OrderStatus::Accepted).await?;
    create_accepted_order(&test.db, &order, None).await?;

    let service = TrackingService::new(&test.db, &carrier);
    let result = service.get_tracking_by_order_id(order.order_id).await;

    assert!(matches!(
        result,
        Err(Error::TrackingError(TrackingError::TrackingNotAvailable))
    ));
    token_mock.assert_async().await;

    Ok(())
}

/// Full lookup: token exchange, tracking call, and the normalized view with
/// its synthesized timeline.
#[tokio::test]
async fn maps_carrier_response_to_view() -> Result<(), TestError> {
    let mut test = test_setup_with_order_tables!()?;

    let token_mock = mock_token_endpoint(&mut test.server).await;
    let track_mock = mock_track_endpoint(
        &mut test.server,
        mock_track_payload(
            TRACKING_NUMBER,
            vec![
                ("2026-08-20T09:00:00", "Picked up", Some("Dallas"), Some("TX")),
                ("2026-08-21T09:00:00", "In transit", Some("Memphis"), Some("TN")),
                ("2026-08-22T09:00:00", "Delivered", Some("Austin"), Some("TX")),
            ],
        ),
    )
    .await;

    let patient = create_patient(&test.db).await?;
    let order = create_order_request(&test.db, patient.id, OrderStatus::Accepted).await?;
    create_accepted_order(&test.db, &order, Some(TRACKING_NUMBER)).await?;

    let carrier = carrier_client(&test);
    let service = TrackingService::new(&test.db, &carrier);

    let view = service
        .get_tracking_by_order_id(order.order_id)
        .await
        .unwrap();

    assert_eq!(view.tracking_number.as_deref(), Some(TRACKING_NUMBER));
    assert_eq!(view.carrier, "FedEx");
    assert_eq!(view.service_type.as_deref(), Some("FedEx Priority Overnight"));
    assert_eq!(view.current_status.status.as_deref(), Some("In transit"));
    assert_eq!(view.current_status.location.city.as_deref(), Some("Memphis"));
    assert_eq!(
        view.current_status.last_updated.as_deref(),
        Some("2026-08-20T09:00:00-05:00")
    );
    assert_eq!(view.route.origin.city.as_deref(), Some("Dallas"));
    assert_eq!(view.route.destination.city.as_deref(), Some("Austin"));
    assert_eq!(
        view.route.destination.country.as_deref(),
        Some("United States")
    );
    assert!(!view.pickup_details.is_hold_at_location);
    assert_eq!(view.package.weight.as_deref(), Some("1.2 LB"));
    assert_eq!(view.package.dimensions.as_deref(), Some("10 x 8 x 4 IN"));
    assert_eq!(view.package.count.as_deref(), Some("1"));

    // Pickup sits on the seed date; later events advance one day each.
    assert_eq!(view.timeline.len(), 3);
    assert_eq!(view.timeline[0].status.as_deref(), Some("Picked up"));
    assert_eq!(view.timeline[0].location, "Dallas, TX");
    let first = DateTime::parse_from_rfc3339(&view.timeline[0].date).unwrap();
    let second = DateTime::parse_from_rfc3339(&view.timeline[1].date).unwrap();
    let third = DateTime::parse_from_rfc3339(&view.timeline[2].date).unwrap();
    assert_eq!(second - first, Duration::days(1));
    assert_eq!(third - second, Duration::days(1));

    token_mock.assert_async().await;
    track_mock.assert_async().await;

    Ok(())
}
