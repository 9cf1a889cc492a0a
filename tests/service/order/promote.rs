//! Tests for the accepted-order projection.

use dentiq::{
    model::order::{UpdateOrderInput, UpdateShipmentInput},
    server::{
        error::{order::OrderError, Error},
        service::order::OrderService,
    },
};
use dentiq_test_utils::{
    fixtures::{
        order::{create_accepted_order, create_order_request},
        patient::create_patient,
        product::create_default_catalog,
    },
    prelude::*,
};
use entity::enums::{OrderStatus, ShipmentProvider};
use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

use crate::service::order::test_storage;

/// Two updates landing on ACCEPTED leave exactly one accepted row carrying
/// the latest fields.
#[tokio::test]
async fn repeated_acceptance_upserts_single_row() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;
    let order = create_order_request(&test.db, patient.id, OrderStatus::Pending).await?;

    let first = UpdateOrderInput {
        status: Some(OrderStatus::Accepted),
        comment: Some("first acceptance".to_string()),
        ..Default::default()
    };
    service.update_order(order.order_id, first, vec![]).await.unwrap();

    let second = UpdateOrderInput {
        status: Some(OrderStatus::Accepted),
        comment: Some("second acceptance".to_string()),
        ..Default::default()
    };
    service.update_order(order.order_id, second, vec![]).await.unwrap();

    let count = entity::prelude::AcceptedOrder::find()
        .count(&test.db)
        .await?;
    assert_eq!(count, 1);

    let accepted = service.get_accepted_order(order.order_id).await.unwrap();
    assert_eq!(accepted.comment.as_deref(), Some("second acceptance"));
    assert_eq!(accepted.status, OrderStatus::Accepted);

    Ok(())
}

/// Re-accepting keeps the shipment columns already assigned on the row.
#[tokio::test]
async fn re_acceptance_preserves_shipment_columns() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;
    let order = create_order_request(&test.db, patient.id, OrderStatus::Accepted).await?;
    create_accepted_order(&test.db, &order, Some("794698937000")).await?;

    let input = UpdateOrderInput {
        status: Some(OrderStatus::Accepted),
        comment: Some("revised".to_string()),
        ..Default::default()
    };
    service.update_order(order.order_id, input, vec![]).await.unwrap();

    let accepted = service.get_accepted_order(order.order_id).await.unwrap();
    assert_eq!(accepted.tracking_no.as_deref(), Some("794698937000"));
    assert_eq!(accepted.comment.as_deref(), Some("revised"));

    Ok(())
}

/// Shipment fields patch onto an accepted order.
#[tokio::test]
async fn update_accepted_order_patches_shipment_fields() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;
    let order = create_order_request(&test.db, patient.id, OrderStatus::Accepted).await?;
    create_accepted_order(&test.db, &order, None).await?;

    let input = UpdateShipmentInput {
        tracking_no: Some("794698937000".to_string()),
        shipment_provider: Some(ShipmentProvider::Fedex),
    };

    let updated = service
        .update_accepted_order(order.order_id, input)
        .await
        .unwrap();

    assert_eq!(updated.tracking_no.as_deref(), Some("794698937000"));
    assert_eq!(updated.shipment_provider, Some(ShipmentProvider::Fedex));

    Ok(())
}

/// Reading or patching a missing accepted order yields not-found.
#[tokio::test]
async fn missing_accepted_order_not_found() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let order_id = Uuid::new_v4();

    let result = service.get_accepted_order(order_id).await;
    assert!(matches!(
        result,
        Err(Error::OrderError(OrderError::AcceptedOrderNotFound(_)))
    ));

    let result = service
        .update_accepted_order(order_id, UpdateShipmentInput::default())
        .await;
    assert!(matches!(
        result,
        Err(Error::OrderError(OrderError::AcceptedOrderNotFound(_)))
    ));

    Ok(())
}
