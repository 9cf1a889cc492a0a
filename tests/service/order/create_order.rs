//! Tests for OrderService::create_order.

use dentiq::server::{
    error::{order::OrderError, Error},
    service::order::OrderService,
};
use dentiq_test_utils::{
    fixtures::{patient::create_patient, product::create_default_catalog},
    prelude::*,
};
use entity::enums::OrderStatus;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::service::order::{create_input, test_storage, upload_file};

/// A product type without a catalog image fails before any row is persisted.
#[tokio::test]
async fn missing_catalog_image_fails_before_persistence() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;

    let mut input = create_input(patient.id);
    input.product_type = "Unknown Type".to_string();

    let result = service.create_order(input, vec![]).await;

    assert!(matches!(
        result,
        Err(Error::OrderError(OrderError::MissingProductImage(_)))
    ));

    let count = entity::prelude::OrderRequest::find().count(&test.db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// The created row copies the catalog image and defaults to PENDING.
#[tokio::test]
async fn copies_catalog_image_and_defaults_pending() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    let product = create_default_catalog(&test.db).await?;

    let order = service
        .create_order(create_input(patient.id), vec![])
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(Some(order.image.clone()), product.product_image);
    assert!(order.image_3d.0.is_empty());

    Ok(())
}

/// N uploaded files become N attachment entries whose keys carry the order
/// and patient IDs.
#[tokio::test]
async fn uploads_become_attachment_entries() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (memory, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;

    let files = vec![upload_file("upper.stl"), upload_file("lower.stl")];

    let order = service
        .create_order(create_input(patient.id), files)
        .await
        .unwrap();

    assert_eq!(order.image_3d.0.len(), 2);
    for attachment in &order.image_3d.0 {
        assert!(attachment.s3_key.contains(&order.order_id.to_string()));
        assert!(attachment.s3_key.contains(&patient.id.to_string()));
        assert!(memory.contains(&attachment.s3_key));
    }

    Ok(())
}

/// A submitted status is stored as-is.
#[tokio::test]
async fn explicit_status_is_kept() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;

    let mut input = create_input(patient.id);
    input.status = Some(OrderStatus::Rejected);

    let order = service.create_order(input, vec![]).await.unwrap();

    assert_eq!(order.status, OrderStatus::Rejected);

    Ok(())
}

/// More than four attachments are rejected up front.
#[tokio::test]
async fn too_many_attachments_rejected() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;

    let files = (0..5)
        .map(|i| upload_file(&format!("scan_{i}.stl")))
        .collect();

    let result = service.create_order(create_input(patient.id), files).await;

    assert!(matches!(
        result,
        Err(Error::OrderError(OrderError::TooManyAttachments { .. }))
    ));

    Ok(())
}

/// Design notes over the length limit are rejected.
#[tokio::test]
async fn oversized_design_notes_rejected() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;

    let mut input = create_input(patient.id);
    input.design_notes = Some("x".repeat(301));

    let result = service.create_order(input, vec![]).await;

    assert!(matches!(result, Err(Error::ValidationError(_))));

    Ok(())
}
