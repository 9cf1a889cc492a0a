//! Tests for OrderService::update_order.

use dentiq::{
    model::order::UpdateOrderInput,
    server::{
        error::{order::OrderError, Error},
        service::order::OrderService,
    },
};
use dentiq_test_utils::{
    fixtures::{
        order::create_order_request, patient::create_patient, product::create_default_catalog,
    },
    prelude::*,
};
use entity::enums::OrderStatus;
use uuid::Uuid;

use crate::service::order::{create_input, test_storage, upload_file};

/// Omitting `status` resets the order to PENDING from every prior status.
#[tokio::test]
async fn absent_status_resets_to_pending() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;

    let prior_statuses = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Rejected,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    for status in prior_statuses {
        let order = create_order_request(&test.db, patient.id, status).await?;

        let updated = service
            .update_order(order.order_id, UpdateOrderInput::default(), vec![])
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Pending);
    }

    Ok(())
}

/// Supplied scalars overwrite while untouched columns survive.
#[tokio::test]
async fn partial_update_overwrites_supplied_fields() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;
    let order = create_order_request(&test.db, patient.id, OrderStatus::Pending).await?;

    let input = UpdateOrderInput {
        comment: Some("rush this one".to_string()),
        tooth_numbers: Some(vec![21]),
        ..Default::default()
    };

    let updated = service
        .update_order(order.order_id, input, vec![])
        .await
        .unwrap();

    assert_eq!(updated.comment.as_deref(), Some("rush this one"));
    assert_eq!(updated.tooth_numbers.0, vec![21]);
    assert_eq!(updated.shade, order.shade);
    assert_eq!(updated.product_type, order.product_type);

    Ok(())
}

/// A strict-subset keep-list drops exactly the complement and deletes the
/// removed blobs.
#[tokio::test]
async fn keep_list_removes_complement() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (memory, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;

    let files = vec![upload_file("keep.stl"), upload_file("drop.stl")];
    let order = service
        .create_order(create_input(patient.id), files)
        .await
        .unwrap();

    let kept = order
        .image_3d
        .0
        .iter()
        .find(|attachment| attachment.file_name == "keep.stl")
        .unwrap()
        .clone();
    let dropped = order
        .image_3d
        .0
        .iter()
        .find(|attachment| attachment.file_name == "drop.stl")
        .unwrap()
        .clone();

    let input = UpdateOrderInput {
        existing_image_3d_urls: Some(vec![kept.s3_key.clone()]),
        ..Default::default()
    };

    let updated = service
        .update_order(order.order_id, input, vec![])
        .await
        .unwrap();

    assert_eq!(updated.image_3d.0.len(), 1);
    assert_eq!(updated.image_3d.0[0].s3_key, kept.s3_key);
    assert!(memory.contains(&kept.s3_key));
    assert!(!memory.contains(&dropped.s3_key));

    Ok(())
}

/// A failing blob delete still drops the metadata entry.
#[tokio::test]
async fn delete_failure_still_drops_entry() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (memory, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;

    let order = service
        .create_order(create_input(patient.id), vec![upload_file("scan.stl")])
        .await
        .unwrap();

    memory.set_fail_deletes(true);

    let input = UpdateOrderInput {
        existing_image_3d_urls: Some(vec![]),
        ..Default::default()
    };

    let updated = service
        .update_order(order.order_id, input, vec![])
        .await
        .unwrap();

    assert!(updated.image_3d.0.is_empty());
    // The blob itself survives; only the metadata entry is gone.
    assert_eq!(memory.keys().len(), 1);

    Ok(())
}

/// New files are appended to the retained attachments.
#[tokio::test]
async fn new_files_append_to_retained() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;

    let order = service
        .create_order(create_input(patient.id), vec![upload_file("first.stl")])
        .await
        .unwrap();

    let updated = service
        .update_order(
            order.order_id,
            UpdateOrderInput::default(),
            vec![upload_file("second.stl")],
        )
        .await
        .unwrap();

    let names: Vec<&str> = updated
        .image_3d
        .0
        .iter()
        .map(|attachment| attachment.file_name.as_str())
        .collect();
    assert_eq!(names, vec!["first.stl", "second.stl"]);

    Ok(())
}

/// Retained attachments do not count against the per-request upload cap:
/// keeping 3 and adding 2 yields 5 attachments.
#[tokio::test]
async fn retained_attachments_do_not_count_against_upload_cap() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;

    let files = vec![
        upload_file("a.stl"),
        upload_file("b.stl"),
        upload_file("c.stl"),
    ];
    let order = service
        .create_order(create_input(patient.id), files)
        .await
        .unwrap();

    let kept_keys = order
        .image_3d
        .0
        .iter()
        .map(|attachment| attachment.s3_key.clone())
        .collect();

    let input = UpdateOrderInput {
        existing_image_3d_urls: Some(kept_keys),
        ..Default::default()
    };

    let updated = service
        .update_order(
            order.order_id,
            input,
            vec![upload_file("d.stl"), upload_file("e.stl")],
        )
        .await
        .unwrap();

    assert_eq!(updated.image_3d.0.len(), 5);

    Ok(())
}

/// More than four files in one update request are still rejected.
#[tokio::test]
async fn too_many_uploaded_files_rejected() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;
    let order = create_order_request(&test.db, patient.id, OrderStatus::Pending).await?;

    let files = (0..5)
        .map(|i| upload_file(&format!("scan_{i}.stl")))
        .collect();

    let result = service
        .update_order(order.order_id, UpdateOrderInput::default(), files)
        .await;

    assert!(matches!(
        result,
        Err(Error::OrderError(OrderError::TooManyAttachments { .. }))
    ));

    Ok(())
}

/// A changed product type re-resolves the catalog image, with the same
/// failure mode as create.
#[tokio::test]
async fn changed_product_type_requires_catalog_image() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;
    let order = create_order_request(&test.db, patient.id, OrderStatus::Pending).await?;

    let input = UpdateOrderInput {
        product_type: Some("Unknown Type".to_string()),
        ..Default::default()
    };

    let result = service.update_order(order.order_id, input, vec![]).await;

    assert!(matches!(
        result,
        Err(Error::OrderError(OrderError::MissingProductImage(_)))
    ));

    Ok(())
}

/// Updating an unknown order yields not-found.
#[tokio::test]
async fn unknown_order_not_found() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let result = service
        .update_order(Uuid::new_v4(), UpdateOrderInput::default(), vec![])
        .await;

    assert!(matches!(
        result,
        Err(Error::OrderError(OrderError::OrderNotFound(_)))
    ));

    Ok(())
}
