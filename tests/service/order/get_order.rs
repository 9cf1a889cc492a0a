//! Tests for order reads and the product catalog queries.

use dentiq::server::service::order::OrderService;
use dentiq_test_utils::{
    fixtures::{
        order::create_order_request,
        patient::create_patient,
        product::{create_default_catalog, create_product_list, create_product_type},
    },
    prelude::*,
};
use entity::enums::OrderStatus;
use uuid::Uuid;

use crate::service::order::{create_input, test_storage, upload_file};

/// The DTO carries the base64 reference image and a presigned URL per
/// attachment.
#[tokio::test]
async fn dto_carries_base64_image_and_presigned_urls() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;

    let order = service
        .create_order(create_input(patient.id), vec![upload_file("scan.stl")])
        .await
        .unwrap();

    let dto = service
        .get_order_by_id(order.order_id)
        .await
        .unwrap()
        .unwrap();

    // Base64 of the catalog image bytes 0xAB 0xCD.
    assert_eq!(dto.image.as_deref(), Some("q80="));
    assert_eq!(dto.image_3d_urls.len(), 1);
    assert!(dto.image_3d_urls[0].contains(&order.image_3d.0[0].s3_key));

    Ok(())
}

/// An unknown order reads as absent rather than an error.
#[tokio::test]
async fn unknown_order_reads_as_none() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let dto = service.get_order_by_id(Uuid::new_v4()).await.unwrap();

    assert!(dto.is_none());

    Ok(())
}

/// Patient listing pages the rows and reports the overall total.
#[tokio::test]
async fn orders_by_patient_pages_with_total() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let patient = create_patient(&test.db).await?;
    create_default_catalog(&test.db).await?;
    for _ in 0..3 {
        create_order_request(&test.db, patient.id, OrderStatus::Pending).await?;
    }

    let (page, total) = service.orders_by_patient(patient.id, 1, 2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(total, 3);

    let (page, total) = service.orders_by_patient(patient.id, 2, 2).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(total, 3);

    Ok(())
}

/// Product lists come back sorted by name.
#[tokio::test]
async fn product_lists_sorted_by_name() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    create_product_list(&test.db, "Veneers").await?;
    create_product_list(&test.db, "Aligners").await?;
    create_product_list(&test.db, "Crowns").await?;

    let lists = service.product_lists().await.unwrap();

    let names: Vec<&str> = lists.iter().map(|list| list.list_name.as_str()).collect();
    assert_eq!(names, vec!["Aligners", "Crowns", "Veneers"]);

    Ok(())
}

/// Product types are scoped to the named list.
#[tokio::test]
async fn product_types_scoped_to_list() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let crowns = create_product_list(&test.db, "Crowns").await?;
    let veneers = create_product_list(&test.db, "Veneers").await?;
    create_product_type(&test.db, crowns.list_id, "Zirconia Crown", None).await?;
    create_product_type(&test.db, veneers.list_id, "Porcelain Veneer", None).await?;

    let types = service.product_types("Crowns").await.unwrap();

    assert_eq!(types.len(), 1);
    assert_eq!(types[0].product_name, "Zirconia Crown");

    Ok(())
}

/// The catalog image endpoint returns base64 when present and `None` when
/// the type has no image.
#[tokio::test]
async fn product_image_base64_or_absent() -> Result<(), TestError> {
    let test = test_setup_with_order_tables!()?;
    let (_, storage) = test_storage();
    let service = OrderService::new(&test.db, &storage);

    let list = create_product_list(&test.db, "Crowns").await?;
    create_product_type(&test.db, list.list_id, "Zirconia Crown", Some(vec![0xAB, 0xCD])).await?;
    create_product_type(&test.db, list.list_id, "Metal Crown", None).await?;

    let image = service
        .product_image("Crowns", "Zirconia Crown")
        .await
        .unwrap();
    assert_eq!(image.as_deref(), Some("q80="));

    let image = service
        .product_image("Crowns", "Metal Crown")
        .await
        .unwrap();
    assert!(image.is_none());

    Ok(())
}
