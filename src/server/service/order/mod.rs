//! Order workflow: creation, partial updates, attachment handling, and
//! promotion of accepted orders into the accepted-order store.

pub mod attachment;

use std::{sync::Arc, time::Duration};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use futures::future::try_join_all;
use sea_orm::{ActiveValue, ConnectionTrait, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use entity::{
    enums::OrderStatus,
    order_request::{Attachments, Image3dMetadata, ToothNumbers},
};

use crate::{
    model::order::{
        AcceptedOrderDto, CreateOrderInput, OrderDto, ProductListDto, ProductTypeDto,
        UpdateOrderInput, UpdateShipmentInput, UploadFile,
    },
    server::{
        data::{
            order::{AcceptedOrderRepository, OrderRequestRepository},
            product::ProductRepository,
        },
        error::{order::OrderError, Error},
        service::order::attachment::partition_retained,
        storage::FileStorage,
    },
};

/// Cap on files uploaded in one request; retained attachments do not count
/// against it.
const MAX_ATTACHMENTS: usize = 4;
const MAX_DESIGN_NOTES_LEN: usize = 300;
const PRESIGNED_URL_TTL: Duration = Duration::from_secs(3600);
/// Catalog images are stored as PNG.
const CATALOG_IMAGE_MIME: &str = "image/png";

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a Arc<dyn FileStorage>,
}

impl<'a> OrderService<'a> {
    /// Creates a new instance of [`OrderService`]
    pub fn new(db: &'a DatabaseConnection, storage: &'a Arc<dyn FileStorage>) -> Self {
        Self { db, storage }
    }

    /// Creates an order request with up to four 3D scan attachments.
    ///
    /// The reference image is copied from the product catalog; a product type
    /// without one fails before anything is persisted. Attachments upload
    /// concurrently and any failure aborts the whole create.
    pub async fn create_order(
        &self,
        input: CreateOrderInput,
        files: Vec<UploadFile>,
    ) -> Result<entity::order_request::Model, Error> {
        validate_attachment_count(files.len())?;
        validate_design_notes(input.design_notes.as_deref())?;

        let image = self.catalog_image(&input.product_type).await?;

        let now = Utc::now().naive_utc();

        let txn = self.db.begin().await?;
        let repository = OrderRequestRepository::new(&txn);

        let order = repository
            .insert(entity::order_request::ActiveModel {
                order_id: ActiveValue::Set(Uuid::new_v4()),
                patient_id: ActiveValue::Set(input.patient_id),
                clinic_id: ActiveValue::Set(input.clinic_id),
                address_id: ActiveValue::Set(input.address_id),
                product_list: ActiveValue::Set(input.product_list),
                product_type: ActiveValue::Set(input.product_type),
                shade: ActiveValue::Set(input.shade),
                tooth_numbers: ActiveValue::Set(ToothNumbers(input.tooth_numbers)),
                priority: ActiveValue::Set(input.priority),
                status: ActiveValue::Set(input.status.unwrap_or(OrderStatus::Pending)),
                order_date: ActiveValue::Set(input.order_date),
                expected_delivery: ActiveValue::Set(input.expected_delivery),
                design_notes: ActiveValue::Set(input.design_notes),
                image: ActiveValue::Set(image),
                image_mime_type: ActiveValue::Set(CATALOG_IMAGE_MIME.to_string()),
                image_3d: ActiveValue::Set(Attachments::default()),
                comment: ActiveValue::Set(input.comment),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .await?;

        let attachments = self
            .upload_all(&files, order.order_id, order.patient_id)
            .await?;

        let order = if attachments.is_empty() {
            order
        } else {
            let mut active: entity::order_request::ActiveModel = order.into();
            active.image_3d = ActiveValue::Set(Attachments(attachments));

            repository.update(active).await?
        };

        txn.commit().await?;

        Ok(order)
    }

    /// Partially updates an order request.
    ///
    /// Supplied scalars overwrite, with one deliberate exception: an absent
    /// `status` resets the order to PENDING regardless of its prior state.
    /// Attachments are reconciled only when the client sent a keep-list or
    /// new files. An update landing on ACCEPTED also upserts the accepted
    /// projection within the same transaction.
    pub async fn update_order(
        &self,
        order_id: Uuid,
        input: UpdateOrderInput,
        files: Vec<UploadFile>,
    ) -> Result<entity::order_request::Model, Error> {
        validate_attachment_count(files.len())?;
        validate_design_notes(input.design_notes.as_deref())?;

        let current = OrderRequestRepository::new(self.db)
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        let image = match &input.product_type {
            Some(product_type) if *product_type != current.product_type => {
                Some(self.catalog_image(product_type).await?)
            }
            _ => None,
        };

        let reconcile = input.existing_image_3d_urls.is_some() || !files.is_empty();
        let mut removed = Vec::new();
        let attachments = if reconcile {
            let retained = match &input.existing_image_3d_urls {
                Some(kept_urls) => {
                    let result = partition_retained(
                        current.image_3d.0.clone(),
                        kept_urls,
                        self.storage.bucket(),
                    );
                    removed = result.removed;

                    result.retained
                }
                None => current.image_3d.0.clone(),
            };

            let mut uploaded = self
                .upload_all(&files, current.order_id, current.patient_id)
                .await?;

            let mut all = retained;
            all.append(&mut uploaded);

            Some(Attachments(all))
        } else {
            None
        };

        let mut active: entity::order_request::ActiveModel = current.clone().into();

        if let Some(clinic_id) = input.clinic_id {
            active.clinic_id = ActiveValue::Set(Some(clinic_id));
        }
        if let Some(address_id) = input.address_id {
            active.address_id = ActiveValue::Set(Some(address_id));
        }
        if let Some(product_list) = input.product_list {
            active.product_list = ActiveValue::Set(product_list);
        }
        if let Some(product_type) = input.product_type {
            active.product_type = ActiveValue::Set(product_type);
        }
        if let Some(shade) = input.shade {
            active.shade = ActiveValue::Set(Some(shade));
        }
        if let Some(tooth_numbers) = input.tooth_numbers {
            active.tooth_numbers = ActiveValue::Set(ToothNumbers(tooth_numbers));
        }
        if let Some(priority) = input.priority {
            active.priority = ActiveValue::Set(priority);
        }
        if let Some(order_date) = input.order_date {
            active.order_date = ActiveValue::Set(order_date);
        }
        if let Some(expected_delivery) = input.expected_delivery {
            active.expected_delivery = ActiveValue::Set(expected_delivery);
        }
        if let Some(design_notes) = input.design_notes {
            active.design_notes = ActiveValue::Set(Some(design_notes));
        }
        if let Some(comment) = input.comment {
            active.comment = ActiveValue::Set(Some(comment));
        }
        if let Some(image) = image {
            active.image = ActiveValue::Set(image);
        }
        if let Some(attachments) = attachments {
            active.image_3d = ActiveValue::Set(attachments);
        }

        // An update without an explicit status resets the order to PENDING.
        active.status = ActiveValue::Set(input.status.unwrap_or(OrderStatus::Pending));
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let txn = self.db.begin().await?;

        let updated = OrderRequestRepository::new(&txn).update(active).await?;

        if updated.status == OrderStatus::Accepted {
            self.promote_to_accepted(&txn, &updated).await?;
        }

        txn.commit().await?;

        // Removed blobs are cleaned up best-effort once the new list is
        // durable. The metadata entry is already gone either way.
        for attachment in removed {
            if let Err(err) = self.storage.delete(&attachment.s3_key).await {
                tracing::warn!("Failed to delete attachment blob: {err}");
            }
        }

        Ok(updated)
    }

    /// Mirrors an accepted order request into the accepted-order store.
    ///
    /// Idempotent upsert keyed by order ID: an existing row gets every
    /// mirrored field overwritten and keeps its shipment columns, otherwise a
    /// fresh row is inserted.
    pub async fn promote_to_accepted<C: ConnectionTrait>(
        &self,
        db: &C,
        order: &entity::order_request::Model,
    ) -> Result<entity::accepted_order::Model, Error> {
        let repository = AcceptedOrderRepository::new(db);
        let now = Utc::now().naive_utc();

        let accepted = match repository.find_by_order_id(order.order_id).await? {
            Some(existing) => {
                let mut active: entity::accepted_order::ActiveModel = existing.into();
                mirror_order_fields(&mut active, order);
                active.updated_at = ActiveValue::Set(now);

                repository.update(active).await?
            }
            None => {
                let mut active = entity::accepted_order::ActiveModel {
                    order_id: ActiveValue::Set(order.order_id),
                    tracking_no: ActiveValue::Set(None),
                    shipment_provider: ActiveValue::Set(None),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                };
                mirror_order_fields(&mut active, order);

                repository.insert(active).await?
            }
        };

        Ok(accepted)
    }

    /// Fetches an order with its reference image base64-encoded and presigned
    /// download URLs for each attachment
    pub async fn get_order_by_id(&self, order_id: Uuid) -> Result<Option<OrderDto>, Error> {
        let Some(order) = OrderRequestRepository::new(self.db)
            .find_by_id(order_id)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(self.order_dto(order).await))
    }

    /// Fetches the accepted projection of an order
    pub async fn get_accepted_order(&self, order_id: Uuid) -> Result<AcceptedOrderDto, Error> {
        let accepted = AcceptedOrderRepository::new(self.db)
            .find_by_order_id(order_id)
            .await?
            .ok_or(OrderError::AcceptedOrderNotFound(order_id))?;

        Ok(accepted_order_dto(accepted))
    }

    /// Patches shipment fields onto an accepted order
    pub async fn update_accepted_order(
        &self,
        order_id: Uuid,
        input: UpdateShipmentInput,
    ) -> Result<entity::accepted_order::Model, Error> {
        let repository = AcceptedOrderRepository::new(self.db);

        let accepted = repository
            .find_by_order_id(order_id)
            .await?
            .ok_or(OrderError::AcceptedOrderNotFound(order_id))?;

        let mut active: entity::accepted_order::ActiveModel = accepted.into();

        if let Some(tracking_no) = input.tracking_no {
            active.tracking_no = ActiveValue::Set(Some(tracking_no));
        }
        if let Some(shipment_provider) = input.shipment_provider {
            active.shipment_provider = ActiveValue::Set(Some(shipment_provider));
        }
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(repository.update(active).await?)
    }

    /// One page of a patient's orders, needs-attention first, plus the total
    /// count for pagination metadata
    pub async fn orders_by_patient(
        &self,
        patient_id: Uuid,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<OrderDto>, u64), Error> {
        let (orders, total) = OrderRequestRepository::new(self.db)
            .find_page_by_patient(patient_id, page, limit)
            .await?;

        let mut dtos = Vec::with_capacity(orders.len());
        for order in orders {
            dtos.push(self.order_dto(order).await);
        }

        Ok((dtos, total))
    }

    /// All product lists, sorted by name
    pub async fn product_lists(&self) -> Result<Vec<ProductListDto>, Error> {
        let lists = ProductRepository::new(self.db).find_all_lists().await?;

        Ok(lists
            .into_iter()
            .map(|list| ProductListDto {
                list_id: list.list_id,
                list_name: list.list_name,
            })
            .collect())
    }

    /// Product types of a named list, sorted by name
    pub async fn product_types(&self, list_name: &str) -> Result<Vec<ProductTypeDto>, Error> {
        let types = ProductRepository::new(self.db)
            .find_types_by_list_name(list_name)
            .await?;

        Ok(types
            .into_iter()
            .map(|product| ProductTypeDto {
                product_id: product.product_id,
                product_name: product.product_name,
            })
            .collect())
    }

    /// Catalog image of a product type within a list, base64-encoded
    pub async fn product_image(
        &self,
        list_name: &str,
        type_name: &str,
    ) -> Result<Option<String>, Error> {
        let types = ProductRepository::new(self.db)
            .find_types_by_list_name(list_name)
            .await?;

        Ok(types
            .into_iter()
            .find(|product| product.product_name == type_name)
            .and_then(|product| product.product_image)
            .map(|image| STANDARD.encode(image)))
    }

    async fn catalog_image(&self, product_type: &str) -> Result<Vec<u8>, Error> {
        let product = ProductRepository::new(self.db)
            .find_type_by_name(product_type)
            .await?;

        product
            .and_then(|product| product.product_image)
            .filter(|image| !image.is_empty())
            .ok_or_else(|| OrderError::MissingProductImage(product_type.to_string()).into())
    }

    async fn upload_all(
        &self,
        files: &[UploadFile],
        order_id: Uuid,
        patient_id: Uuid,
    ) -> Result<Vec<Image3dMetadata>, Error> {
        let uploads = files
            .iter()
            .map(|file| self.storage.upload(file, order_id, patient_id));

        Ok(try_join_all(uploads).await?)
    }

    async fn order_dto(&self, order: entity::order_request::Model) -> OrderDto {
        let mut image_3d_urls = Vec::with_capacity(order.image_3d.0.len());

        for attachment in &order.image_3d.0 {
            match self
                .storage
                .presigned_url(&attachment.s3_key, PRESIGNED_URL_TTL)
                .await
            {
                Ok(url) => image_3d_urls.push(url),
                Err(err) => tracing::warn!("Failed to presign attachment: {err}"),
            }
        }

        OrderDto {
            order_id: order.order_id,
            patient_id: order.patient_id,
            clinic_id: order.clinic_id,
            address_id: order.address_id,
            product_list: order.product_list,
            product_type: order.product_type,
            shade: order.shade,
            tooth_numbers: order.tooth_numbers,
            priority: order.priority,
            status: order.status,
            order_date: order.order_date,
            expected_delivery: order.expected_delivery,
            design_notes: order.design_notes,
            image: Some(STANDARD.encode(&order.image)),
            image_mime_type: order.image_mime_type,
            image_3d: order.image_3d,
            image_3d_urls,
            comment: order.comment,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

fn mirror_order_fields(
    active: &mut entity::accepted_order::ActiveModel,
    order: &entity::order_request::Model,
) {
    active.patient_id = ActiveValue::Set(order.patient_id);
    active.clinic_id = ActiveValue::Set(order.clinic_id);
    active.address_id = ActiveValue::Set(order.address_id);
    active.product_list = ActiveValue::Set(order.product_list.clone());
    active.product_type = ActiveValue::Set(order.product_type.clone());
    active.shade = ActiveValue::Set(order.shade.clone());
    active.tooth_numbers = ActiveValue::Set(order.tooth_numbers.clone());
    active.priority = ActiveValue::Set(order.priority);
    active.status = ActiveValue::Set(order.status);
    active.order_date = ActiveValue::Set(order.order_date);
    active.expected_delivery = ActiveValue::Set(order.expected_delivery);
    active.design_notes = ActiveValue::Set(order.design_notes.clone());
    active.image = ActiveValue::Set(order.image.clone());
    active.image_mime_type = ActiveValue::Set(order.image_mime_type.clone());
    active.image_3d = ActiveValue::Set(order.image_3d.clone());
    active.comment = ActiveValue::Set(order.comment.clone());
}

pub fn accepted_order_dto(accepted: entity::accepted_order::Model) -> AcceptedOrderDto {
    AcceptedOrderDto {
        order_id: accepted.order_id,
        patient_id: accepted.patient_id,
        clinic_id: accepted.clinic_id,
        address_id: accepted.address_id,
        product_list: accepted.product_list,
        product_type: accepted.product_type,
        shade: accepted.shade,
        tooth_numbers: accepted.tooth_numbers,
        priority: accepted.priority,
        status: accepted.status,
        order_date: accepted.order_date,
        expected_delivery: accepted.expected_delivery,
        design_notes: accepted.design_notes,
        image: Some(STANDARD.encode(&accepted.image)),
        image_mime_type: accepted.image_mime_type,
        image_3d: accepted.image_3d,
        comment: accepted.comment,
        tracking_no: accepted.tracking_no,
        shipment_provider: accepted.shipment_provider,
        created_at: accepted.created_at,
        updated_at: accepted.updated_at,
    }
}

fn validate_attachment_count(count: usize) -> Result<(), Error> {
    if count > MAX_ATTACHMENTS {
        return Err(OrderError::TooManyAttachments {
            limit: MAX_ATTACHMENTS,
            count,
        }
        .into());
    }

    Ok(())
}

fn validate_design_notes(design_notes: Option<&str>) -> Result<(), Error> {
    if let Some(design_notes) = design_notes {
        if design_notes.chars().count() > MAX_DESIGN_NOTES_LEN {
            return Err(Error::ValidationError(format!(
                "design_notes must be at most {MAX_DESIGN_NOTES_LEN} characters"
            )));
        }
    }

    Ok(())
}
