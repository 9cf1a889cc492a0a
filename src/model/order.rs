use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use entity::{
    enums::{OrderPriority, OrderStatus, ShipmentProvider},
    order_request::{Attachments, ToothNumbers},
};

/// One file part received from a multipart order submission.
#[derive(Clone, Debug)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Fields accepted when creating an order request.
#[derive(Clone, Debug)]
pub struct CreateOrderInput {
    pub patient_id: Uuid,
    pub clinic_id: Option<Uuid>,
    pub address_id: Option<i32>,
    pub product_list: String,
    pub product_type: String,
    pub shade: Option<String>,
    pub tooth_numbers: Vec<i32>,
    pub priority: OrderPriority,
    pub status: Option<OrderStatus>,
    pub order_date: NaiveDateTime,
    pub expected_delivery: NaiveDateTime,
    pub design_notes: Option<String>,
    pub comment: Option<String>,
}

/// Partial overwrite fields for an order update. Absent fields leave the row
/// untouched, with one exception: an absent `status` resets the order to
/// PENDING.
#[derive(Clone, Debug, Default)]
pub struct UpdateOrderInput {
    pub clinic_id: Option<Uuid>,
    pub address_id: Option<i32>,
    pub product_list: Option<String>,
    pub product_type: Option<String>,
    pub shade: Option<String>,
    pub tooth_numbers: Option<Vec<i32>>,
    pub priority: Option<OrderPriority>,
    pub status: Option<OrderStatus>,
    pub order_date: Option<NaiveDateTime>,
    pub expected_delivery: Option<NaiveDateTime>,
    pub design_notes: Option<String>,
    pub comment: Option<String>,
    /// URLs of already-uploaded 3D attachments to retain. `None` skips
    /// reconciliation entirely; an empty list drops every attachment.
    pub existing_image_3d_urls: Option<Vec<String>>,
}

/// Shipment fields patched onto an accepted order.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateShipmentInput {
    pub tracking_no: Option<String>,
    #[schema(value_type = Option<String>)]
    pub shipment_provider: Option<ShipmentProvider>,
}

/// Order request as returned to clients: reference image base64-encoded,
/// attachments accompanied by presigned download URLs.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub order_id: Uuid,
    pub patient_id: Uuid,
    pub clinic_id: Option<Uuid>,
    pub address_id: Option<i32>,
    pub product_list: String,
    pub product_type: String,
    pub shade: Option<String>,
    #[schema(value_type = Vec<i32>)]
    pub tooth_numbers: ToothNumbers,
    #[schema(value_type = String)]
    pub priority: OrderPriority,
    #[schema(value_type = String)]
    pub status: OrderStatus,
    pub order_date: NaiveDateTime,
    pub expected_delivery: NaiveDateTime,
    pub design_notes: Option<String>,
    pub image: Option<String>,
    pub image_mime_type: String,
    #[schema(value_type = Object)]
    pub image_3d: Attachments,
    pub image_3d_urls: Vec<String>,
    pub comment: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Accepted order as returned to clients.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AcceptedOrderDto {
    pub order_id: Uuid,
    pub patient_id: Uuid,
    pub clinic_id: Option<Uuid>,
    pub address_id: Option<i32>,
    pub product_list: String,
    pub product_type: String,
    pub shade: Option<String>,
    #[schema(value_type = Vec<i32>)]
    pub tooth_numbers: ToothNumbers,
    #[schema(value_type = String)]
    pub priority: OrderPriority,
    #[schema(value_type = String)]
    pub status: OrderStatus,
    pub order_date: NaiveDateTime,
    pub expected_delivery: NaiveDateTime,
    pub design_notes: Option<String>,
    pub image: Option<String>,
    pub image_mime_type: String,
    #[schema(value_type = Object)]
    pub image_3d: Attachments,
    pub comment: Option<String>,
    pub tracking_no: Option<String>,
    #[schema(value_type = Option<String>)]
    pub shipment_provider: Option<ShipmentProvider>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductListDto {
    pub list_id: Uuid,
    pub list_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductTypeDto {
    pub product_id: Uuid,
    pub product_name: String,
}
