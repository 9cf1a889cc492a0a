use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{OrderPriority, OrderStatus, ShipmentProvider};
use crate::order_request::{Attachments, ToothNumbers};

/// Projection of an order request that reached ACCEPTED, keyed by the same
/// order id (one-to-zero-or-one), plus shipment fields.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accepted_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: Uuid,
    pub patient_id: Uuid,
    pub clinic_id: Option<Uuid>,
    pub address_id: Option<i32>,
    pub product_list: String,
    pub product_type: String,
    pub shade: Option<String>,
    pub tooth_numbers: ToothNumbers,
    pub priority: OrderPriority,
    pub status: OrderStatus,
    pub order_date: DateTime,
    pub expected_delivery: DateTime,
    pub design_notes: Option<String>,
    #[sea_orm(column_type = "Blob")]
    pub image: Vec<u8>,
    pub image_mime_type: String,
    pub image_3d: Attachments,
    pub comment: Option<String>,
    pub tracking_no: Option<String>,
    pub shipment_provider: Option<ShipmentProvider>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order_request::Entity",
        from = "Column::OrderId",
        to = "super::order_request::Column::OrderId"
    )]
    OrderRequest,
}

impl Related<super::order_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
