use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{OrderPriority, OrderStatus};

/// Metadata for one uploaded 3D scan, stored inside the `image_3d` JSON column.
///
/// Entries are never mutated in place; the whole list is replaced whenever an
/// update touches attachments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image3dMetadata {
    pub s3_key: String,
    pub s3_bucket: String,
    pub file_name: String,
    pub file_size: i64,
    pub content_type: String,
    pub order_id: Uuid,
    pub patient_id: Uuid,
    pub uploaded_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Attachments(pub Vec<Image3dMetadata>);

/// Tooth numbers affected by an order. Unique small integers, order-insignificant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ToothNumbers(pub Vec<i32>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_request")]
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
    /// Reference image copied from the product catalog, required on every row.
    #[sea_orm(column_type = "Blob")]
    pub image: Vec<u8>,
    pub image_mime_type: String,
    pub image_3d: Attachments,
    pub comment: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patient::Entity",
        from = "Column::PatientId",
        to = "super::patient::Column::Id"
    )]
    Patient,
}

impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
