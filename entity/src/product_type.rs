use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_type")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: Uuid,
    pub list_id: Uuid,
    pub product_name: String,
    /// Reference image copied onto orders placed for this type.
    #[sea_orm(column_type = "Blob", nullable)]
    pub product_image: Option<Vec<u8>>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_list::Entity",
        from = "Column::ListId",
        to = "super::product_list::Column::ListId"
    )]
    ProductList,
}

impl Related<super::product_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductList.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
