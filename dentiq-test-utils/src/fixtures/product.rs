use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use uuid::Uuid;

pub async fn create_product_list<C: ConnectionTrait>(
    db: &C,
    list_name: &str,
) -> Result<entity::product_list::Model, DbErr> {
    let list = entity::product_list::ActiveModel {
        list_id: ActiveValue::Set(Uuid::new_v4()),
        list_name: ActiveValue::Set(list_name.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    list.insert(db).await
}

pub async fn create_product_type<C: ConnectionTrait>(
    db: &C,
    list_id: Uuid,
    product_name: &str,
    product_image: Option<Vec<u8>>,
) -> Result<entity::product_type::Model, DbErr> {
    let product = entity::product_type::ActiveModel {
        product_id: ActiveValue::Set(Uuid::new_v4()),
        list_id: ActiveValue::Set(list_id),
        product_name: ActiveValue::Set(product_name.to_string()),
        product_image: ActiveValue::Set(product_image),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    product.insert(db).await
}

/// Creates a "Crowns" list holding one "Zirconia Crown" type with a catalog
/// image, the default catalog used by order tests.
pub async fn create_default_catalog<C: ConnectionTrait>(
    db: &C,
) -> Result<entity::product_type::Model, DbErr> {
    let list = create_product_list(db, "Crowns").await?;

    create_product_type(db, list.list_id, "Zirconia Crown", Some(vec![0xAB, 0xCD])).await
}
