use chrono::Utc;
use entity::{
    enums::{OrderPriority, OrderStatus},
    order_request::{Attachments, ToothNumbers},
};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use uuid::Uuid;

/// Inserts an order request for the patient.
pub async fn create_order_request<C: ConnectionTrait>(
    db: &C,
    patient_id: Uuid,
    status: OrderStatus,
) -> Result<entity::order_request::Model, DbErr> {
    let now = Utc::now().naive_utc();

    let order = entity::order_request::ActiveModel {
        order_id: ActiveValue::Set(Uuid::new_v4()),
        patient_id: ActiveValue::Set(patient_id),
        clinic_id: ActiveValue::Set(None),
        address_id: ActiveValue::Set(None),
        product_list: ActiveValue::Set("Crowns".to_string()),
        product_type: ActiveValue::Set("Zirconia Crown".to_string()),
        shade: ActiveValue::Set(Some("A2".to_string())),
        tooth_numbers: ActiveValue::Set(ToothNumbers(vec![11, 12])),
        priority: ActiveValue::Set(OrderPriority::Medium),
        status: ActiveValue::Set(status),
        order_date: ActiveValue::Set(now),
        expected_delivery: ActiveValue::Set(now),
        design_notes: ActiveValue::Set(None),
        image: ActiveValue::Set(vec![0xAB, 0xCD]),
        image_mime_type: ActiveValue::Set("image/png".to_string()),
        image_3d: ActiveValue::Set(Attachments::default()),
        comment: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    };

    order.insert(db).await
}

/// Inserts an accepted order mirroring the given order request, optionally
/// with a tracking number assigned.
pub async fn create_accepted_order<C: ConnectionTrait>(
    db: &C,
    order: &entity::order_request::Model,
    tracking_no: Option<&str>,
) -> Result<entity::accepted_order::Model, DbErr> {
    let now = Utc::now().naive_utc();

    let accepted = entity::accepted_order::ActiveModel {
        order_id: ActiveValue::Set(order.order_id),
        patient_id: ActiveValue::Set(order.patient_id),
        clinic_id: ActiveValue::Set(order.clinic_id),
        address_id: ActiveValue::Set(order.address_id),
        product_list: ActiveValue::Set(order.product_list.clone()),
        product_type: ActiveValue::Set(order.product_type.clone()),
        shade: ActiveValue::Set(order.shade.clone()),
        tooth_numbers: ActiveValue::Set(order.tooth_numbers.clone()),
        priority: ActiveValue::Set(order.priority),
        status: ActiveValue::Set(order.status),
        order_date: ActiveValue::Set(order.order_date),
        expected_delivery: ActiveValue::Set(order.expected_delivery),
        design_notes: ActiveValue::Set(order.design_notes.clone()),
        image: ActiveValue::Set(order.image.clone()),
        image_mime_type: ActiveValue::Set(order.image_mime_type.clone()),
        image_3d: ActiveValue::Set(order.image_3d.clone()),
        comment: ActiveValue::Set(order.comment.clone()),
        tracking_no: ActiveValue::Set(tracking_no.map(str::to_string)),
        shipment_provider: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    };

    accepted.insert(db).await
}
