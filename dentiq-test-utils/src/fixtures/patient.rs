use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use uuid::Uuid;

/// Inserts a patient with a unique email.
pub async fn create_patient<C: ConnectionTrait>(db: &C) -> Result<entity::patient::Model, DbErr> {
    let email = format!("patient-{}@example.com", Uuid::new_v4());

    create_patient_with_email(db, &email).await
}

pub async fn create_patient_with_email<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<entity::patient::Model, DbErr> {
    let now = Utc::now().naive_utc();

    let patient = entity::patient::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        first_name: ActiveValue::Set("Jane".to_string()),
        middle_name: ActiveValue::Set(None),
        last_name: ActiveValue::Set("Doe".to_string()),
        email: ActiveValue::Set(email.to_string()),
        contact: ActiveValue::Set(Some("+1-555-0100".to_string())),
        dob: ActiveValue::Set(NaiveDate::from_ymd_opt(1990, 4, 12).unwrap_or_default()),
        gender: ActiveValue::Set(Some("F".to_string())),
        tenant_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    };

    patient.insert(db).await
}
