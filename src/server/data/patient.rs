use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, Order, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct PatientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PatientRepository<'a, C> {
    /// Creates a new instance of [`PatientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new patient row
    pub async fn insert(
        &self,
        model: entity::patient::ActiveModel,
    ) -> Result<entity::patient::Model, DbErr> {
        use sea_orm::ActiveModelTrait;

        model.insert(self.db).await
    }

    /// Applies changed fields of an existing patient
    pub async fn update(
        &self,
        model: entity::patient::ActiveModel,
    ) -> Result<entity::patient::Model, DbErr> {
        use sea_orm::ActiveModelTrait;

        model.update(self.db).await
    }

    /// Finds a patient by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::patient::Model>, DbErr> {
        entity::prelude::Patient::find_by_id(id).one(self.db).await
    }

    /// Finds a patient by normalized email
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::patient::Model>, DbErr> {
        entity::prelude::Patient::find()
            .filter(entity::patient::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Lists patients, optionally narrowed to a tenant, newest first
    pub async fn find_all(
        &self,
        tenant_id: Option<Uuid>,
    ) -> Result<Vec<entity::patient::Model>, DbErr> {
        let mut query = entity::prelude::Patient::find();

        if let Some(tenant_id) = tenant_id {
            query = query.filter(entity::patient::Column::TenantId.eq(tenant_id));
        }

        query
            .order_by(entity::patient::Column::CreatedAt, Order::Desc)
            .all(self.db)
            .await
    }

    /// Deletes a patient
    ///
    /// Returns OK regardless of the patient existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Patient::delete_by_id(id).exec(self.db).await
    }
}
