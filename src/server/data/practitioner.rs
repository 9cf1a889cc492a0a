use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult, EntityTrait, Order, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use entity::enums::PractitionerType;

pub struct PractitionerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PractitionerRepository<'a, C> {
    /// Creates a new instance of [`PractitionerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new practitioner row
    pub async fn insert(
        &self,
        model: entity::practitioner::ActiveModel,
    ) -> Result<entity::practitioner::Model, DbErr> {
        use sea_orm::ActiveModelTrait;

        model.insert(self.db).await
    }

    /// Applies changed fields of an existing practitioner
    pub async fn update(
        &self,
        model: entity::practitioner::ActiveModel,
    ) -> Result<entity::practitioner::Model, DbErr> {
        use sea_orm::ActiveModelTrait;

        model.update(self.db).await
    }

    /// Finds a practitioner by ID
    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::practitioner::Model>, DbErr> {
        entity::prelude::Practitioner::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Finds a practitioner by normalized email
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::practitioner::Model>, DbErr> {
        entity::prelude::Practitioner::find()
            .filter(entity::practitioner::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Lists practitioners newest first, optionally filtered by type and
    /// tenant.
    ///
    /// Tenant scoping matches rows whose tenant is the given ID or whose own
    /// ID is the given ID, so a practice owner sees their own account among
    /// their team.
    pub async fn find_all(
        &self,
        practitioner_type: Option<PractitionerType>,
        tenant_id: Option<Uuid>,
    ) -> Result<Vec<entity::practitioner::Model>, DbErr> {
        let mut query = entity::prelude::Practitioner::find();

        if let Some(practitioner_type) = practitioner_type {
            query = query
                .filter(entity::practitioner::Column::PractitionerType.eq(practitioner_type));
        }

        if let Some(tenant_id) = tenant_id {
            query = query.filter(
                Condition::any()
                    .add(entity::practitioner::Column::TenantId.eq(tenant_id))
                    .add(entity::practitioner::Column::Id.eq(tenant_id)),
            );
        }

        query
            .order_by(entity::practitioner::Column::CreatedAt, Order::Desc)
            .all(self.db)
            .await
    }

    /// Deletes a practitioner
    ///
    /// Returns OK regardless of the practitioner existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Practitioner::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use entity::enums::PractitionerType;
    use sea_orm::DbErr;

    use crate::server::{
        data::practitioner::PractitionerRepository,
        util::test::{
            fixtures::{mock_practitioner, mock_practitioner_in_tenant},
            setup::test_setup_with_account_tables,
        },
    };

    /// Expect tenant scoping to include the tenant owner's own row
    #[tokio::test]
    async fn test_find_all_tenant_includes_owner() -> Result<(), DbErr> {
        let db = test_setup_with_account_tables().await?;
        let repository = PractitionerRepository::new(&db);

        let owner = mock_practitioner(&db, "owner@example.com", PractitionerType::Practice).await?;
        mock_practitioner_in_tenant(
            &db,
            "member@example.com",
            PractitionerType::TeamMember,
            owner.id,
        )
        .await?;
        mock_practitioner(&db, "other@example.com", PractitionerType::Practice).await?;

        let scoped = repository.find_all(None, Some(owner.id)).await?;

        assert_eq!(scoped.len(), 2);
        assert!(scoped.iter().any(|practitioner| practitioner.id == owner.id));

        Ok(())
    }

    /// Expect type filter to narrow results
    #[tokio::test]
    async fn test_find_all_type_filter() -> Result<(), DbErr> {
        let db = test_setup_with_account_tables().await?;
        let repository = PractitionerRepository::new(&db);

        mock_practitioner(&db, "owner@example.com", PractitionerType::Practice).await?;
        mock_practitioner(&db, "admin@example.com", PractitionerType::Admin).await?;

        let admins = repository
            .find_all(Some(PractitionerType::Admin), None)
            .await?;

        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].email, "admin@example.com");

        Ok(())
    }
}
