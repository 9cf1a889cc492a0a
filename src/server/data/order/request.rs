use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Orders needing attention sort first: rejected, then pending, then the rest.
/// Within each bucket newest orders come first.
const STATUS_RANK: &str =
    "CASE WHEN status = 'REJECTED' THEN 0 WHEN status = 'PENDING' THEN 1 ELSE 2 END";

pub struct OrderRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRequestRepository<'a, C> {
    /// Creates a new instance of [`OrderRequestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new order request row
    pub async fn insert(
        &self,
        model: entity::order_request::ActiveModel,
    ) -> Result<entity::order_request::Model, DbErr> {
        use sea_orm::ActiveModelTrait;

        model.insert(self.db).await
    }

    /// Applies changed fields of an existing order request
    pub async fn update(
        &self,
        model: entity::order_request::ActiveModel,
    ) -> Result<entity::order_request::Model, DbErr> {
        use sea_orm::ActiveModelTrait;

        model.update(self.db).await
    }

    /// Finds an order request by its ID
    pub async fn find_by_id(
        &self,
        order_id: Uuid,
    ) -> Result<Option<entity::order_request::Model>, DbErr> {
        entity::prelude::OrderRequest::find_by_id(order_id)
            .one(self.db)
            .await
    }

    /// Returns one page of a patient's orders plus the total count.
    ///
    /// `page` is 1-based. Ordering puts rejected orders first, then pending,
    /// then everything else, newest first within each group.
    pub async fn find_page_by_patient(
        &self,
        patient_id: Uuid,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::order_request::Model>, u64), DbErr> {
        let paginator = entity::prelude::OrderRequest::find()
            .filter(entity::order_request::Column::PatientId.eq(patient_id))
            .order_by(Expr::cust(STATUS_RANK), Order::Asc)
            .order_by(entity::order_request::Column::CreatedAt, Order::Desc)
            .paginate(self.db, limit);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((orders, total))
    }
}
