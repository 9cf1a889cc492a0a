use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QuerySelect};
use uuid::Uuid;

use entity::enums::ShipmentProvider;

pub struct AcceptedOrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AcceptedOrderRepository<'a, C> {
    /// Creates a new instance of [`AcceptedOrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a newly accepted order
    pub async fn insert(
        &self,
        model: entity::accepted_order::ActiveModel,
    ) -> Result<entity::accepted_order::Model, DbErr> {
        use sea_orm::ActiveModelTrait;

        model.insert(self.db).await
    }

    /// Applies changed fields of an existing accepted order
    pub async fn update(
        &self,
        model: entity::accepted_order::ActiveModel,
    ) -> Result<entity::accepted_order::Model, DbErr> {
        use sea_orm::ActiveModelTrait;

        model.update(self.db).await
    }

    /// Finds an accepted order by the originating order ID
    pub async fn find_by_order_id(
        &self,
        order_id: Uuid,
    ) -> Result<Option<entity::accepted_order::Model>, DbErr> {
        entity::prelude::AcceptedOrder::find_by_id(order_id)
            .one(self.db)
            .await
    }

    /// Fetches only the shipment columns of an accepted order.
    ///
    /// Returns `None` when no accepted order exists for the ID.
    pub async fn find_shipment_info(
        &self,
        order_id: Uuid,
    ) -> Result<Option<(Option<String>, Option<ShipmentProvider>)>, DbErr> {
        entity::prelude::AcceptedOrder::find_by_id(order_id)
            .select_only()
            .column(entity::accepted_order::Column::TrackingNo)
            .column(entity::accepted_order::Column::ShipmentProvider)
            .into_tuple()
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use entity::enums::{OrderStatus, ShipmentProvider};
    use sea_orm::{ActiveValue, DbErr};
    use uuid::Uuid;

    use crate::server::{
        data::order::{AcceptedOrderRepository, OrderRequestRepository},
        util::test::{
            fixtures::{mock_accepted_order, mock_order_request, mock_patient},
            setup::test_setup_with_order_tables,
        },
    };

    /// Expect success when mirroring an accepted order request
    #[tokio::test]
    async fn test_insert_accepted_order_success() -> Result<(), DbErr> {
        let db = test_setup_with_order_tables().await?;
        let patient = mock_patient(&db).await?;

        let order = OrderRequestRepository::new(&db)
            .insert(mock_order_request(patient.id, OrderStatus::Accepted))
            .await?;

        let repository = AcceptedOrderRepository::new(&db);
        let accepted = repository.insert(mock_accepted_order(&order)).await?;

        assert_eq!(accepted.order_id, order.order_id);
        assert_eq!(accepted.tracking_no, None);

        Ok(())
    }

    /// Expect shipment projection to return assigned tracking details
    #[tokio::test]
    async fn test_find_shipment_info() -> Result<(), DbErr> {
        let db = test_setup_with_order_tables().await?;
        let patient = mock_patient(&db).await?;

        let order = OrderRequestRepository::new(&db)
            .insert(mock_order_request(patient.id, OrderStatus::Accepted))
            .await?;

        let repository = AcceptedOrderRepository::new(&db);
        let mut accepted = mock_accepted_order(&order);
        accepted.tracking_no = ActiveValue::Set(Some("394832948231".to_string()));
        accepted.shipment_provider = ActiveValue::Set(Some(ShipmentProvider::Fedex));
        repository.insert(accepted).await?;

        let shipment = repository.find_shipment_info(order.order_id).await?;

        assert_eq!(
            shipment,
            Some((
                Some("394832948231".to_string()),
                Some(ShipmentProvider::Fedex)
            ))
        );

        Ok(())
    }

    /// Expect None when no accepted order exists for the ID
    #[tokio::test]
    async fn test_find_shipment_info_none() -> Result<(), DbErr> {
        let db = test_setup_with_order_tables().await?;
        let repository = AcceptedOrderRepository::new(&db);

        let shipment = repository.find_shipment_info(Uuid::new_v4()).await?;

        assert!(shipment.is_none());

        Ok(())
    }
}
