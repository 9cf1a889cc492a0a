use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, QueryFilter, QueryOrder};

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns all product lists sorted by name
    pub async fn find_all_lists(&self) -> Result<Vec<entity::product_list::Model>, DbErr> {
        entity::prelude::ProductList::find()
            .order_by(entity::product_list::Column::ListName, Order::Asc)
            .all(self.db)
            .await
    }

    /// Returns all product types belonging to a named list, sorted by name.
    ///
    /// An unknown list name yields an empty vec.
    pub async fn find_types_by_list_name(
        &self,
        list_name: &str,
    ) -> Result<Vec<entity::product_type::Model>, DbErr> {
        entity::prelude::ProductType::find()
            .inner_join(entity::prelude::ProductList)
            .filter(entity::product_list::Column::ListName.eq(list_name))
            .order_by(entity::product_type::Column::ProductName, Order::Asc)
            .all(self.db)
            .await
    }

    /// Finds a product type by its name
    pub async fn find_type_by_name(
        &self,
        product_name: &str,
    ) -> Result<Option<entity::product_type::Model>, DbErr> {
        entity::prelude::ProductType::find()
            .filter(entity::product_type::Column::ProductName.eq(product_name))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use crate::server::{
        data::product::ProductRepository,
        util::test::{
            fixtures::{mock_product_list, mock_product_type},
            setup::test_setup_with_product_tables,
        },
    };

    /// Expect lists back in alphabetical order
    #[tokio::test]
    async fn test_find_all_lists_sorted() -> Result<(), DbErr> {
        let db = test_setup_with_product_tables().await?;

        mock_product_list(&db, "Implants").await?;
        mock_product_list(&db, "Crowns").await?;

        let lists = ProductRepository::new(&db).find_all_lists().await?;

        let names: Vec<&str> = lists.iter().map(|list| list.list_name.as_str()).collect();
        assert_eq!(names, vec!["Crowns", "Implants"]);

        Ok(())
    }

    /// Expect only the named list's types, sorted by name
    #[tokio::test]
    async fn test_find_types_by_list_name() -> Result<(), DbErr> {
        let db = test_setup_with_product_tables().await?;

        let crowns = mock_product_list(&db, "Crowns").await?;
        let implants = mock_product_list(&db, "Implants").await?;
        mock_product_type(&db, crowns.list_id, "Zirconia Crown", None).await?;
        mock_product_type(&db, crowns.list_id, "Ceramic Crown", None).await?;
        mock_product_type(&db, implants.list_id, "Titanium Implant", None).await?;

        let types = ProductRepository::new(&db)
            .find_types_by_list_name("Crowns")
            .await?;

        let names: Vec<&str> = types
            .iter()
            .map(|product| product.product_name.as_str())
            .collect();
        assert_eq!(names, vec!["Ceramic Crown", "Zirconia Crown"]);

        Ok(())
    }

    /// Expect empty result for an unknown list name
    #[tokio::test]
    async fn test_find_types_unknown_list() -> Result<(), DbErr> {
        let db = test_setup_with_product_tables().await?;

        let types = ProductRepository::new(&db)
            .find_types_by_list_name("Dentures")
            .await?;

        assert!(types.is_empty());

        Ok(())
    }

    /// Expect product type lookup by name to return its catalog image
    #[tokio::test]
    async fn test_find_type_by_name() -> Result<(), DbErr> {
        let db = test_setup_with_product_tables().await?;

        let crowns = mock_product_list(&db, "Crowns").await?;
        mock_product_type(&db, crowns.list_id, "Zirconia Crown", Some(vec![1, 2, 3])).await?;

        let product = ProductRepository::new(&db)
            .find_type_by_name("Zirconia Crown")
            .await?;

        assert_eq!(
            product.and_then(|product| product.product_image),
            Some(vec![1, 2, 3])
        );

        Ok(())
    }
}
