use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

use crate::entity::{
    Assignments, CartItems, Coupons, Deliveries, MenuItems, Payments, Restaurants, Users,
    assignments, cart_items, deliveries, menu_items, payments, restaurants,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        create_table(manager, &schema, Users).await?;
        create_table(manager, &schema, Restaurants).await?;
        create_table(manager, &schema, MenuItems).await?;
        create_table(manager, &schema, CartItems).await?;
        create_table(manager, &schema, Coupons).await?;
        create_table(manager, &schema, Payments).await?;
        create_table(manager, &schema, Assignments).await?;
        create_table(manager, &schema, Deliveries).await?;

        // Lookup columns used by the repositories
        create_index(manager, "idx_assignments_order_id", Assignments, assignments::Column::OrderId)
            .await?;
        create_index(
            manager,
            "idx_assignments_partner_id",
            Assignments,
            assignments::Column::PartnerId,
        )
        .await?;
        create_index(manager, "idx_deliveries_partner_id", Deliveries, deliveries::Column::PartnerId)
            .await?;
        create_index(manager, "idx_payments_order_id", Payments, payments::Column::OrderId).await?;
        create_index(manager, "idx_cart_items_cart_id", CartItems, cart_items::Column::CartId)
            .await?;
        create_index(manager, "idx_restaurants_city", Restaurants, restaurants::Column::City)
            .await?;
        create_index(
            manager,
            "idx_menu_items_restaurant_id",
            MenuItems,
            menu_items::Column::RestaurantId,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table(manager, Deliveries).await?;
        drop_table(manager, Assignments).await?;
        drop_table(manager, Payments).await?;
        drop_table(manager, Coupons).await?;
        drop_table(manager, CartItems).await?;
        drop_table(manager, MenuItems).await?;
        drop_table(manager, Restaurants).await?;
        drop_table(manager, Users).await?;
        Ok(())
    }
}

async fn create_table<E>(manager: &SchemaManager<'_>, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait + 'static,
{
    manager
        .create_table(schema.create_table_from_entity(entity).if_not_exists().to_owned())
        .await
}

async fn create_index<E, C>(
    manager: &SchemaManager<'_>,
    name: &str,
    entity: E,
    column: C,
) -> Result<(), DbErr>
where
    E: EntityTrait + 'static,
    C: IntoIden + 'static,
{
    manager
        .create_index(
            Index::create()
                .if_not_exists()
                .name(name)
                .table(entity)
                .col(column)
                .to_owned(),
        )
        .await
}

async fn drop_table<E>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait + 'static,
{
    manager
        .drop_table(Table::drop().table(entity).if_exists().to_owned())
        .await
}
