use sea_orm::entity::prelude::*;

use crate::status::AssignmentStatus;

/// A delivery partner's assignment to an order.
///
/// Order, partner and customer ids point at rows owned by other services, so
/// none of the tables in this crate declare foreign keys.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub order_id: Uuid,
    pub partner_id: Uuid,
    pub customer_id: Uuid,
    pub status: AssignmentStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
