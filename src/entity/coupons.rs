use sea_orm::entity::prelude::*;

use crate::status::{CouponStatus, DiscountType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "coupons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub discount_type: DiscountType,
    /// Percent for `PERCENTAGE`, minor units for `FLAT_DISCOUNT`, ignored for `FREE_DELIVERY`.
    pub discount_value: i64,
    pub min_order_amount: i64,
    pub status: CouponStatus,
    pub valid_until: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
