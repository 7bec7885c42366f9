use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entity::coupons::{ActiveModel, Column, Entity as Coupons, Model},
    error::{AppError, AppResult},
    status::{CouponStatus, DiscountType},
};

#[derive(Debug, Clone)]
pub struct NewCoupon {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: i64,
    pub min_order_amount: i64,
    pub valid_until: Option<DateTime<Utc>>,
}

#[instrument(skip(conn))]
pub async fn find_by_code<C: ConnectionTrait>(conn: &C, code: &str) -> AppResult<Option<Model>> {
    let coupon = Coupons::find()
        .filter(Column::Code.eq(code))
        .one(conn)
        .await?;
    Ok(coupon)
}

#[instrument(skip(conn))]
pub async fn find_by_status<C: ConnectionTrait>(
    conn: &C,
    status: CouponStatus,
) -> AppResult<Vec<Model>> {
    let coupons = Coupons::find()
        .filter(Column::Status.eq(status))
        .all(conn)
        .await?;
    Ok(coupons)
}

#[instrument(skip(conn))]
pub async fn find_by_status_and_discount_type<C: ConnectionTrait>(
    conn: &C,
    status: CouponStatus,
    discount_type: DiscountType,
) -> AppResult<Vec<Model>> {
    let coupons = Coupons::find()
        .filter(Column::Status.eq(status))
        .filter(Column::DiscountType.eq(discount_type))
        .all(conn)
        .await?;
    Ok(coupons)
}

/// Insert an `ACTIVE` coupon.
pub async fn create<C: ConnectionTrait>(conn: &C, new: NewCoupon) -> AppResult<Model> {
    validate_discount(&new)?;

    let coupon = ActiveModel {
        id: Set(Uuid::new_v4()),
        code: Set(new.code),
        discount_type: Set(new.discount_type),
        discount_value: Set(new.discount_value),
        min_order_amount: Set(new.min_order_amount),
        status: Set(CouponStatus::Active),
        valid_until: Set(new.valid_until.map(Into::into)),
        created_at: Set(Utc::now().into()),
    }
    .insert(conn)
    .await?;

    tracing::info!(coupon_id = %coupon.id, code = %coupon.code, "coupon created");
    Ok(coupon)
}

pub async fn update_status<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    status: CouponStatus,
) -> AppResult<Model> {
    let existing = Coupons::find_by_id(id).one(conn).await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };

    let previous = existing.status;
    let mut active: ActiveModel = existing.into();
    active.status = Set(status);
    let coupon = active.update(conn).await?;

    tracing::info!(coupon_id = %id, from = %previous, to = %status, "coupon status changed");
    Ok(coupon)
}

fn validate_discount(new: &NewCoupon) -> Result<(), AppError> {
    if new.code.trim().is_empty() {
        return Err(AppError::BadRequest("code is required".into()));
    }
    if new.min_order_amount < 0 {
        return Err(AppError::BadRequest(
            "min_order_amount cannot be negative".into(),
        ));
    }
    match new.discount_type {
        DiscountType::Percentage if !(1..=100).contains(&new.discount_value) => Err(
            AppError::BadRequest("percentage must be between 1 and 100".into()),
        ),
        DiscountType::FlatDiscount if new.discount_value <= 0 => Err(AppError::BadRequest(
            "flat discount must be greater than 0".into(),
        )),
        DiscountType::FreeDelivery if new.discount_value < 0 => Err(AppError::BadRequest(
            "discount value cannot be negative".into(),
        )),
        _ => Ok(()),
    }
}
