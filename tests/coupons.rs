mod common;

use food_delivery_store::{
    error::AppError,
    repository::coupon_repository::{self, NewCoupon},
    status::{CouponStatus, DiscountType},
};
use uuid::Uuid;

fn new_coupon(code: &str, discount_type: DiscountType, discount_value: i64) -> NewCoupon {
    NewCoupon {
        code: code.into(),
        discount_type,
        discount_value,
        min_order_amount: 0,
        valid_until: None,
    }
}

#[tokio::test]
async fn code_lookup_and_status_filters() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let welcome =
        coupon_repository::create(&state.orm, new_coupon("WELCOME50", DiscountType::Percentage, 50)).await?;
    let flat =
        coupon_repository::create(&state.orm, new_coupon("FLAT100", DiscountType::FlatDiscount, 10_000))
            .await?;
    let free =
        coupon_repository::create(&state.orm, new_coupon("FREEDEL", DiscountType::FreeDelivery, 0)).await?;
    assert_eq!(welcome.status, CouponStatus::Active);

    let found = coupon_repository::find_by_code(&state.orm, "FLAT100").await?;
    assert_eq!(found.map(|c| c.id), Some(flat.id));
    assert!(coupon_repository::find_by_code(&state.orm, "flat100").await?.is_none());

    let expired = coupon_repository::update_status(&state.orm, free.id, CouponStatus::Expired).await?;
    assert_eq!(expired.status, CouponStatus::Expired);

    let active = coupon_repository::find_by_status(&state.orm, CouponStatus::Active).await?;
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|c| c.status == CouponStatus::Active));

    let active_flat = coupon_repository::find_by_status_and_discount_type(
        &state.orm,
        CouponStatus::Active,
        DiscountType::FlatDiscount,
    )
    .await?;
    assert_eq!(active_flat.len(), 1);
    assert_eq!(active_flat[0].id, flat.id);

    let active_free = coupon_repository::find_by_status_and_discount_type(
        &state.orm,
        CouponStatus::Active,
        DiscountType::FreeDelivery,
    )
    .await?;
    assert!(active_free.is_empty());
    Ok(())
}

#[tokio::test]
async fn discount_values_are_validated() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let cases = [
        new_coupon("TOOMUCH", DiscountType::Percentage, 150),
        new_coupon("ZERO", DiscountType::Percentage, 0),
        new_coupon("NOTHING", DiscountType::FlatDiscount, 0),
        new_coupon("  ", DiscountType::FreeDelivery, 0),
    ];
    for coupon in cases {
        let result = coupon_repository::create(&state.orm, coupon).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
    assert!(coupon_repository::find_by_status(&state.orm, CouponStatus::Active).await?.is_empty());

    let result =
        coupon_repository::update_status(&state.orm, Uuid::new_v4(), CouponStatus::Inactive).await;
    assert!(matches!(result, Err(AppError::NotFound)));
    Ok(())
}
