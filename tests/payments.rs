mod common;

use food_delivery_store::{
    entity::payments::ActiveModel as PaymentActive,
    error::AppError,
    repository::payment_repository::{self, NewPayment},
    status::PaymentStatus,
};
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

async fn insert_payment(
    state: &food_delivery_store::state::AppState,
    order_id: Uuid,
    minute: u32,
    status: PaymentStatus,
) -> anyhow::Result<Uuid> {
    let created_at = common::at_minute(minute);
    let payment = PaymentActive {
        id: Set(Uuid::new_v4()),
        order_id: Set(order_id),
        user_id: Set(Uuid::new_v4()),
        amount: Set(25_000),
        currency: Set("INR".into()),
        razorpay_order_id: Set(None),
        razorpay_payment_id: Set(None),
        status: Set(status),
        created_at: Set(created_at),
        updated_at: Set(created_at),
    }
    .insert(&state.orm)
    .await?;
    Ok(payment.id)
}

fn new_payment(order_id: Uuid, user_id: Uuid, razorpay_order_id: Option<&str>) -> NewPayment {
    NewPayment {
        order_id,
        user_id,
        amount: 45_000,
        currency: "INR".into(),
        razorpay_order_id: razorpay_order_id.map(str::to_string),
    }
}

#[tokio::test]
async fn latest_attempt_wins_by_created_at() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let order_id = Uuid::new_v4();

    // Newer row inserted first so store order and creation order disagree.
    let newer = insert_payment(&state, order_id, 30, PaymentStatus::Success).await?;
    let older = insert_payment(&state, order_id, 10, PaymentStatus::Failed).await?;
    insert_payment(&state, Uuid::new_v4(), 45, PaymentStatus::Pending).await?;

    let latest =
        payment_repository::find_first_by_order_id_order_by_created_at_desc(&state.orm, order_id)
            .await?
            .expect("payment for order");
    assert_eq!(latest.id, newer);
    assert_ne!(latest.id, older);
    assert_eq!(latest.created_at, common::at_minute(30));

    let none = payment_repository::find_first_by_order_id_order_by_created_at_desc(
        &state.orm,
        Uuid::new_v4(),
    )
    .await?;
    assert!(none.is_none());
    Ok(())
}

#[tokio::test]
async fn find_by_order_id_is_independent_per_order() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = Uuid::new_v4();
    let a = payment_repository::create(&state.orm, new_payment(Uuid::new_v4(), user, None)).await?;
    let b = payment_repository::create(&state.orm, new_payment(Uuid::new_v4(), user, None)).await?;
    assert_eq!(a.status, PaymentStatus::Pending);

    let found_a = payment_repository::find_by_order_id(&state.orm, a.order_id).await?;
    let found_b = payment_repository::find_by_order_id(&state.orm, b.order_id).await?;
    assert_eq!(found_a.map(|p| p.id), Some(a.id));
    assert_eq!(found_b.map(|p| p.id), Some(b.id));
    assert!(payment_repository::find_by_order_id(&state.orm, Uuid::new_v4()).await?.is_none());

    let by_user = payment_repository::find_by_user_id(&state.orm, user).await?;
    assert_eq!(by_user.len(), 2);
    Ok(())
}

#[tokio::test]
async fn gateway_lookup_and_status_update() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let payment = payment_repository::create(
        &state.orm,
        new_payment(Uuid::new_v4(), Uuid::new_v4(), Some("order_N5mYx2d1qA")),
    )
    .await?;

    let found = payment_repository::find_by_razorpay_order_id(&state.orm, "order_N5mYx2d1qA").await?;
    assert_eq!(found.map(|p| p.id), Some(payment.id));
    assert!(payment_repository::find_by_razorpay_order_id(&state.orm, "order_missing").await?.is_none());

    let processing =
        payment_repository::update_status(&state.orm, payment.id, PaymentStatus::Processing, None).await?;
    assert_eq!(processing.status, PaymentStatus::Processing);
    assert!(processing.razorpay_payment_id.is_none());

    let captured = payment_repository::update_status(
        &state.orm,
        payment.id,
        PaymentStatus::Success,
        Some("pay_N5mZ8kLw0f".into()),
    )
    .await?;
    assert_eq!(captured.status, PaymentStatus::Success);
    assert_eq!(captured.razorpay_payment_id.as_deref(), Some("pay_N5mZ8kLw0f"));

    let successful = payment_repository::find_by_status(&state.orm, PaymentStatus::Success).await?;
    assert_eq!(successful.len(), 1);
    assert!(payment_repository::find_by_status(&state.orm, PaymentStatus::Pending).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn rejects_negative_amounts_and_missing_rows() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let mut bad = new_payment(Uuid::new_v4(), Uuid::new_v4(), None);
    bad.amount = -1;
    let result = payment_repository::create(&state.orm, bad).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result =
        payment_repository::update_status(&state.orm, Uuid::new_v4(), PaymentStatus::Refunded, None).await;
    assert!(matches!(result, Err(AppError::NotFound)));
    Ok(())
}
