use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entity::payments::{ActiveModel, Column, Entity as Payments, Model},
    error::{AppError, AppResult},
    status::PaymentStatus,
};

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub order_id: Uuid,
    pub user_id: Uuid,
    pub amount: i64,
    pub currency: String,
    pub razorpay_order_id: Option<String>,
}

/// A payment for `order_id`. Orders may accumulate several payment attempts;
/// use [`find_first_by_order_id_order_by_created_at_desc`] for the latest one.
#[instrument(skip(conn))]
pub async fn find_by_order_id<C: ConnectionTrait>(
    conn: &C,
    order_id: Uuid,
) -> AppResult<Option<Model>> {
    let payment = Payments::find()
        .filter(Column::OrderId.eq(order_id))
        .one(conn)
        .await?;
    Ok(payment)
}

#[instrument(skip(conn))]
pub async fn find_by_razorpay_order_id<C: ConnectionTrait>(
    conn: &C,
    razorpay_order_id: &str,
) -> AppResult<Option<Model>> {
    let payment = Payments::find()
        .filter(Column::RazorpayOrderId.eq(razorpay_order_id))
        .one(conn)
        .await?;
    Ok(payment)
}

#[instrument(skip(conn))]
pub async fn find_by_user_id<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> AppResult<Vec<Model>> {
    let payments = Payments::find()
        .filter(Column::UserId.eq(user_id))
        .all(conn)
        .await?;
    Ok(payments)
}

#[instrument(skip(conn))]
pub async fn find_by_status<C: ConnectionTrait>(
    conn: &C,
    status: PaymentStatus,
) -> AppResult<Vec<Model>> {
    let payments = Payments::find()
        .filter(Column::Status.eq(status))
        .all(conn)
        .await?;
    Ok(payments)
}

/// The most recently created payment for `order_id`.
#[instrument(skip(conn))]
pub async fn find_first_by_order_id_order_by_created_at_desc<C: ConnectionTrait>(
    conn: &C,
    order_id: Uuid,
) -> AppResult<Option<Model>> {
    let payment = Payments::find()
        .filter(Column::OrderId.eq(order_id))
        .order_by_desc(Column::CreatedAt)
        .one(conn)
        .await?;
    Ok(payment)
}

/// Insert a payment attempt in `PENDING`.
pub async fn create<C: ConnectionTrait>(conn: &C, new: NewPayment) -> AppResult<Model> {
    if new.amount < 0 {
        return Err(AppError::BadRequest("amount cannot be negative".to_string()));
    }

    let now = Utc::now();
    let payment = ActiveModel {
        id: Set(Uuid::new_v4()),
        order_id: Set(new.order_id),
        user_id: Set(new.user_id),
        amount: Set(new.amount),
        currency: Set(new.currency),
        razorpay_order_id: Set(new.razorpay_order_id),
        razorpay_payment_id: Set(None),
        status: Set(PaymentStatus::Pending),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(conn)
    .await?;

    tracing::info!(payment_id = %payment.id, order_id = %payment.order_id, amount = payment.amount, "payment created");
    Ok(payment)
}

/// Overwrite the status and, when given, the gateway payment id.
pub async fn update_status<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    status: PaymentStatus,
    razorpay_payment_id: Option<String>,
) -> AppResult<Model> {
    let existing = Payments::find_by_id(id).one(conn).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let previous = existing.status;
    if previous.is_terminal() && previous != status {
        tracing::warn!(payment_id = %id, from = %previous, to = %status, "payment leaving a terminal status");
    }

    let mut active: ActiveModel = existing.into();
    active.status = Set(status);
    if let Some(payment_id) = razorpay_payment_id {
        active.razorpay_payment_id = Set(Some(payment_id));
    }
    active.updated_at = Set(Utc::now().into());
    let payment = active.update(conn).await?;

    tracing::info!(payment_id = %id, from = %previous, to = %status, "payment status changed");
    Ok(payment)
}
