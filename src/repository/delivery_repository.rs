use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entity::deliveries::{ActiveModel, Column, Entity as Deliveries, Model},
    error::{AppError, AppResult},
    status::DeliveryStatus,
};

#[derive(Debug, Clone)]
pub struct NewDelivery {
    pub order_id: Uuid,
    pub pickup_address: String,
    pub drop_address: String,
}

#[instrument(skip(conn))]
pub async fn find_by_order_id<C: ConnectionTrait>(
    conn: &C,
    order_id: Uuid,
) -> AppResult<Option<Model>> {
    let delivery = Deliveries::find()
        .filter(Column::OrderId.eq(order_id))
        .one(conn)
        .await?;
    Ok(delivery)
}

#[instrument(skip(conn))]
pub async fn find_by_partner_id<C: ConnectionTrait>(
    conn: &C,
    partner_id: Uuid,
) -> AppResult<Vec<Model>> {
    let deliveries = Deliveries::find()
        .filter(Column::PartnerId.eq(partner_id))
        .all(conn)
        .await?;
    Ok(deliveries)
}

#[instrument(skip(conn))]
pub async fn find_by_status<C: ConnectionTrait>(
    conn: &C,
    status: DeliveryStatus,
) -> AppResult<Vec<Model>> {
    let deliveries = Deliveries::find()
        .filter(Column::Status.eq(status))
        .all(conn)
        .await?;
    Ok(deliveries)
}

#[instrument(skip(conn))]
pub async fn find_by_partner_id_and_status<C: ConnectionTrait>(
    conn: &C,
    partner_id: Uuid,
    status: DeliveryStatus,
) -> AppResult<Vec<Model>> {
    let deliveries = Deliveries::find()
        .filter(Column::PartnerId.eq(partner_id))
        .filter(Column::Status.eq(status))
        .all(conn)
        .await?;
    Ok(deliveries)
}

/// Insert an unassigned delivery in `PENDING`.
pub async fn create<C: ConnectionTrait>(conn: &C, new: NewDelivery) -> AppResult<Model> {
    if new.pickup_address.trim().is_empty() || new.drop_address.trim().is_empty() {
        return Err(AppError::BadRequest(
            "pickup and drop addresses are required".to_string(),
        ));
    }

    let now = Utc::now();
    let delivery = ActiveModel {
        id: Set(Uuid::new_v4()),
        order_id: Set(new.order_id),
        partner_id: Set(None),
        status: Set(DeliveryStatus::Pending),
        pickup_address: Set(new.pickup_address),
        drop_address: Set(new.drop_address),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(conn)
    .await?;

    tracing::info!(delivery_id = %delivery.id, order_id = %delivery.order_id, "delivery created");
    Ok(delivery)
}

/// Attach a partner and move the delivery to `ASSIGNED`.
pub async fn assign_partner<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    partner_id: Uuid,
) -> AppResult<Model> {
    let existing = Deliveries::find_by_id(id).one(conn).await?;
    let existing = match existing {
        Some(d) => d,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    active.partner_id = Set(Some(partner_id));
    active.status = Set(DeliveryStatus::Assigned);
    active.updated_at = Set(Utc::now().into());
    let delivery = active.update(conn).await?;

    tracing::info!(delivery_id = %id, partner_id = %partner_id, "delivery partner assigned");
    Ok(delivery)
}

pub async fn update_status<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    status: DeliveryStatus,
) -> AppResult<Model> {
    let existing = Deliveries::find_by_id(id).one(conn).await?;
    let existing = match existing {
        Some(d) => d,
        None => return Err(AppError::NotFound),
    };

    let previous = existing.status;
    let mut active: ActiveModel = existing.into();
    active.status = Set(status);
    active.updated_at = Set(Utc::now().into());
    let delivery = active.update(conn).await?;

    tracing::info!(delivery_id = %id, from = %previous, to = %status, "delivery status changed");
    Ok(delivery)
}
