use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entity::assignments::{ActiveModel, Column, Entity as Assignments, Model},
    error::{AppError, AppResult},
    status::AssignmentStatus,
};

#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub order_id: Uuid,
    pub partner_id: Uuid,
    pub customer_id: Uuid,
}

#[instrument(skip(conn))]
pub async fn find_by_order_id<C: ConnectionTrait>(
    conn: &C,
    order_id: Uuid,
) -> AppResult<Option<Model>> {
    let assignment = Assignments::find()
        .filter(Column::OrderId.eq(order_id))
        .one(conn)
        .await?;
    Ok(assignment)
}

#[instrument(skip(conn))]
pub async fn find_by_partner_id<C: ConnectionTrait>(
    conn: &C,
    partner_id: Uuid,
) -> AppResult<Vec<Model>> {
    let assignments = Assignments::find()
        .filter(Column::PartnerId.eq(partner_id))
        .all(conn)
        .await?;
    Ok(assignments)
}

#[instrument(skip(conn))]
pub async fn find_by_customer_id<C: ConnectionTrait>(
    conn: &C,
    customer_id: Uuid,
) -> AppResult<Vec<Model>> {
    let assignments = Assignments::find()
        .filter(Column::CustomerId.eq(customer_id))
        .all(conn)
        .await?;
    Ok(assignments)
}

#[instrument(skip(conn))]
pub async fn find_by_status<C: ConnectionTrait>(
    conn: &C,
    status: AssignmentStatus,
) -> AppResult<Vec<Model>> {
    let assignments = Assignments::find()
        .filter(Column::Status.eq(status))
        .all(conn)
        .await?;
    Ok(assignments)
}

#[instrument(skip(conn))]
pub async fn find_by_partner_id_and_status<C: ConnectionTrait>(
    conn: &C,
    partner_id: Uuid,
    status: AssignmentStatus,
) -> AppResult<Vec<Model>> {
    let assignments = Assignments::find()
        .filter(Column::PartnerId.eq(partner_id))
        .filter(Column::Status.eq(status))
        .all(conn)
        .await?;
    Ok(assignments)
}

/// Insert a new assignment in `PENDING`.
pub async fn create<C: ConnectionTrait>(conn: &C, new: NewAssignment) -> AppResult<Model> {
    let now = Utc::now();
    let assignment = ActiveModel {
        id: Set(Uuid::new_v4()),
        order_id: Set(new.order_id),
        partner_id: Set(new.partner_id),
        customer_id: Set(new.customer_id),
        status: Set(AssignmentStatus::Pending),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(conn)
    .await?;

    tracing::info!(
        assignment_id = %assignment.id,
        order_id = %assignment.order_id,
        partner_id = %assignment.partner_id,
        "assignment created"
    );
    Ok(assignment)
}

/// Overwrite the status. Any tag may follow any other.
pub async fn update_status<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    status: AssignmentStatus,
) -> AppResult<Model> {
    let existing = Assignments::find_by_id(id).one(conn).await?;
    let existing = match existing {
        Some(a) => a,
        None => return Err(AppError::NotFound),
    };

    let previous = existing.status;
    let mut active: ActiveModel = existing.into();
    active.status = Set(status);
    active.updated_at = Set(Utc::now().into());
    let assignment = active.update(conn).await?;

    tracing::info!(
        assignment_id = %id,
        from = %previous,
        to = %status,
        "assignment status changed"
    );
    Ok(assignment)
}
