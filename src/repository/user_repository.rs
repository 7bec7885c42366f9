use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entity::users::{ActiveModel, Column, Entity as Users, Model},
    error::{AppError, AppResult},
    status::UserRole,
};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub role: UserRole,
    pub address: Option<String>,
}

#[instrument(skip(conn))]
pub async fn find_by_email<C: ConnectionTrait>(conn: &C, email: &str) -> AppResult<Option<Model>> {
    let user = Users::find()
        .filter(Column::Email.eq(email))
        .one(conn)
        .await?;
    Ok(user)
}

#[instrument(skip(conn))]
pub async fn find_by_phone<C: ConnectionTrait>(conn: &C, phone: &str) -> AppResult<Option<Model>> {
    let user = Users::find()
        .filter(Column::Phone.eq(phone))
        .one(conn)
        .await?;
    Ok(user)
}

#[instrument(skip(conn))]
pub async fn exists_by_email<C: ConnectionTrait>(conn: &C, email: &str) -> AppResult<bool> {
    let count = Users::find()
        .filter(Column::Email.eq(email))
        .count(conn)
        .await?;
    Ok(count > 0)
}

#[instrument(skip(conn))]
pub async fn find_by_role<C: ConnectionTrait>(conn: &C, role: UserRole) -> AppResult<Vec<Model>> {
    let users = Users::find()
        .filter(Column::Role.eq(role))
        .all(conn)
        .await?;
    Ok(users)
}

#[instrument(skip(conn))]
pub async fn find_by_is_active_true<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<Model>> {
    let users = Users::find()
        .filter(Column::IsActive.eq(true))
        .all(conn)
        .await?;
    Ok(users)
}

/// Insert an active user. Emails are unique.
pub async fn create<C: ConnectionTrait>(conn: &C, new: NewUser) -> AppResult<Model> {
    if new.email.trim().is_empty() {
        return Err(AppError::BadRequest("email is required".to_string()));
    }
    if exists_by_email(conn, &new.email).await? {
        return Err(AppError::BadRequest("email already registered".to_string()));
    }

    let now = Utc::now();
    let user = ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(new.email),
        name: Set(new.name),
        phone: Set(new.phone),
        role: Set(new.role),
        is_active: Set(true),
        address: Set(new.address),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(conn)
    .await?;

    tracing::info!(user_id = %user.id, role = %user.role, "user created");
    Ok(user)
}
