use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
    sea_query::Expr,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entity::menu_items::{ActiveModel, Column, Entity as MenuItems, Model},
    error::{AppError, AppResult},
    repository::containing,
};

#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub category: String,
    pub is_vegetarian: bool,
    pub is_bestseller: bool,
}

#[instrument(skip(conn))]
pub async fn find_by_restaurant_id<C: ConnectionTrait>(
    conn: &C,
    restaurant_id: Uuid,
) -> AppResult<Vec<Model>> {
    let items = MenuItems::find()
        .filter(Column::RestaurantId.eq(restaurant_id))
        .all(conn)
        .await?;
    Ok(items)
}

#[instrument(skip(conn))]
pub async fn find_by_restaurant_id_and_is_available_true<C: ConnectionTrait>(
    conn: &C,
    restaurant_id: Uuid,
) -> AppResult<Vec<Model>> {
    let items = MenuItems::find()
        .filter(Column::RestaurantId.eq(restaurant_id))
        .filter(Column::IsAvailable.eq(true))
        .all(conn)
        .await?;
    Ok(items)
}

#[instrument(skip(conn))]
pub async fn find_by_category<C: ConnectionTrait>(
    conn: &C,
    category: &str,
) -> AppResult<Vec<Model>> {
    let items = MenuItems::find()
        .filter(Column::Category.eq(category))
        .all(conn)
        .await?;
    Ok(items)
}

#[instrument(skip(conn))]
pub async fn find_by_restaurant_id_and_category<C: ConnectionTrait>(
    conn: &C,
    restaurant_id: Uuid,
    category: &str,
) -> AppResult<Vec<Model>> {
    let items = MenuItems::find()
        .filter(Column::RestaurantId.eq(restaurant_id))
        .filter(Column::Category.eq(category))
        .all(conn)
        .await?;
    Ok(items)
}

#[instrument(skip(conn))]
pub async fn find_by_is_vegetarian_true<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<Model>> {
    let items = MenuItems::find()
        .filter(Column::IsVegetarian.eq(true))
        .all(conn)
        .await?;
    Ok(items)
}

#[instrument(skip(conn))]
pub async fn find_by_is_bestseller_true<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<Model>> {
    let items = MenuItems::find()
        .filter(Column::IsBestseller.eq(true))
        .all(conn)
        .await?;
    Ok(items)
}

/// Substring match on the item name with the store's default collation.
#[instrument(skip(conn))]
pub async fn find_by_name_containing<C: ConnectionTrait>(
    conn: &C,
    fragment: &str,
) -> AppResult<Vec<Model>> {
    let items = MenuItems::find()
        .filter(Expr::col(Column::Name).like(containing(fragment)))
        .all(conn)
        .await?;
    Ok(items)
}

/// Insert an available menu item.
pub async fn create<C: ConnectionTrait>(conn: &C, new: NewMenuItem) -> AppResult<Model> {
    if new.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if new.price < 0 {
        return Err(AppError::BadRequest("price cannot be negative".to_string()));
    }

    let item = ActiveModel {
        id: Set(Uuid::new_v4()),
        restaurant_id: Set(new.restaurant_id),
        name: Set(new.name),
        description: Set(new.description),
        price: Set(new.price),
        category: Set(new.category),
        is_available: Set(true),
        is_vegetarian: Set(new.is_vegetarian),
        is_bestseller: Set(new.is_bestseller),
        created_at: Set(Utc::now().into()),
    }
    .insert(conn)
    .await?;

    tracing::info!(menu_item_id = %item.id, restaurant_id = %item.restaurant_id, "menu item created");
    Ok(item)
}

pub async fn set_availability<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    is_available: bool,
) -> AppResult<Model> {
    let existing = MenuItems::find_by_id(id).one(conn).await?;
    let existing = match existing {
        Some(m) => m,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    active.is_available = Set(is_available);
    let item = active.update(conn).await?;

    tracing::info!(menu_item_id = %id, is_available, "menu item availability changed");
    Ok(item)
}
