use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
    sea_query::Expr,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entity::restaurants::{ActiveModel, Column, Entity as Restaurants, Model},
    error::{AppError, AppResult},
    repository::containing,
};

#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub city: String,
    pub cuisine: String,
    pub owner_id: Uuid,
    pub address: String,
}

#[instrument(skip(conn))]
pub async fn find_by_city<C: ConnectionTrait>(conn: &C, city: &str) -> AppResult<Vec<Model>> {
    let restaurants = Restaurants::find()
        .filter(Column::City.eq(city))
        .all(conn)
        .await?;
    Ok(restaurants)
}

/// Active restaurants whose city equals `city` exactly.
#[instrument(skip(conn))]
pub async fn find_by_city_and_is_active_true<C: ConnectionTrait>(
    conn: &C,
    city: &str,
) -> AppResult<Vec<Model>> {
    let restaurants = Restaurants::find()
        .filter(Column::City.eq(city))
        .filter(Column::IsActive.eq(true))
        .all(conn)
        .await?;
    Ok(restaurants)
}

#[instrument(skip(conn))]
pub async fn find_by_cuisine<C: ConnectionTrait>(conn: &C, cuisine: &str) -> AppResult<Vec<Model>> {
    let restaurants = Restaurants::find()
        .filter(Column::Cuisine.eq(cuisine))
        .all(conn)
        .await?;
    Ok(restaurants)
}

#[instrument(skip(conn))]
pub async fn find_by_owner_id<C: ConnectionTrait>(
    conn: &C,
    owner_id: Uuid,
) -> AppResult<Vec<Model>> {
    let restaurants = Restaurants::find()
        .filter(Column::OwnerId.eq(owner_id))
        .all(conn)
        .await?;
    Ok(restaurants)
}

#[instrument(skip(conn))]
pub async fn find_by_is_active_true_and_is_open_true<C: ConnectionTrait>(
    conn: &C,
) -> AppResult<Vec<Model>> {
    let restaurants = Restaurants::find()
        .filter(Column::IsActive.eq(true))
        .filter(Column::IsOpen.eq(true))
        .all(conn)
        .await?;
    Ok(restaurants)
}

#[instrument(skip(conn))]
pub async fn find_by_name_containing<C: ConnectionTrait>(
    conn: &C,
    fragment: &str,
) -> AppResult<Vec<Model>> {
    let restaurants = Restaurants::find()
        .filter(Expr::col(Column::Name).like(containing(fragment)))
        .all(conn)
        .await?;
    Ok(restaurants)
}

/// Insert an active, closed restaurant. Opening hours are managed by the owner.
pub async fn create<C: ConnectionTrait>(conn: &C, new: NewRestaurant) -> AppResult<Model> {
    if new.name.trim().is_empty() || new.city.trim().is_empty() {
        return Err(AppError::BadRequest("name and city are required".to_string()));
    }

    let restaurant = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(new.name),
        city: Set(new.city),
        cuisine: Set(new.cuisine),
        owner_id: Set(new.owner_id),
        address: Set(new.address),
        is_active: Set(true),
        is_open: Set(false),
        created_at: Set(Utc::now().into()),
    }
    .insert(conn)
    .await?;

    tracing::info!(restaurant_id = %restaurant.id, city = %restaurant.city, "restaurant created");
    Ok(restaurant)
}
