use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entity::cart_items::{ActiveModel, Column, Entity as CartItems, Model},
    error::{AppError, AppResult},
};

#[instrument(skip(conn))]
pub async fn find_by_cart_id<C: ConnectionTrait>(conn: &C, cart_id: Uuid) -> AppResult<Vec<Model>> {
    let items = CartItems::find()
        .filter(Column::CartId.eq(cart_id))
        .all(conn)
        .await?;
    Ok(items)
}

#[instrument(skip(conn))]
pub async fn find_by_cart_id_and_menu_item_id<C: ConnectionTrait>(
    conn: &C,
    cart_id: Uuid,
    menu_item_id: Uuid,
) -> AppResult<Option<Model>> {
    let item = CartItems::find()
        .filter(Column::CartId.eq(cart_id))
        .filter(Column::MenuItemId.eq(menu_item_id))
        .one(conn)
        .await?;
    Ok(item)
}

/// Put `quantity` of a menu item in the cart, replacing the quantity of an
/// existing line for the same item.
pub async fn add_item<C: ConnectionTrait>(
    conn: &C,
    cart_id: Uuid,
    menu_item_id: Uuid,
    quantity: i32,
) -> AppResult<Model> {
    if quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let exist = find_by_cart_id_and_menu_item_id(conn, cart_id, menu_item_id).await?;
    let item = if let Some(item) = exist {
        let mut active: ActiveModel = item.into();
        active.quantity = Set(quantity);
        active.update(conn).await?
    } else {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            cart_id: Set(cart_id),
            menu_item_id: Set(menu_item_id),
            quantity: Set(quantity),
            created_at: Set(Utc::now().into()),
        }
        .insert(conn)
        .await?
    };

    tracing::debug!(%cart_id, %menu_item_id, quantity, "cart line saved");
    Ok(item)
}

/// Remove every line of the cart. Returns the number of rows removed; an
/// already empty cart yields 0.
pub async fn delete_by_cart_id<C: ConnectionTrait>(conn: &C, cart_id: Uuid) -> AppResult<u64> {
    let result = CartItems::delete_many()
        .filter(Column::CartId.eq(cart_id))
        .exec(conn)
        .await?;

    tracing::info!(%cart_id, removed = result.rows_affected, "cart cleared");
    Ok(result.rows_affected)
}
