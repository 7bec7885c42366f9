//! Attribute-based lookups, one module per table.
//!
//! Every function takes the store handle explicitly and is generic over
//! [`sea_orm::ConnectionTrait`], so the same lookup runs on a pooled
//! connection or inside an open transaction. Function names spell out the
//! predicate they apply: `find_by_city_and_is_active_true` filters on
//! `city = $1 AND is_active = true` and nothing else.
//!
//! Empty results are never errors. Single-row lookups assume the column is
//! unique for the rows in question and return whichever match the store yields
//! first otherwise. Multi-row lookups come back in store order unless the name
//! carries an ordering suffix.

pub mod assignment_repository;
pub mod cart_item_repository;
pub mod coupon_repository;
pub mod delivery_repository;
pub mod menu_item_repository;
pub mod payment_repository;
pub mod restaurant_repository;
pub mod user_repository;

use sea_orm::sea_query::LikeExpr;

/// `LIKE` pattern matching `fragment` as literal text anywhere in the column.
/// `%`, `_` and `\` in the fragment are escaped rather than treated as wildcards.
pub(crate) fn containing(fragment: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    for ch in fragment.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}
