//! Closed status vocabularies shared by the delivery, payment and promo tables.
//!
//! Every enum is stored as its literal tag (`PICKED_UP`, `REFUND_INITIATED`, ...)
//! and serialized with the same tag. A row holding any other text fails to load,
//! so a fetched entity always carries a member of its enum.
//!
//! None of the enums carries a transition table: moving from any tag to any other
//! tag is accepted by the store layer.

use std::{fmt, str::FromStr};

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

macro_rules! impl_status_text {
    ($ty:ident, $kind:literal, { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $ty {
            /// The literal tag stored in the database and used on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $tag,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($ty::$variant),)+
                    _ => Err(AppError::InvalidStatus {
                        kind: $kind,
                        value: s.to_owned(),
                    }),
                }
            }
        }
    };
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "ASSIGNED")]
    Assigned,
    #[sea_orm(string_value = "ACCEPTED")]
    Accepted,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
    #[sea_orm(string_value = "REASSIGNED")]
    Reassigned,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

impl_status_text!(AssignmentStatus, "assignment status", {
    Pending => "PENDING",
    Assigned => "ASSIGNED",
    Accepted => "ACCEPTED",
    Rejected => "REJECTED",
    Reassigned => "REASSIGNED",
    Cancelled => "CANCELLED",
    Completed => "COMPLETED",
});

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "ASSIGNED")]
    Assigned,
    #[sea_orm(string_value = "ACCEPTED")]
    Accepted,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
    #[sea_orm(string_value = "PICKED_UP")]
    PickedUp,
    #[sea_orm(string_value = "IN_TRANSIT")]
    InTransit,
    #[sea_orm(string_value = "DELIVERED")]
    Delivered,
    #[sea_orm(string_value = "FAILED")]
    Failed,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

impl_status_text!(DeliveryStatus, "delivery status", {
    Pending => "PENDING",
    Assigned => "ASSIGNED",
    Accepted => "ACCEPTED",
    Rejected => "REJECTED",
    PickedUp => "PICKED_UP",
    InTransit => "IN_TRANSIT",
    Delivered => "DELIVERED",
    Failed => "FAILED",
    Cancelled => "CANCELLED",
});

/// Payment lifecycle. SUCCESS, FAILED, REFUNDED and CANCELLED are terminal;
/// PENDING, PROCESSING and REFUND_INITIATED are transient.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "PROCESSING")]
    Processing,
    #[sea_orm(string_value = "SUCCESS")]
    Success,
    #[sea_orm(string_value = "FAILED")]
    Failed,
    #[sea_orm(string_value = "REFUND_INITIATED")]
    RefundInitiated,
    #[sea_orm(string_value = "REFUNDED")]
    Refunded,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

impl PaymentStatus {
    pub fn is_terminal(&self) -> bool {
        match self {
            PaymentStatus::Success
            | PaymentStatus::Failed
            | PaymentStatus::Refunded
            | PaymentStatus::Cancelled => true,
            PaymentStatus::Pending | PaymentStatus::Processing | PaymentStatus::RefundInitiated => {
                false
            }
        }
    }
}

impl_status_text!(PaymentStatus, "payment status", {
    Pending => "PENDING",
    Processing => "PROCESSING",
    Success => "SUCCESS",
    Failed => "FAILED",
    RefundInitiated => "REFUND_INITIATED",
    Refunded => "REFUNDED",
    Cancelled => "CANCELLED",
});

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
    #[sea_orm(string_value = "EXPIRED")]
    Expired,
}

impl_status_text!(CouponStatus, "coupon status", {
    Active => "ACTIVE",
    Inactive => "INACTIVE",
    Expired => "EXPIRED",
});

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    #[sea_orm(string_value = "PERCENTAGE")]
    Percentage,
    #[sea_orm(string_value = "FLAT_DISCOUNT")]
    FlatDiscount,
    #[sea_orm(string_value = "FREE_DELIVERY")]
    FreeDelivery,
}

impl_status_text!(DiscountType, "discount type", {
    Percentage => "PERCENTAGE",
    FlatDiscount => "FLAT_DISCOUNT",
    FreeDelivery => "FREE_DELIVERY",
});

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[sea_orm(string_value = "CUSTOMER")]
    Customer,
    #[sea_orm(string_value = "RESTAURANT_OWNER")]
    RestaurantOwner,
    #[sea_orm(string_value = "DELIVERY_PARTNER")]
    DeliveryPartner,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
}

impl_status_text!(UserRole, "user role", {
    Customer => "CUSTOMER",
    RestaurantOwner => "RESTAURANT_OWNER",
    DeliveryPartner => "DELIVERY_PARTNER",
    Admin => "ADMIN",
});

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    fn tags<E: ActiveEnum<Value = String> + Iterable>() -> Vec<String> {
        E::iter().map(|v| v.to_value()).collect()
    }

    #[test]
    fn assignment_status_tags_are_exact() {
        assert_eq!(
            tags::<AssignmentStatus>(),
            [
                "PENDING",
                "ASSIGNED",
                "ACCEPTED",
                "REJECTED",
                "REASSIGNED",
                "CANCELLED",
                "COMPLETED"
            ]
        );
    }

    #[test]
    fn delivery_status_tags_are_exact() {
        assert_eq!(
            tags::<DeliveryStatus>(),
            [
                "PENDING",
                "ASSIGNED",
                "ACCEPTED",
                "REJECTED",
                "PICKED_UP",
                "IN_TRANSIT",
                "DELIVERED",
                "FAILED",
                "CANCELLED"
            ]
        );
    }

    #[test]
    fn payment_status_tags_are_exact() {
        assert_eq!(
            tags::<PaymentStatus>(),
            [
                "PENDING",
                "PROCESSING",
                "SUCCESS",
                "FAILED",
                "REFUND_INITIATED",
                "REFUNDED",
                "CANCELLED"
            ]
        );
    }

    #[test]
    fn coupon_and_discount_tags_are_exact() {
        assert_eq!(tags::<CouponStatus>(), ["ACTIVE", "INACTIVE", "EXPIRED"]);
        assert_eq!(
            tags::<DiscountType>(),
            ["PERCENTAGE", "FLAT_DISCOUNT", "FREE_DELIVERY"]
        );
    }

    fn text_matches_stored_value<E>()
    where
        E: ActiveEnum<Value = String> + Iterable + fmt::Display + FromStr + PartialEq + fmt::Debug,
    {
        for v in E::iter() {
            let text = v.to_string();
            assert_eq!(text, v.to_value());
            assert!(matches!(text.parse::<E>(), Ok(ref back) if *back == v));
        }
    }

    #[test]
    fn as_str_agrees_with_the_stored_value() {
        text_matches_stored_value::<AssignmentStatus>();
        text_matches_stored_value::<DeliveryStatus>();
        text_matches_stored_value::<PaymentStatus>();
        text_matches_stored_value::<CouponStatus>();
        text_matches_stored_value::<DiscountType>();
        text_matches_stored_value::<UserRole>();
        assert_eq!(PaymentStatus::RefundInitiated.as_str(), "REFUND_INITIATED");
        assert_eq!(UserRole::DeliveryPartner.as_str(), "DELIVERY_PARTNER");
    }

    #[test]
    fn serde_uses_the_stored_tag() {
        for status in PaymentStatus::iter() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        for status in DeliveryStatus::iter() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
        for role in UserRole::iter() {
            let back: UserRole = serde_json::from_str(&format!("\"{role}\"")).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn parse_accepts_only_literal_tags() {
        assert_eq!(
            "PICKED_UP".parse::<DeliveryStatus>().unwrap(),
            DeliveryStatus::PickedUp
        );
        assert_eq!(
            "REASSIGNED".parse::<AssignmentStatus>().unwrap(),
            AssignmentStatus::Reassigned
        );

        let err = "picked_up".parse::<DeliveryStatus>().unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidStatus { kind: "delivery status", ref value } if value == "picked_up"
        ));
        assert!("SHIPPED".parse::<AssignmentStatus>().is_err());
        assert!("".parse::<CouponStatus>().is_err());
    }

    #[test]
    fn terminal_payment_states() {
        let terminal: Vec<_> = PaymentStatus::iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(
            terminal,
            [
                PaymentStatus::Success,
                PaymentStatus::Failed,
                PaymentStatus::Refunded,
                PaymentStatus::Cancelled
            ]
        );
    }
}
