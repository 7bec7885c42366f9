pub mod assignments;
pub mod cart_items;
pub mod coupons;
pub mod deliveries;
pub mod menu_items;
pub mod payments;
pub mod restaurants;
pub mod users;

pub use assignments::Entity as Assignments;
pub use cart_items::Entity as CartItems;
pub use coupons::Entity as Coupons;
pub use deliveries::Entity as Deliveries;
pub use menu_items::Entity as MenuItems;
pub use payments::Entity as Payments;
pub use restaurants::Entity as Restaurants;
pub use users::Entity as Users;
