use food_delivery_store::{
    config::AppConfig,
    db::run_migrations,
    models,
    repository::{
        coupon_repository::{self, NewCoupon},
        menu_item_repository::{self, NewMenuItem},
        restaurant_repository::{self, NewRestaurant},
        user_repository::{self, NewUser},
    },
    state::AppState,
    status::{DiscountType, UserRole},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,food_delivery_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::connect(&config).await?;
    // Ensure migrations are applied.
    run_migrations(&state.orm).await?;

    let owner_id = ensure_user(
        &state,
        "owner@example.com",
        "Asha Kulkarni",
        "+919800000001",
        UserRole::RestaurantOwner,
    )
    .await?;
    let partner_id = ensure_user(
        &state,
        "rider@example.com",
        "Vikram Rao",
        "+919800000002",
        UserRole::DeliveryPartner,
    )
    .await?;
    ensure_user(
        &state,
        "customer@example.com",
        "Meera Shah",
        "+919800000003",
        UserRole::Customer,
    )
    .await?;

    let restaurant_id = ensure_restaurant(&state, owner_id).await?;
    seed_menu(&state, restaurant_id).await?;
    seed_coupons(&state).await?;

    println!("Seed completed. Restaurant ID: {restaurant_id}, Partner ID: {partner_id}");
    Ok(())
}

async fn ensure_user(
    state: &AppState,
    email: &str,
    name: &str,
    phone: &str,
    role: UserRole,
) -> anyhow::Result<Uuid> {
    if let Some(existing) = user_repository::find_by_email(&state.orm, email).await? {
        println!("User {email} already exists");
        return Ok(existing.id);
    }

    let user = user_repository::create(
        &state.orm,
        NewUser {
            email: email.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            role,
            address: Some("MG Road, Pune".to_string()),
        },
    )
    .await?;

    println!("Created user {email} (role={role})");
    Ok(user.id)
}

async fn ensure_restaurant(state: &AppState, owner_id: Uuid) -> anyhow::Result<Uuid> {
    let owned = restaurant_repository::find_by_owner_id(&state.orm, owner_id).await?;
    if let Some(existing) = owned.into_iter().next() {
        println!("Restaurant {} already exists", existing.name);
        return Ok(existing.id);
    }

    let restaurant = restaurant_repository::create(
        &state.orm,
        NewRestaurant {
            name: "Vaishali".into(),
            city: "Pune".into(),
            cuisine: "South Indian".into(),
            owner_id,
            address: "FC Road, Shivajinagar".into(),
        },
    )
    .await?;
    let id = restaurant.id;
    println!(
        "Created restaurant {}",
        serde_json::to_string_pretty(&models::Restaurant::from(restaurant))?
    );
    Ok(id)
}

async fn seed_menu(state: &AppState, restaurant_id: Uuid) -> anyhow::Result<()> {
    if !menu_item_repository::find_by_restaurant_id(&state.orm, restaurant_id)
        .await?
        .is_empty()
    {
        return Ok(());
    }

    let items = [
        ("Masala Dosa", "Breakfast", 12_000, true, true),
        ("Idli Sambar", "Breakfast", 8_000, true, false),
        ("Chicken Biryani", "Mains", 28_000, false, true),
        ("Filter Coffee", "Beverages", 4_500, true, false),
    ];

    let mut created = Vec::with_capacity(items.len());
    for (name, category, price, is_vegetarian, is_bestseller) in items {
        let item = menu_item_repository::create(
            &state.orm,
            NewMenuItem {
                restaurant_id,
                name: name.into(),
                description: None,
                price,
                category: category.into(),
                is_vegetarian,
                is_bestseller,
            },
        )
        .await?;
        created.push(models::MenuItem::from(item));
    }

    println!(
        "Seeded {} menu items: {}",
        created.len(),
        serde_json::to_string_pretty(&created)?
    );
    Ok(())
}

async fn seed_coupons(state: &AppState) -> anyhow::Result<()> {
    let coupons = [
        ("WELCOME50", DiscountType::Percentage, 50, 19_900),
        ("FLAT100", DiscountType::FlatDiscount, 10_000, 49_900),
        ("FREEDEL", DiscountType::FreeDelivery, 0, 0),
    ];

    for (code, discount_type, discount_value, min_order_amount) in coupons {
        if coupon_repository::find_by_code(&state.orm, code).await?.is_some() {
            continue;
        }
        let coupon = coupon_repository::create(
            &state.orm,
            NewCoupon {
                code: code.into(),
                discount_type,
                discount_value,
                min_order_amount,
                valid_until: None,
            },
        )
        .await?;
        println!(
            "Created coupon {}",
            serde_json::to_string(&models::Coupon::from(coupon))?
        );
    }

    Ok(())
}
