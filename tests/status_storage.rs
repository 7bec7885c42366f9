mod common;

use food_delivery_store::{
    error::AppError,
    repository::{assignment_repository, payment_repository},
    status::AssignmentStatus,
};
use sea_orm::{ConnectionTrait, Statement, Value};
use uuid::Uuid;

#[tokio::test]
async fn rows_with_unknown_tags_never_load() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let order_id = Uuid::new_v4();
    let now = common::at_minute(0);

    let backend = state.orm.get_database_backend();
    state
        .orm
        .execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO assignments (id, order_id, partner_id, customer_id, status, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            [
                Value::from(Uuid::new_v4()),
                Value::from(order_id),
                Value::from(Uuid::new_v4()),
                Value::from(Uuid::new_v4()),
                Value::from("SHIPPED"),
                Value::from(now),
                Value::from(now),
            ],
        ))
        .await?;

    let result = assignment_repository::find_by_order_id(&state.orm, order_id).await;
    assert!(matches!(result, Err(ref err) if err.is_store_failure()));
    Ok(())
}

#[tokio::test]
async fn stored_tags_round_trip_through_the_store() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let created = assignment_repository::create(
        &state.orm,
        assignment_repository::NewAssignment {
            order_id: Uuid::new_v4(),
            partner_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
        },
    )
    .await?;

    let reassigned =
        assignment_repository::update_status(&state.orm, created.id, "REASSIGNED".parse()?).await?;
    assert_eq!(reassigned.status, AssignmentStatus::Reassigned);

    let bad: Result<AssignmentStatus, AppError> = "reassigned".parse();
    assert!(matches!(bad, Err(AppError::InvalidStatus { .. })));

    assert!(
        payment_repository::find_by_user_id(&state.orm, Uuid::new_v4())
            .await?
            .is_empty()
    );
    Ok(())
}
