use sea_orm::DatabaseConnection;

use crate::{config::AppConfig, db::create_orm_conn};

/// Store handle shared by the collaborating services.
#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
}

impl AppState {
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let orm = create_orm_conn(config).await?;
        Ok(Self { orm })
    }
}
