use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Invalid {kind} '{value}'")]
    InvalidStatus { kind: &'static str, value: String },

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),
}

impl AppError {
    /// True when the failure came from the backing store rather than the caller.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, AppError::OrmError(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_orm_errors_count_as_store_failures() {
        let store = AppError::from(sea_orm::DbErr::Custom("connection reset".into()));
        assert!(store.is_store_failure());

        let invalid = AppError::InvalidStatus {
            kind: "payment status",
            value: "PAID".into(),
        };
        assert!(!invalid.is_store_failure());
        assert_eq!(invalid.to_string(), "Invalid payment status 'PAID'");
        assert!(!AppError::NotFound.is_store_failure());
    }
}
