pub mod salary_service;
pub mod search_service;
pub mod student_service;
pub mod summary_service;
pub mod teacher_service;

pub use salary_service::SalaryService;
pub use search_service::SearchService;
pub use student_service::StudentService;
pub use summary_service::SummaryService;
pub use teacher_service::TeacherService;

use crate::domain::{ObligationKey, ParseError};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Recoverable command failures. A command that returns one of these has
/// left the school untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid payment amount {amount}: outstanding balance is {outstanding}")]
    InvalidAmount { amount: f64, outstanding: f64 },
    #[error("Salary {0} has already been paid")]
    AlreadyPaid(ObligationKey),
}

impl From<ParseError> for ServiceError {
    fn from(err: ParseError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

/// Money amounts compared at cent precision.
pub(crate) fn cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

pub(crate) fn require_text(field: &str, value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        Err(ServiceError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

pub(crate) fn require_amount(field: &str, value: f64) -> ServiceResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ServiceError::Validation(format!(
            "{field} must be a non-negative amount"
        )))
    }
}
