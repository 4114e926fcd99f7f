use crate::domain::money::Money;
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkflowError>;

/// Failure kinds observable at the workflow boundary.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Invalid hours worked: {0} (must be positive)")]
    InvalidHours(Decimal),
    #[error("Project wiring incomplete: missing {0}")]
    MissingParticipant(&'static str),
    #[error("Payment processing failed: computed amount {0} is not positive")]
    PaymentFailure(Money),
    #[error("Milestone '{0}' is already completed")]
    AlreadyCompleted(String),
    #[error("Milestone '{0}' is not billed hourly")]
    NotHourly(String),
    #[error("Receipt log error: {0}")]
    Io(#[from] std::io::Error),
}
