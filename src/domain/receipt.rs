use crate::domain::money::Money;
use crate::domain::payment::PaymentKind;
use chrono::{DateTime, Local};
use serde::Serialize;

/// An audit record for one settled milestone.
///
/// The timestamp is taken from the wall clock when the workflow settles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub milestone: String,
    pub amount: Money,
    pub payment_kind: PaymentKind,
    pub timestamp: DateTime<Local>,
}

impl Receipt {
    pub fn new(milestone: impl Into<String>, amount: Money, payment_kind: PaymentKind) -> Self {
        Self {
            milestone: milestone.into(),
            amount,
            payment_kind,
            timestamp: Local::now(),
        }
    }

    /// Renders the fixed receipt block appended to the log.
    ///
    /// Titles are not escaped; a title containing a newline corrupts the
    /// block boundaries.
    pub fn render(&self) -> String {
        format!(
            "=== PAYMENT RECEIPT ===\n\
             Milestone: {}\n\
             Amount: {}\n\
             Payment Type: {}\n\
             Timestamp: {}\n\
             ========================\n\n",
            self.milestone,
            self.amount,
            self.payment_kind,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}
