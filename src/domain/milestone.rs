use crate::domain::money::Money;
use crate::domain::payment::Payment;
use crate::error::{Result, WorkflowError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneStatus {
    Pending,
    Completed,
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("Pending"),
            Self::Completed => f.write_str("Completed"),
        }
    }
}

/// How a milestone's payable is computed once it completes.
#[derive(Debug, Clone, PartialEq)]
pub enum Billing {
    FixedPrice {
        amount: Money,
    },
    Hourly {
        hours_worked: Decimal,
        hourly_rate: Money,
    },
}

/// A unit of billable work with a one-way Pending → Completed transition.
///
/// Owns its payment instrument. `amount_due` is zero strictly until the
/// milestone completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    title: String,
    description: String,
    status: MilestoneStatus,
    payment: Payment,
    billing: Billing,
}

impl Milestone {
    pub fn fixed_price(
        title: impl Into<String>,
        description: impl Into<String>,
        payment: Payment,
        amount: Money,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: MilestoneStatus::Pending,
            payment,
            billing: Billing::FixedPrice { amount },
        }
    }

    /// Hours start at zero and must be applied through `set_hours_worked`
    /// before the milestone can complete.
    pub fn hourly(
        title: impl Into<String>,
        description: impl Into<String>,
        payment: Payment,
        hourly_rate: Money,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: MilestoneStatus::Pending,
            payment,
            billing: Billing::Hourly {
                hours_worked: Decimal::ZERO,
                hourly_rate,
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> MilestoneStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == MilestoneStatus::Completed
    }

    pub fn payment(&self) -> &Payment {
        &self.payment
    }

    /// Stores the hours worked on an hourly milestone.
    ///
    /// Negative hours are rejected and leave the stored value unchanged.
    /// Calling this on a fixed-price milestone is a wiring mistake and fails.
    pub fn set_hours_worked(&mut self, hours: Decimal) -> Result<()> {
        match &mut self.billing {
            Billing::Hourly { hours_worked, .. } => {
                if hours < Decimal::ZERO {
                    return Err(WorkflowError::InvalidHours(hours));
                }
                *hours_worked = hours;
                Ok(())
            }
            Billing::FixedPrice { .. } => Err(WorkflowError::NotHourly(self.title.clone())),
        }
    }

    /// Transitions the milestone to Completed.
    ///
    /// An hourly milestone refuses to complete with zero or negative stored
    /// hours. Completing twice is rejected and changes nothing.
    pub fn complete(&mut self) -> Result<()> {
        if self.status == MilestoneStatus::Completed {
            return Err(WorkflowError::AlreadyCompleted(self.title.clone()));
        }
        if let Billing::Hourly { hours_worked, .. } = &self.billing
            && *hours_worked <= Decimal::ZERO
        {
            return Err(WorkflowError::InvalidHours(*hours_worked));
        }

        self.status = MilestoneStatus::Completed;
        match &self.billing {
            Billing::FixedPrice { .. } => {
                info!("Fixed-price milestone '{}' completed!", self.title);
            }
            Billing::Hourly {
                hours_worked,
                hourly_rate,
            } => {
                info!("Hourly milestone '{}' completed!", self.title);
                info!("Hours worked: {hours_worked} at {hourly_rate}/hr");
            }
        }
        info!("Payment amount: {}", self.amount_due());
        Ok(())
    }

    /// Pure query: zero until completion, then the billing formula.
    pub fn amount_due(&self) -> Money {
        if self.status != MilestoneStatus::Completed {
            return Money::ZERO;
        }
        match &self.billing {
            Billing::FixedPrice { amount } => *amount,
            Billing::Hourly {
                hours_worked,
                hourly_rate,
            } => *hourly_rate * *hours_worked,
        }
    }
}
