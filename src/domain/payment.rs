use crate::domain::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Transfer mechanism discriminator. The display label is stable: it appears
/// in both the workflow narration and the receipt log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentKind {
    Escrow,
    Direct,
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Escrow => f.write_str("Escrow"),
            Self::Direct => f.write_str("Direct"),
        }
    }
}

/// A payment instrument attached to a milestone.
///
/// The amount is fixed at construction and never mutated; an hourly milestone
/// carries a zero-amount instrument because its payable is derived from hours
/// at settlement time.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    kind: PaymentKind,
    amount: Money,
}

impl Payment {
    pub fn escrow(amount: Money) -> Self {
        Self {
            kind: PaymentKind::Escrow,
            amount,
        }
    }

    pub fn direct(amount: Money) -> Self {
        Self {
            kind: PaymentKind::Direct,
            amount,
        }
    }

    pub fn kind(&self) -> PaymentKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Announces the transfer. Side effect only; performs no validation and
    /// cannot fail.
    pub fn process(&self) {
        match self.kind {
            PaymentKind::Escrow => {
                info!("Processing escrow payment of {}", self.amount);
                info!("Funds held in escrow until milestone completion...");
            }
            PaymentKind::Direct => {
                info!("Processing direct payment of {}", self.amount);
                info!("Payment transferred immediately...");
            }
        }
    }
}
