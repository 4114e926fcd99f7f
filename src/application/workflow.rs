use crate::domain::milestone::Milestone;
use crate::domain::money::Money;
use crate::domain::participant::Participant;
use crate::domain::payment::PaymentKind;
use crate::domain::ports::ReceiptSinkBox;
use crate::domain::receipt::Receipt;
use crate::error::{Result, WorkflowError};
use serde::Serialize;
use tracing::{error, info};

/// Terminal state of one workflow run.
///
/// The orchestrator reports every failure on the error log channel exactly
/// once and then returns it here; nothing escapes as a panic or a bare `Err`.
#[derive(Debug)]
pub enum WorkflowOutcome {
    Completed(Receipt),
    Failed(WorkflowError),
}

impl WorkflowOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Flattens the outcome into a serializable summary for outer surfaces.
    pub fn report(&self, project: &str) -> WorkflowReport {
        match self {
            Self::Completed(receipt) => WorkflowReport {
                project: project.to_string(),
                status: "completed",
                milestone: Some(receipt.milestone.clone()),
                amount: Some(receipt.amount),
                payment_type: Some(receipt.payment_kind),
                error: None,
            },
            Self::Failed(err) => WorkflowReport {
                project: project.to_string(),
                status: "failed",
                milestone: None,
                amount: None,
                payment_type: None,
                error: Some(err.to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WorkflowReport {
    pub project: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A client and a freelancer paired on one milestone with one payment
/// instrument and a receipt sink.
///
/// The project exclusively owns its participants and milestone (which in
/// turn owns its payment); everything is consumed by a single workflow run.
pub struct Project {
    name: String,
    client: Option<Participant>,
    freelancer: Option<Participant>,
    milestone: Option<Milestone>,
    receipts: ReceiptSinkBox,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        client: Option<Participant>,
        freelancer: Option<Participant>,
        milestone: Option<Milestone>,
        receipts: ReceiptSinkBox,
    ) -> Self {
        Self {
            name: name.into(),
            client,
            freelancer,
            milestone,
            receipts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the settlement workflow to completion or first failure.
    ///
    /// Sequence: precondition check, participant and milestone narration,
    /// completion, payable check, payment processing, receipt append. A
    /// failure at any step stops the run; already-applied state (a completed
    /// milestone, for instance) is not rolled back.
    pub async fn execute_workflow(mut self) -> WorkflowOutcome {
        match self.run().await {
            Ok(receipt) => {
                info!("=== PROJECT WORKFLOW COMPLETED SUCCESSFULLY ===");
                WorkflowOutcome::Completed(receipt)
            }
            Err(err) => {
                error!("Error during execution: {err}");
                WorkflowOutcome::Failed(err)
            }
        }
    }

    async fn run(&mut self) -> Result<Receipt> {
        let client = self
            .client
            .as_ref()
            .ok_or(WorkflowError::MissingParticipant("client"))?;
        let freelancer = self
            .freelancer
            .as_ref()
            .ok_or(WorkflowError::MissingParticipant("freelancer"))?;
        let milestone = self
            .milestone
            .as_mut()
            .ok_or(WorkflowError::MissingParticipant("milestone"))?;

        info!("=== PROJECT WORKFLOW START ===");
        info!("Project: {}", self.name);

        info!("Participants:");
        info!("{client}");
        info!("{freelancer}");

        info!("Milestone details:");
        info!("Milestone: {}", milestone.title());
        info!("Description: {}", milestone.description());
        info!("Status: {}", milestone.status());
        info!("Payment Method: {}", milestone.payment().kind());

        milestone.complete()?;

        let amount = milestone.amount_due();
        if !amount.is_positive() {
            return Err(WorkflowError::PaymentFailure(amount));
        }

        milestone.payment().process();

        let receipt = Receipt::new(milestone.title(), amount, milestone.payment().kind());
        self.receipts.append(&receipt).await?;

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::Payment;
    use crate::infrastructure::in_memory::InMemoryReceiptSink;
    use rust_decimal_macros::dec;

    fn participants() -> (Participant, Participant) {
        (
            Participant::client("John Smith", "john@company.com", "TechCorp"),
            Participant::freelancer(
                "Alice Johnson",
                "alice@freelance.com",
                "Backend Development",
                Money::new(dec!(75)),
            ),
        )
    }

    #[tokio::test]
    async fn test_missing_client_never_reaches_the_sink() {
        let sink = InMemoryReceiptSink::new();
        let (_, freelancer) = participants();
        let milestone = Milestone::fixed_price(
            "Website",
            "Full stack",
            Payment::escrow(Money::new(dec!(2500))),
            Money::new(dec!(2500)),
        );

        let project = Project::new(
            "E-Commerce Website",
            None,
            Some(freelancer),
            Some(milestone),
            Box::new(sink.clone()),
        );
        let outcome = project.execute_workflow().await;

        assert!(
            matches!(outcome, WorkflowOutcome::Failed(WorkflowError::MissingParticipant("client")))
        );
        assert!(sink.receipts().await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_milestone_never_reaches_the_sink() {
        let sink = InMemoryReceiptSink::new();
        let (client, freelancer) = participants();

        let project = Project::new(
            "E-Commerce Website",
            Some(client),
            Some(freelancer),
            None,
            Box::new(sink.clone()),
        );
        let outcome = project.execute_workflow().await;

        assert!(matches!(
            outcome,
            WorkflowOutcome::Failed(WorkflowError::MissingParticipant("milestone"))
        ));
        assert!(sink.receipts().await.is_empty());
    }

    #[tokio::test]
    async fn test_zero_amount_fails_before_logging() {
        let sink = InMemoryReceiptSink::new();
        let (client, freelancer) = participants();
        let milestone = Milestone::fixed_price(
            "Website",
            "Full stack",
            Payment::escrow(Money::ZERO),
            Money::ZERO,
        );

        let project = Project::new(
            "E-Commerce Website",
            Some(client),
            Some(freelancer),
            Some(milestone),
            Box::new(sink.clone()),
        );
        let outcome = project.execute_workflow().await;

        assert!(matches!(
            outcome,
            WorkflowOutcome::Failed(WorkflowError::PaymentFailure(amount)) if amount == Money::ZERO
        ));
        assert!(sink.receipts().await.is_empty());
    }

    #[tokio::test]
    async fn test_settled_workflow_appends_one_receipt() {
        let sink = InMemoryReceiptSink::new();
        let (client, freelancer) = participants();
        let milestone = Milestone::fixed_price(
            "Website",
            "Full stack",
            Payment::escrow(Money::new(dec!(2500))),
            Money::new(dec!(2500)),
        );

        let project = Project::new(
            "E-Commerce Website",
            Some(client),
            Some(freelancer),
            Some(milestone),
            Box::new(sink.clone()),
        );
        let outcome = project.execute_workflow().await;

        assert!(outcome.is_completed());
        let receipts = sink.receipts().await;
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].milestone, "Website");
        assert_eq!(receipts[0].amount, Money::new(dec!(2500)));
        assert_eq!(receipts[0].payment_kind, PaymentKind::Escrow);
    }

    #[tokio::test]
    async fn test_report_serializes_failure_kind() {
        let sink = InMemoryReceiptSink::new();
        let project = Project::new("Empty", None, None, None, Box::new(sink));
        let outcome = project.execute_workflow().await;

        let report = outcome.report("Empty");
        assert_eq!(report.status, "failed");
        assert!(report.error.unwrap().contains("missing client"));
    }
}
