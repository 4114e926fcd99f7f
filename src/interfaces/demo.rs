use crate::application::workflow::Project;
use crate::domain::milestone::Milestone;
use crate::domain::money::Money;
use crate::domain::participant::Participant;
use crate::domain::payment::Payment;
use crate::infrastructure::receipt_file::FileReceiptSink;
use rust_decimal_macros::dec;
use std::path::Path;
use tracing::{info, warn};

/// Runs the hardcoded demo scenarios sequentially, sharing one receipt sink.
pub async fn run_demos(receipts: &Path) {
    let sink = FileReceiptSink::new(receipts);

    info!("--- Demo 1: fixed price settlement ---");
    let project = Project::new(
        "E-Commerce Website",
        Some(Participant::client("John Smith", "john@company.com", "TechCorp")),
        Some(Participant::freelancer(
            "Alice Johnson",
            "alice@freelance.com",
            "Backend Development",
            Money::new(dec!(75)),
        )),
        Some(Milestone::fixed_price(
            "Website",
            "Full stack",
            Payment::escrow(Money::new(dec!(2500))),
            Money::new(dec!(2500)),
        )),
        Box::new(sink.clone()),
    );
    project.execute_workflow().await;

    info!("--- Demo 2: negative hours are rejected ---");
    let mut milestone = Milestone::hourly(
        "Test Milestone",
        "Exercising the hours validation",
        Payment::direct(Money::ZERO),
        Money::new(dec!(50)),
    );
    match milestone.set_hours_worked(dec!(-5)) {
        Err(err) => warn!("Rejected hours update: {err}"),
        Ok(()) => {
            let project = Project::new(
                "Test Project",
                Some(Participant::client("Test Client", "test@test.com", "TestCo")),
                Some(Participant::freelancer(
                    "Test Freelancer",
                    "test@free.com",
                    "Testing",
                    Money::new(dec!(50)),
                )),
                Some(milestone),
                Box::new(sink.clone()),
            );
            project.execute_workflow().await;
        }
    }

    info!("--- Demo 3: zero payable aborts the workflow ---");
    let project = Project::new(
        "Pro Bono",
        Some(Participant::client("Test Client", "test@test.com", "TestCo")),
        Some(Participant::freelancer(
            "Test Freelancer",
            "test@free.com",
            "Testing",
            Money::new(dec!(50)),
        )),
        Some(Milestone::fixed_price(
            "Charity landing page",
            "No charge",
            Payment::direct(Money::ZERO),
            Money::ZERO,
        )),
        Box::new(sink),
    );
    project.execute_workflow().await;
}
