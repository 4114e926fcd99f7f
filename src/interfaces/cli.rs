use crate::application::workflow::Project;
use crate::domain::milestone::Milestone;
use crate::domain::money::Money;
use crate::domain::participant::Participant;
use crate::domain::payment::Payment;
use crate::domain::ports::ReceiptSinkBox;
use crate::error::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute a single project workflow described by flags
    Run(RunArgs),

    /// Run the built-in demo scenarios
    Demo {
        /// Receipt log path, shared by all demo runs
        #[arg(long, default_value = "payment_receipts.txt")]
        receipts: PathBuf,
    },
}

#[derive(Args)]
pub struct RunArgs {
    /// Project name
    #[arg(long)]
    pub project: String,

    #[arg(long)]
    pub client_name: String,
    #[arg(long)]
    pub client_email: String,
    #[arg(long)]
    pub client_company: String,

    #[arg(long)]
    pub freelancer_name: String,
    #[arg(long)]
    pub freelancer_email: String,
    #[arg(long)]
    pub freelancer_skills: String,
    #[arg(long)]
    pub freelancer_rate: Decimal,

    #[arg(long)]
    pub milestone_title: String,
    #[arg(long, default_value = "")]
    pub milestone_description: String,

    /// How the milestone is billed
    #[arg(long, value_enum)]
    pub billing: BillingChoice,

    /// Fixed price amount (fixed-price milestones only)
    #[arg(long, required_if_eq("billing", "fixed-price"))]
    pub amount: Option<Decimal>,

    /// Hours worked (hourly milestones only)
    #[arg(long, required_if_eq("billing", "hourly"), allow_hyphen_values = true)]
    pub hours: Option<Decimal>,

    /// Transfer mechanism
    #[arg(long, value_enum, default_value_t = PaymentChoice::Escrow)]
    pub payment: PaymentChoice,

    /// Receipt log path
    #[arg(long, default_value = "payment_receipts.txt")]
    pub receipts: PathBuf,

    /// Print the workflow outcome as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BillingChoice {
    FixedPrice,
    Hourly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaymentChoice {
    Escrow,
    Direct,
}

impl PaymentChoice {
    fn instrument(self, amount: Money) -> Payment {
        match self {
            Self::Escrow => Payment::escrow(amount),
            Self::Direct => Payment::direct(amount),
        }
    }
}

/// Builds a fully wired project from the command line.
///
/// A fixed-price milestone's payment carries the fixed amount. An hourly
/// milestone's payment starts at zero (the payable is derived from hours at
/// settlement), the freelancer's rate drives the calculation, and the hours
/// go through the validating setter, so negative input aborts here before
/// any workflow runs.
pub fn build_project(args: &RunArgs, receipts: ReceiptSinkBox) -> Result<Project> {
    let client = Participant::client(&args.client_name, &args.client_email, &args.client_company);
    let rate = Money::new(args.freelancer_rate);
    let freelancer = Participant::freelancer(
        &args.freelancer_name,
        &args.freelancer_email,
        &args.freelancer_skills,
        rate,
    );

    let milestone = match args.billing {
        BillingChoice::FixedPrice => {
            let amount = Money::new(args.amount.unwrap_or_default());
            Milestone::fixed_price(
                &args.milestone_title,
                &args.milestone_description,
                args.payment.instrument(amount),
                amount,
            )
        }
        BillingChoice::Hourly => {
            let mut milestone = Milestone::hourly(
                &args.milestone_title,
                &args.milestone_description,
                args.payment.instrument(Money::ZERO),
                rate,
            );
            milestone.set_hours_worked(args.hours.unwrap_or_default())?;
            milestone
        }
    };

    Ok(Project::new(
        &args.project,
        Some(client),
        Some(freelancer),
        Some(milestone),
        receipts,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkflowError;
    use crate::infrastructure::in_memory::InMemoryReceiptSink;
    use rust_decimal_macros::dec;

    fn base_args() -> RunArgs {
        RunArgs {
            project: "E-Commerce Website".to_string(),
            client_name: "John Smith".to_string(),
            client_email: "john@company.com".to_string(),
            client_company: "TechCorp".to_string(),
            freelancer_name: "Alice Johnson".to_string(),
            freelancer_email: "alice@freelance.com".to_string(),
            freelancer_skills: "Backend Development".to_string(),
            freelancer_rate: dec!(75),
            milestone_title: "Website".to_string(),
            milestone_description: "Full stack".to_string(),
            billing: BillingChoice::FixedPrice,
            amount: Some(dec!(2500)),
            hours: None,
            payment: PaymentChoice::Escrow,
            receipts: PathBuf::from("payment_receipts.txt"),
            json: false,
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_fixed_price_project() {
        let args = base_args();
        let project = build_project(&args, Box::new(InMemoryReceiptSink::new())).unwrap();
        assert_eq!(project.name(), "E-Commerce Website");
    }

    #[test]
    fn test_build_rejects_negative_hours() {
        let mut args = base_args();
        args.billing = BillingChoice::Hourly;
        args.amount = None;
        args.hours = Some(dec!(-5));

        let result = build_project(&args, Box::new(InMemoryReceiptSink::new()));
        assert!(matches!(result, Err(WorkflowError::InvalidHours(h)) if h == dec!(-5)));
    }
}
