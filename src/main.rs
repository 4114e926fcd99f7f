use clap::Parser;
use miette::{IntoDiagnostic, Result};
use milepost::application::workflow::WorkflowOutcome;
use milepost::infrastructure::receipt_file::FileReceiptSink;
use milepost::interfaces::cli::{Cli, Commands, build_project};
use milepost::interfaces::demo;
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("milepost=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo { receipts } => {
            demo::run_demos(&receipts).await;
        }
        Commands::Run(args) => {
            let sink = FileReceiptSink::new(&args.receipts);
            let outcome = match build_project(&args, Box::new(sink)) {
                Ok(project) => project.execute_workflow().await,
                Err(err) => {
                    error!("Workflow aborted before execution: {err}");
                    WorkflowOutcome::Failed(err)
                }
            };

            if args.json {
                let report = outcome.report(&args.project);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).into_diagnostic()?
                );
            }

            if !outcome.is_completed() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
