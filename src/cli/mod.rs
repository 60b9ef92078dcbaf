// ============================================================
// CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes to the use cases.
// This is the only layer that prints:
//
//   train     → evaluation tables for the holdout rows
//   evaluate  → evaluation tables
//   parse     → one pretty JSON document per parsed résumé

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, EvaluateArgs, ParseArgs, TrainArgs};

use resume_sections::application::evaluate_use_case::EvaluationSummary;

#[derive(Parser, Debug)]
#[command(
    name = "resume-sections",
    version,
    about = "Classify résumé lines, extract sections and cluster work history."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args)    => run_train(args),
            Commands::Evaluate(args) => run_evaluate(args),
            Commands::Parse(args)    => run_parse(args),
        }
    }
}

fn run_train(args: TrainArgs) -> Result<()> {
    use resume_sections::application::train_use_case::TrainUseCase;

    tracing::info!("Training on records in: {}", args.records_csv.display());
    let model_dir = args.model_dir.clone();

    match TrainUseCase::new(args.into()).execute()? {
        Some(summary) => print_summary(&summary),
        None => println!("No holdout rows, evaluation skipped."),
    }
    println!("Training complete. Models saved to '{}'.", model_dir.display());
    Ok(())
}

fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    use resume_sections::application::evaluate_use_case::EvaluateUseCase;

    let summary = EvaluateUseCase::new(args.into()).execute()?;
    print_summary(&summary);
    Ok(())
}

fn run_parse(args: ParseArgs) -> Result<()> {
    use resume_sections::application::parse_use_case::ParseUseCase;

    let use_case = ParseUseCase::new(&args.model_dir, (&args).into());
    for parsed in use_case.execute(&args.files)? {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    }
    Ok(())
}

fn print_summary(summary: &EvaluationSummary) {
    for (name, report) in summary.named() {
        println!("\n── {name} classifier ──\n{report}");
    }
}
