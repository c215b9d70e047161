use crate::commands::{run_analyze, run_batch, run_export, AnalyzeArgs, BatchArgs, ExportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pillar_review::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "pillar-review",
    about = "Collect pillar project counters, analyze delivery status and export summaries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP form and API (default command)
    Serve(ServeArgs),
    /// Run a pillar review from the command line
    Review {
        #[command(subcommand)]
        command: ReviewCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ReviewCommand {
    /// Print the analysis for one pillar
    Analyze(AnalyzeArgs),
    /// Write the chart, summary image and slide deck for one pillar
    Export(ExportArgs),
    /// Export every pillar listed in a CSV file
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Review { command } => match command {
            ReviewCommand::Analyze(args) => run_analyze(args),
            ReviewCommand::Export(args) => run_export(args),
            ReviewCommand::Batch(args) => run_batch(args),
        },
    }
}
