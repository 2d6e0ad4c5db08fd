use crate::report::{run_recommendation, run_sector_validation, RecommendArgs, SectorPathArgs};
use crate::server;
use career_match::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Match",
    about = "Score vocational assessments and rank eligible sectors",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the sector tables
    Sectors {
        #[command(subcommand)]
        command: SectorsCommand,
    },
    /// Score an answers file and print the sector shortlist
    Recommend(RecommendArgs),
}

#[derive(Subcommand, Debug)]
enum SectorsCommand {
    /// Check the catalog, gate and weight tables and list every problem found
    Validate(SectorPathArgs),
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
        Command::Sectors {
            command: SectorsCommand::Validate(args),
        } => run_sector_validation(args),
        Command::Recommend(args) => run_recommendation(args),
    }
}
