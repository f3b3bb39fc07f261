use crate::query::{run_catalog, run_query, QueryArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use profile_intake::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Profile Intake",
    about = "Collect student profiles and review them with composable filters",
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
    /// Run a filter query against a JSON snapshot and print the result page
    Query(QueryArgs),
    /// Print the static tag catalog offered by the intake form
    Catalog,
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
        Command::Query(args) => run_query(args),
        Command::Catalog => run_catalog(),
    }
}
