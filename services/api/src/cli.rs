use crate::commands::{run_assess, run_catalog, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use gift_engine::error::AppError;
use gift_engine::gifts::ThresholdFactor;

#[derive(Parser, Debug)]
#[command(
    name = "Gift Assessment Engine",
    about = "Score motivational gift assessments over HTTP or from the command line",
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
    /// Score a JSON file of answers and print the classification
    Assess(AssessArgs),
    /// List the gift categories answers are scored against
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
    /// Override the default secondary gift threshold factor (0 < factor <= 1)
    #[arg(long, value_parser = crate::infra::parse_threshold_arg)]
    pub(crate) threshold: Option<ThresholdFactor>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Catalog => {
            run_catalog();
            Ok(())
        }
    }
}
