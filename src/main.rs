use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use savetrack::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for savetrack::AppCommand {
    fn from(cmd: Commands) -> savetrack::AppCommand {
        match cmd {
            Commands::Summary { offline } => savetrack::AppCommand::Summary { offline },
            Commands::Rate => savetrack::AppCommand::Rate,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display goals, progress and totals
    Summary {
        /// Skip fetching the latest exchange rate
        #[arg(long)]
        offline: bool,
    },
    /// Fetch and display the USD/INR exchange rate
    Rate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => savetrack::cli::setup::setup(),
        Some(cmd) => savetrack::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
