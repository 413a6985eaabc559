//! brewlog CLI
//!
//! Fetch random beers, keep a local history and browse it

use brewlog_core::logging_facility::{self, Profile};
use clap::{Parser, Subcommand};

mod commands;

use commands::GlobalArgs;

#[derive(Debug, Parser)]
#[command(name = "brewlog")]
#[command(about = "brewlog - fetch random beers and keep a local history", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch one random beer, record it and show the history
    Fetch,
    /// List every recorded beer
    History,
    /// Show one recorded beer
    Show(commands::show::ShowArgs),
    /// Interactive session keeping the screen state in memory
    Session,
}

fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    logging_facility::init(match cli.global.log_format {
        commands::LogFormat::Pretty => Profile::Development,
        commands::LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Fetch => commands::fetch::execute(&cli.global),
        Commands::History => commands::history::execute(&cli.global),
        Commands::Show(args) => commands::show::execute(args, &cli.global),
        Commands::Session => commands::session::execute(&cli.global),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
