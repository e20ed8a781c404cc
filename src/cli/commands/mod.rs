//! CLI parser and command dispatch.

mod extract;
mod init;
mod list;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;

use extract::cmd_extract;
use init::cmd_init;
use list::cmd_list;
use serve::cmd_serve;

#[derive(Parser)]
#[command(name = "idscan")]
#[command(about = "Identity card OCR extraction and upload API")]
#[command(version)]
pub struct Cli {
    /// Data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and database
    Init,

    /// Start the upload API server
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT (default: 127.0.0.1:8000)
        #[arg(default_value = "127.0.0.1:8000")]
        bind: String,
    },

    /// Extract fields from a local card PDF without starting the server
    Extract {
        /// PDF file to process
        file: PathBuf,
        /// Save the result to the database
        #[arg(short, long)]
        save: bool,
    },

    /// List processed cards
    List {
        /// Limit number of results
        #[arg(short, long, default_value = "50")]
        limit: i64,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match cli.data_dir {
        Some(data_dir) => Settings::with_data_dir(data_dir),
        None => Settings::from_env(),
    };

    match cli.command {
        Commands::Init => cmd_init(&settings).await,
        Commands::Serve { bind } => cmd_serve(settings, &bind).await,
        Commands::Extract { file, save } => cmd_extract(&settings, &file, save).await,
        Commands::List { limit } => cmd_list(&settings, limit).await,
    }
}
