//! CLI for extracting vCards from imprints, email signatures and business cards.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, config, correct, extract, merge, parse};

/// kontakt - Turn unstructured contact text into vCard 3.0
#[derive(Parser)]
#[command(name = "kontakt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a contact from text (file or stdin)
    Extract(extract::ExtractArgs),

    /// Extract contacts from multiple text files
    Batch(batch::BatchArgs),

    /// Parse a vCard file
    Parse(parse::ParseArgs),

    /// Merge and deduplicate vCard files
    Merge(merge::MergeArgs),

    /// Let an AI model build or update a vCard
    Correct(correct::CorrectArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Extract(args) => extract::run(args, config_path),
        Commands::Batch(args) => batch::run(args, config_path),
        Commands::Parse(args) => parse::run(args, config_path),
        Commands::Merge(args) => merge::run(args),
        Commands::Correct(args) => correct::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path),
    }
}
