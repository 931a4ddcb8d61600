use anyhow::Result;
use clap::{Parser, Subcommand};
use platewise::cli::{history::HistoryArgs, suggest::SuggestArgs};

/// platewise - meal suggestions from your own cooking history
#[derive(Parser)]
#[command(name = "platewise")]
#[command(about = "Ranked meal suggestions from your catalog and plan history", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest meals for a slot
    Suggest(SuggestArgs),
    /// Show how often each meal was planned recently
    History(HistoryArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = platewise::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    platewise::observability::init_observability(
        "platewise",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Suggest(args) => platewise::cli::suggest::run(&config, args, &mut stdout).await,
        Commands::History(args) => platewise::cli::history::run(&config, args, &mut stdout).await,
    }
}
