mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use tracing_subscriber::{fmt, EnvFilter};

use catalog_service::Catalog;

use commands::list::ListArgs;

/// Environment variable holding the log filter for non-interactive commands
const LOG_ENV: &str = "CATALOG_LOG";

/// Browse and filter the product catalog
#[derive(Parser, Debug)]
#[command(name = "catalog", version, about)]
struct Cli {
    /// Directory containing users.json, categories.json and products.json
    /// (default: the bundled sample catalog)
    #[arg(long, short = 'd', value_name = "DIR", global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive explorer (default)
    Tui,

    /// Print products matching the given filters
    List(ListArgs),

    /// Print the users available as owner filters
    Users,

    /// Print the categories available as category filters
    Categories,

    /// Load the catalog and check its references
    Validate,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let data = cli.data.as_deref();

    let command = cli.command.unwrap_or(Command::Tui);

    // Logging stays off for the explorer so nothing writes over the alternate screen
    if !matches!(command, Command::Tui) {
        init_tracing();
    }

    match command {
        Command::Tui => catalog_tui::run(Catalog::load(data)?),
        Command::List(args) => commands::list::execute(args, Catalog::load(data)?),
        Command::Users => commands::choices::users(&Catalog::load(data)?),
        Command::Categories => commands::choices::categories(&Catalog::load(data)?),
        Command::Validate => {
            match data {
                Some(dir) => output::status("Validating", &format!("{}", dir.display())),
                None => output::status("Validating", "bundled catalog"),
            }
            commands::validate::execute(Catalog::load(data))
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        output::warning(&format!("tracing init failed: {}", e));
    }
}
