//! Showcase CLI
//!
//! Terminal front end for the product catalog: batched browsing, single
//! product details, facet listings and the resource status.

use clap::{Parser, Subcommand};

mod commands;
mod terminal;

#[derive(Debug, Parser)]
#[command(name = "showcase")]
#[command(about = "Showcase - browse the product catalog from a terminal", long_about = None)]
struct Cli {
    #[command(flatten)]
    source: commands::SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the filtered catalog batch by batch
    Browse(commands::browse::BrowseArgs),
    /// Show one product in full
    Show(commands::show::ShowArgs),
    /// List distinct categories, statuses, conditions and tags
    Facets(commands::facets::FacetsArgs),
    /// Report where the catalog was loaded from
    Status,
}

#[tokio::main]
async fn main() {
    showcase_observability::init_cli();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::execute(&cli.source, args).await,
        Commands::Show(args) => commands::show::execute(&cli.source, args).await,
        Commands::Facets(args) => commands::facets::execute(&cli.source, args).await,
        Commands::Status => commands::status::execute(&cli.source).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
