//! Point d'entrée CLI pour csv-latlon

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod map;
mod report;
mod reproject;

use cli::{Commands, ConvertArgs};

/// Augmenter un CSV avec des colonnes lon/lat dérivées d'une colonne WKT
#[derive(Parser)]
#[command(name = "csv-latlon")]
#[command(author, version)]
#[command(about = "Augmenter un CSV avec des colonnes lon/lat dérivées d'une colonne WKT")]
#[command(long_about = "Lit un CSV contenant une colonne de géométries WKT (points), dérive les colonnes lon/lat, et écrit le CSV augmenté.\n\nPar défaut, convertit le fichier. Utilisez 'preview' pour un aperçu (échantillon + carte GeoJSON).")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Sous-commande (défaut: convert)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments pour la conversion (commande par défaut)
    #[command(flatten)]
    convert: Option<ConvertArgs>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Some(Commands::Convert(args)) => {
            info!(input = %args.input.display(), "Convert");
            cli::cmd_convert(&args)?;
        }
        Some(Commands::Preview(args)) => {
            info!(input = %args.input.display(), "Preview");
            cli::cmd_preview(&args)?;
        }
        None => {
            // Commande par défaut: convert
            let args = cli.convert.expect("Arguments de conversion requis (--input)");
            info!(input = %args.input.display(), "Convert");
            cli::cmd_convert(&args)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
