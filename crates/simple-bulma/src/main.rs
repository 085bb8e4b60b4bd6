//! simple-bulma CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "simple-bulma")]
#[command(version)]
#[command(about = "Bulma theming for static sites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the CSS custom properties for a theme
    Vars {
        /// Settings file (defaults to ./bulma.toml when present)
        #[arg(short = 's', long)]
        settings: Option<PathBuf>,

        /// Theme to print (defaults to the default theme)
        #[arg(short = 't', long)]
        theme: Option<String>,
    },

    /// Convert a hex or named color to HSL
    Hsl {
        /// Color such as #007bff, f00 or orange
        color: String,
    },

    /// Write a themed copy of pre-compiled Bulma CSS for every theme
    Build {
        /// Pre-compiled bulma.css to patch
        #[arg(long)]
        css: PathBuf,

        /// Static root to write css/<theme>_bulma.css files into
        #[arg(short = 'o', long)]
        out_dir: PathBuf,

        /// Settings file (defaults to ./bulma.toml when present)
        #[arg(short = 's', long)]
        settings: Option<PathBuf>,

        /// Suppress console output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "simple_bulma=info,simple_bulma_css=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Vars { settings, theme } => {
            commands::vars::execute(commands::vars::VarsArgs { settings, theme })
        }
        Commands::Hsl { color } => commands::hsl::execute(&color),
        Commands::Build {
            css,
            out_dir,
            settings,
            quiet,
        } => commands::build::execute(commands::build::BuildArgs {
            css,
            out_dir,
            settings,
            quiet,
        }),
    }
}
