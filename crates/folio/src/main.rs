//! Folio CLI - component catalog documentation generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Component catalog documentation generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to folio.toml config file
    #[arg(short, long, default_value = "folio.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a catalog in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Build static documentation site
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip minification
        #[arg(long)]
        no_minify: bool,
    },

    /// Print an icon as SVG
    Icon {
        /// Icon name, e.g. "paid"
        name: String,

        /// Size class: sm or lg
        #[arg(short, long, default_value = "lg")]
        size: String,

        /// CSS class for the svg element
        #[arg(long)]
        class: Option<String>,

        /// Accessible title
        #[arg(long)]
        title: Option<String>,

        /// Extra attribute forwarded to the svg element, as name=value
        #[arg(short, long = "attr", value_name = "NAME=VALUE")]
        attrs: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so `folio icon` output can be piped
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Build { output, no_minify } => {
            let minify = if no_minify { Some(false) } else { None };
            commands::build::run(&cli.config, output, minify)?;
        }
        Commands::Icon {
            name,
            size,
            class,
            title,
            attrs,
        } => {
            let svg = commands::icon::run(&cli.config, &name, &size, class, title, &attrs)?;
            println!("{}", svg);
        }
    }

    Ok(())
}
