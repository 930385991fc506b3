//! CLI front end for the add-on packager.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "addon",
    about = "Build .mcaddon packs from a project file",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a project file to a .mcaddon archive
    Export {
        /// Project file (TOML)
        project: PathBuf,

        /// Directory to write the archive into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Derive manifest UUIDs from the pack name so re-exports are byte-identical
        #[arg(long)]
        stable_ids: bool,
    },

    /// Print the behavior manifest a project would produce
    Preview {
        /// Project file (TOML)
        project: PathBuf,
    },

    /// List the built-in starter templates
    Templates,

    /// Write a new project file from a starter template
    Init {
        /// Template key (see `addon templates`)
        template: String,

        /// Project file to create
        #[arg(short, long, default_value = "addon.toml")]
        output: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("addon_packager=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export {
            project,
            out_dir,
            stable_ids,
        } => commands::export::run(&project, &out_dir, stable_ids),
        Commands::Preview { project } => commands::preview::run(&project),
        Commands::Templates => commands::templates::run(),
        Commands::Init { template, output } => commands::init::run(&template, &output),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
