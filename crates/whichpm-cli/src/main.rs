#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::struct_excessive_bools)]

mod commands;
mod logging;

use clap::Parser;
use miette::Result;
use std::path::PathBuf;
use whichpm_core::PackageManagerKind;

#[derive(Parser, Debug)]
#[command(name = "whichpm")]
#[command(author, version, about = "Detect which package manager governs a JavaScript project", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Override the working directory
    #[arg(long, global = true, value_name = "PATH")]
    cwd: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// Resolve the single package manager for the directory (the default)
    Detect {
        /// Ordered preference list consulted when structure is ambiguous
        #[arg(long, value_delimiter = ',', value_name = "PM")]
        prefer: Vec<PackageManagerKind>,

        /// Only pick a preferred manager whose executable responds to
        /// `--version`
        #[arg(long)]
        check_executable: bool,

        /// Ignore the manifest's packageManager declaration
        #[arg(long)]
        ignore_manager_field: bool,
    },

    /// Show the raw structural signals instead of a single answer
    Structure,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = cli
        .cwd
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    logging::init(cli.verbose, cli.json);

    match cli.command {
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Structure) => commands::structure::run(&cwd, cli.json),
        Some(Commands::Detect {
            prefer,
            check_executable,
            ignore_manager_field,
        }) => {
            let options = whichpm_core::ChooseOptions {
                preferred: prefer,
                check_executable,
                ignore_manager_field,
            };
            commands::detect::run(&cwd, &options, cli.json)
        }
        // Bare `whichpm` answers the main question with defaults.
        None => commands::detect::run(&cwd, &whichpm_core::ChooseOptions::default(), cli.json),
    }
}
