use clap::{Parser, Subcommand};
mod commands;
mod utils;

use commands::{EprintArgs, EprintCommand, RunArgs, RunCommand};
use utils::{eprint_values, CommandError, PrintOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a command and print its captured stdout
    Run(RunArgs),
    /// Print values to stderr
    Eprint(EprintArgs),
}

fn main() {
    let cli = Cli::parse();
    utils::logging::init(cli.verbose);
    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let result = match cli.command {
        Commands::Run(args) => RunCommand::new(args).execute(),
        Commands::Eprint(args) => EprintCommand::new(args).execute(),
    };

    if let Err(e) = result {
        // A failed child forwards its own stderr and exit code.
        if let Some(failure) = e.downcast_ref::<CommandError>() {
            tracing::debug!("Command failed with status {:?}", failure.status());
            let options = PrintOptions {
                end: String::new(),
                flush: true,
                ..PrintOptions::default()
            };
            eprint_values(&[failure.stderr()], &options);
            std::process::exit(failure.status().filter(|code| *code != 0).unwrap_or(1));
        }

        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
