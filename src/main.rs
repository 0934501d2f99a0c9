mod cli;
mod clock;
mod config;
mod display;
mod error;
mod models;
mod renderer;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::run::RunOptions;

#[derive(Parser)]
#[command(name = "glock")]
#[command(version)]
#[command(about = "A digital clock in your terminal", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "Press q, Esc or Ctrl-C to quit.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Display seconds
    #[arg(short, long)]
    second: bool,

    /// Display time in 12-hour format with AM/PM
    #[arg(short, long)]
    meridiem: bool,

    /// Clock color: black, white, blue, cyan, green, magenta, red, yellow, gray
    #[arg(short, long, value_name = "COLOR")]
    color: Option<String>,

    /// Hide the date line
    #[arg(long)]
    no_date: bool,

    /// Path to config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize glock.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        None => cli::run::run(RunOptions {
            config: cli.config,
            seconds: cli.second,
            meridiem: cli.meridiem,
            no_date: cli.no_date,
            color: cli.color,
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
