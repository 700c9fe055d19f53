use clap::{Parser, Subcommand};
use colored::Colorize;
use depwiz::cli;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "depwiz")]
#[command(version)]
#[command(about = "Pick common packages and wire them into package.json")]
#[command(
    long_about = "depwiz offers a curated catalog of common packages, confirms whether each \
belongs in dependencies or devDependencies, resolves the latest published versions, \
writes package.json, and runs install and setup steps."
)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "\
Getting started:
  depwiz                          Pick packages interactively
  depwiz add express cors         Add packages without the picker
  depwiz list                     Show the catalog
  depwiz notes typescript         Show setup notes for a package")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    add: cli::add::AddArgs,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick packages, update package.json, install, and run setup steps
    #[command(display_order = 1)]
    Add(cli::add::AddArgs),
    /// List the package catalog
    #[command(display_order = 2)]
    List(cli::list::ListArgs),
    /// Show setup notes for a catalog package
    #[command(display_order = 3)]
    Notes(cli::notes::NotesArgs),
}

fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("depwiz=debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match &cli.command {
        Some(Commands::Add(args)) => cli::add::execute(args),
        Some(Commands::List(args)) => cli::list::execute(args),
        Some(Commands::Notes(args)) => cli::notes::execute(args),
        None => cli::add::execute(&cli.add),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
