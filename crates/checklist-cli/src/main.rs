mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "checklist",
    about = "Blueprint material checklists: import material lists, tick off items, track totals",
    version,
    propagate_version = true
)]
struct Cli {
    /// Checklist root (default: auto-detect from .checklist/, else current directory)
    #[arg(long, global = true, env = "CHECKLIST_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a material-list export as a new checklist (replaces one with the same title)
    Add {
        /// Checklist title; becomes the file name
        title: String,
        /// Material-list text export
        file: PathBuf,
    },

    /// Show a checklist, largest quantities first
    List {
        title: String,
        /// Which items to show: finished, unfinished, or all
        #[arg(long, default_value = "all")]
        check: String,
        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: usize,
        /// Items per page (default from config)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Mark an item done or undone
    Check {
        title: String,
        /// Exact item name (case-sensitive)
        item: String,
        /// done or undone
        status: String,
    },

    /// Delete a checklist permanently
    Delete {
        title: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show size, timestamps, and progress for a checklist
    Info { title: String },

    /// List checklist titles, optionally filtered by substring
    Titles { filter: Option<String> },

    /// List item names in a checklist, optionally filtered by substring
    Items {
        title: String,
        filter: Option<String>,
    },

    /// Inspect or initialize configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved checklist root");

    let result = match cli.command {
        Commands::Add { title, file } => cmd::add::run(&root, &title, &file, cli.json),
        Commands::List {
            title,
            check,
            page,
            page_size,
        } => cmd::list::run(&root, &title, &check, page, page_size, cli.json),
        Commands::Check {
            title,
            item,
            status,
        } => cmd::check::run(&root, &title, &item, &status, cli.json),
        Commands::Delete { title, yes } => cmd::delete::run(&root, &title, yes, cli.json),
        Commands::Info { title } => cmd::info::run(&root, &title, cli.json),
        Commands::Titles { filter } => cmd::titles::run(&root, filter.as_deref(), cli.json),
        Commands::Items { title, filter } => {
            cmd::items::run(&root, &title, filter.as_deref(), cli.json)
        }
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
