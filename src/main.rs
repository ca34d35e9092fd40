use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_category_command, handle_expense_command, handle_export_command,
    handle_report_command, CategoryCommands, ExpenseCommands, ExportArgs, ReportCommands,
};
use expense_tracker::config::paths::{ExpensePaths, DATA_DIR_ENV};
use expense_tracker::config::settings::Settings;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracking backed by SQLite",
    long_about = "Record expenses with an amount, category, date and optional \
                  description, then filter, summarize and export them from the \
                  command line."
)]
struct Cli {
    /// Base directory for the database, settings and exports
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export expenses to another format
    Export(ExportArgs),

    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    // Initialize storage
    let storage = Storage::new(&paths)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &paths, args)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Already initialized at: {}", paths.base_dir().display());
            } else {
                println!("Initializing expense tracker at: {}", paths.base_dir().display());
                settings.save(&paths)?;
                println!("Initialization complete!");
            }
            println!();
            println!("Run 'expenses category add <name>' to create your first category.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            for (label, path) in paths.locations() {
                println!("{:<18}{}", format!("{}:", label), path.display());
            }
            println!("{:<18}{}", "Initialized:", if paths.is_initialized() { "yes" } else { "no" });
            println!();
            println!("Settings:");
            println!("  Date formats:    {}", settings.date_input_formats.join(", "));
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("Expense Tracker - personal expense tracking");
            println!();
            println!("Run 'expenses --help' for usage information.");
        }
    }

    storage.close()?;
    Ok(())
}
