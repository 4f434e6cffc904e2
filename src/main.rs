use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_money::cli::{
    handle_data_command, handle_history, handle_login, handle_logout, handle_onboard,
    handle_register, handle_settings_command, handle_stats, handle_status,
    handle_transaction_command, handle_summary, handle_whoami, DataCommands, SettingsCommands,
    TransactionCommands,
};
use pocket_money::config::PocketPaths;
use pocket_money::models::TransactionKind;
use pocket_money::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Track pocket money: income, expenses and a monthly budget",
    long_about = "Pocket Money keeps a local ledger of income and expense \
                  transactions, shows where the money goes by category, and \
                  warns when spending approaches the monthly budget."
)]
struct Cli {
    /// Data directory (overrides POCKET_MONEY_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a local account
    Register {
        username: String,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Log in to an existing account
    Login {
        username: String,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// End the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Show where the app would start and what to do next
    Status,

    /// Set the initial budget and currency
    Onboard {
        /// Monthly budget (defaults to 1000)
        #[arg(short, long)]
        budget: Option<String>,
        /// Currency symbol (defaults to $)
        #[arg(short, long)]
        currency: Option<String>,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Txn(TransactionCommands),

    /// Transactions grouped by day
    History,

    /// Balance, totals and budget usage
    Summary,

    /// Spending or income by category
    Stats {
        /// expense or income (both when omitted)
        #[arg(short, long)]
        kind: Option<TransactionKind>,
    },

    /// Settings commands
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Export, import and clear data
    #[command(subcommand)]
    Data(DataCommands),

    /// Show the data file locations
    Config,
}

fn main() -> Result<()> {
    pocket_money::init_tracing();

    let cli = Cli::parse();

    let paths = PocketPaths::resolve(cli.data_dir.as_deref())?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Register { username, password }) => {
            handle_register(&storage, &username, password)?;
        }
        Some(Commands::Login { username, password }) => {
            handle_login(&storage, &username, password)?;
        }
        Some(Commands::Logout) => handle_logout(&storage)?,
        Some(Commands::Whoami) => handle_whoami(&storage)?,
        Some(Commands::Status) | None => handle_status(&storage)?,
        Some(Commands::Onboard { budget, currency }) => {
            handle_onboard(&storage, budget, currency)?;
        }
        Some(Commands::Txn(cmd)) => handle_transaction_command(&storage, cmd)?,
        Some(Commands::History) => handle_history(&storage)?,
        Some(Commands::Summary) => handle_summary(&storage)?,
        Some(Commands::Stats { kind }) => handle_stats(&storage, kind)?,
        Some(Commands::Settings(cmd)) => handle_settings_command(&storage, cmd)?,
        Some(Commands::Data(cmd)) => handle_data_command(&storage, cmd)?,
        Some(Commands::Config) => {
            println!("Pocket Money Configuration");
            println!("==========================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Preferences file: {}", paths.prefs_file().display());
            println!("Users file:       {}", paths.users_file().display());
            println!("Export directory: {}", paths.export_dir().display());
        }
    }

    Ok(())
}
