use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rInventory
#[derive(Parser, Debug)]
#[command(
    name = "rinventory",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track computing assets and dated notes in SQLite, edit them from the browser",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db", env = "RINVENTORY_DB")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Start the web interface
    Serve {
        /// Address to listen on (overrides the config file)
        #[arg(long = "listen", env = "RINVENTORY_LISTEN", value_name = "ADDR")]
        listen: Option<String>,
    },

    /// Load the initial dataset from a spreadsheet saved as CSV
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Replace existing assets and notes
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print assets (or notes) as a text table
    List {
        #[arg(long = "notes", help = "List notes instead of assets")]
        notes: bool,
    },

    /// Export assets (or notes) to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "notes", help = "Export notes instead of assets")]
        notes: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Database maintenance (integrity check, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },
}
