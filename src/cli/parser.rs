use crate::core::export::ExportFormat;
use crate::core::gatekeeper::DebouncePolicy;
use clap::{Parser, Subcommand};

/// Command-line interface definition for scanqr
/// Debounced barcode/QR scan logger backed by SQLite
#[derive(Parser)]
#[command(
    name = "scanqr",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record barcode/QR scans into SQLite, with debouncing and optional HTTP sync",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending schema migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "drop", help = "Drop the codes table (recreated on next open)")]
        drop: bool,

        #[arg(short = 'y', long = "yes", help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Read scan events (one per line) from stdin or a file and store them
    Scan {
        #[arg(long, short, value_name = "FILE", help = "Read events from FILE instead of stdin")]
        input: Option<String>,

        #[arg(long, value_enum, help = "Debounce policy (overrides config)")]
        policy: Option<DebouncePolicy>,

        #[arg(long = "cooldown-ms", help = "Same-value cooldown window in ms")]
        cooldown_ms: Option<u64>,

        #[arg(long = "timeout-ms", help = "Lock release delay after each accepted scan, in ms")]
        timeout_ms: Option<u64>,

        #[arg(long, help = "Notify on every stored code, not only duplicates")]
        notify: bool,

        #[arg(long, short, help = "Also print suppressed events")]
        verbose: bool,

        #[arg(long = "at", value_name = "LAT,LON", help = "Current position, shown in the header")]
        at: Option<String>,
    },

    /// Store a code manually, bypassing the scan gate
    Add {
        /// Decoded payload
        #[arg(default_value = "")]
        data: String,

        /// Symbology (qr, code128, datamatrix, aztec, ...)
        #[arg(long = "type", short = 't', default_value = "qr")]
        kind: String,
    },

    /// List stored codes, most recent first
    List {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Tell whether a payload has already been stored
    Exists { data: String },

    /// Delete a stored code by id
    Del {
        id: String,

        #[arg(short = 'y', long = "yes", help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete all stored codes
    Clear {
        #[arg(short = 'y', long = "yes", help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show totals per symbology and the last scan time
    Stats {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Push every stored code to the remote endpoint
    Sync {
        #[arg(long, help = "Simulate the sync without network calls")]
        local: bool,
    },

    /// Talk to the remote /codigos resource directly
    Remote {
        #[command(subcommand)]
        action: RemoteAction,
    },

    /// Send a message through the configured notifier
    Notify {
        message: String,

        #[arg(long, default_value = "scanqr")]
        title: String,
    },

    /// Export stored codes
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum RemoteAction {
    /// GET /codigos
    List,
    /// GET /codigos/:id
    Get { id: String },
    /// DELETE /codigos/:id
    Delete { id: String },
}
