use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for otlogger
/// CLI application to track technician overtime sessions with SQLite
#[derive(Parser)]
#[command(
    name = "otlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple overtime logging CLI: record technician work sessions, report totals, export to spreadsheet",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config or preference file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for problems")]
        check: bool,
    },

    /// Print the configured technician roster
    Roster,

    /// List one technician's records and their total hours
    List {
        /// Technician name; omitted, the last selected one is used
        technician: Option<String>,
    },

    /// Record a new overtime session, or edit an existing one
    Add {
        /// Technician name; omitted, the last selected one is used
        technician: Option<String>,

        /// Session start (YYYY-MM-DDTHH:MM, display timezone)
        #[arg(long = "start", help = "Session start (YYYY-MM-DDTHH:MM)")]
        start: String,

        /// Session end (YYYY-MM-DDTHH:MM, display timezone)
        #[arg(long = "end", help = "Session end (YYYY-MM-DDTHH:MM)")]
        end: String,

        /// Work description (max 100 characters)
        #[arg(long = "desc", help = "Work description (max 100 characters)")]
        desc: Option<String>,

        /// Edit an existing record instead of creating a new one.
        /// All fields are overwritten; the technician never changes.
        #[arg(long = "edit", help = "Record id to edit instead of creating")]
        edit: Option<i64>,
    },

    /// Delete one record by id
    Del {
        /// Record id to delete
        id: i64,

        /// Technician the record belongs to; omitted, the last selected
        technician: Option<String>,
    },

    /// Delete ALL records (requires the configured confirmation code)
    Reset {
        #[arg(long = "code", help = "Confirmation code from the configuration file")]
        code: String,
    },

    /// Export all records to a spreadsheet file
    Export {
        #[arg(long = "format", value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long = "file", help = "Output file path")]
        file: String,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },
}
