use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ibanz")]
#[command(about = "Keep your bank account IBANs at hand", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new record
    #[command(alias = "n")]
    Add {
        /// Account owner name
        name: String,

        /// IBAN, in any spacing or case
        iban: String,

        /// Optional note
        #[arg(default_value = "")]
        desc: String,
    },

    /// List records
    #[command(alias = "ls")]
    List {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one or more records in full
    #[command(alias = "v")]
    Show {
        /// Indexes or ids of the records (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Edit a record; fields not given are kept
    #[command(alias = "e")]
    Edit {
        /// Index or id of the record
        selector: String,

        /// New account owner name
        #[arg(long)]
        name: Option<String>,

        /// New IBAN
        #[arg(long)]
        iban: Option<String>,

        /// New note (pass "" to clear it)
        #[arg(long)]
        desc: Option<String>,
    },

    /// Delete one or more records
    #[command(alias = "rm")]
    Delete {
        /// Indexes or ids of the records (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Copy a record's IBAN (or name) to the clipboard
    #[command(alias = "cp")]
    Copy {
        /// Index or id of the record
        selector: String,

        /// Copy the owner name instead of the IBAN
        #[arg(long, conflicts_with = "compact")]
        name: bool,

        /// Copy the IBAN without spaces
        #[arg(long)]
        compact: bool,
    },

    /// Delete ALL stored data
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the canonical form of an IBAN
    #[command(alias = "fmt")]
    Format {
        /// IBAN text; several arguments are joined
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (max-iban-length, confirm-delete)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Show version and build information
    About,
}
