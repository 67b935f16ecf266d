use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Track your books and notes from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book or note
    #[command(alias = "a")]
    Add {
        /// Title of the record
        title: String,

        /// Record type: book or note
        #[arg(short = 't', long = "type", default_value = "book")]
        kind: String,

        /// Author
        #[arg(long)]
        author: Option<String>,

        /// Page count (up to two decimals)
        #[arg(long)]
        pages: Option<String>,

        /// Tag (letters, spaces or hyphens)
        #[arg(long)]
        tag: Option<String>,

        /// ISBN
        #[arg(long)]
        isbn: Option<String>,

        /// Note body
        #[arg(long)]
        notes: Option<String>,
    },

    /// Replace the fields of an existing record
    #[command(alias = "e")]
    Edit {
        /// Record to edit (list position or id)
        selector: String,

        /// New title
        title: String,

        /// Record type: book or note
        #[arg(short = 't', long = "type", default_value = "book")]
        kind: String,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        pages: Option<String>,

        #[arg(long)]
        tag: Option<String>,

        #[arg(long)]
        isbn: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List records
    #[command(alias = "ls")]
    List {
        /// Only records of this type: book or note
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Only records with this tag (exact match)
        #[arg(long)]
        tag: Option<String>,

        /// Narrow further with a search query
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search records (regex, falls back to plain text)
    Search {
        /// Query matched against title, author, tag, isbn, notes, pages and type
        query: String,
    },

    /// Delete one or more records
    #[command(alias = "rm")]
    Delete {
        /// Records to delete (list positions or ids)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Delete every record
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List tags with record counts
    Tags,

    /// Show dashboard statistics
    Stats,

    /// Export all records to a JSON file
    Export {
        /// Output path (defaults to shelf-export.json)
        path: Option<PathBuf>,
    },

    /// Import records from a JSON export or bare array
    Import {
        /// File to import
        path: PathBuf,
    },

    /// Get or set configuration (theme, page-cap)
    Config {
        /// Configuration key (theme or page-cap)
        key: Option<String>,

        /// Value to set (if omitted, prints the current value)
        value: Option<String>,
    },
}
