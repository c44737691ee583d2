use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Filterable, paginated browsing for static book catalogs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List one page of books matching the given filters
    List {
        /// Path to the catalog dataset (JSON)
        data: PathBuf,

        /// Only books by this author id ("any" matches all)
        #[arg(short, long)]
        author: Option<String>,

        /// Only books carrying this genre id ("any" matches all)
        #[arg(short, long)]
        genre: Option<String>,

        /// Only books whose title contains this substring
        #[arg(short, long)]
        title: Option<String>,

        /// Zero-based page number to show
        #[arg(short, long, default_value_t = 0)]
        page: usize,

        /// Show every match, ignoring pagination
        #[arg(long)]
        all: bool,
    },

    /// Show the detail view for a single book
    Show {
        /// Path to the catalog dataset (JSON)
        data: PathBuf,

        /// Book id from the preview listing
        id: String,
    },

    /// List author ids and display names
    Authors {
        /// Path to the catalog dataset (JSON)
        data: PathBuf,
    },

    /// List genre ids and display names
    Genres {
        /// Path to the catalog dataset (JSON)
        data: PathBuf,
    },

    /// Browse the catalog interactively (filter, show more, open details)
    Browse {
        /// Path to the catalog dataset (JSON)
        data: PathBuf,
    },
}
