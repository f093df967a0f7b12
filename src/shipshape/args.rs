use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shipshape")]
#[command(about = "Maintenance toolkit for the Wake & Wave cruise site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site root to operate on (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run patches over the HTML corpus
    #[command(alias = "p")]
    Patch {
        /// Patch names to run (all patches when omitted)
        #[arg(required = false)]
        names: Vec<String>,

        /// Compute and report without writing
        #[arg(long)]
        dry_run: bool,

        /// Write a .bak sibling before overwriting
        #[arg(long)]
        backup: bool,

        /// Exit non-zero if any file errored
        #[arg(long)]
        strict: bool,
    },

    /// List available patches
    Patches,

    /// Edit or check the venues database
    Venues {
        #[command(subcommand)]
        command: VenuesCommands,
    },

    /// Regenerate sitemap.xml
    Sitemap {
        /// Output path (defaults to <root>/sitemap.xml)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Newline-separated page list to use instead of the selector
        #[arg(long)]
        pages: Option<PathBuf>,
    },

    /// Convert raster images to webp via the configured tool
    Images {
        /// Explicit image paths (selector finds candidates when omitted)
        #[arg(required = false)]
        paths: Vec<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., base-url)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum VenuesCommands {
    /// Add a venue to the flat venue list
    AddVenue {
        slug: String,
        name: String,
        category: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// Add or replace a ship record
    AddShip {
        slug: String,
        name: String,

        #[arg(long)]
        class: Option<String>,

        #[arg(long)]
        tonnage: Option<u32>,

        /// Venue slug reference; repeat for each venue, in order
        #[arg(long = "venue")]
        venues: Vec<String>,
    },

    /// Verify referential integrity of the database
    Check,
}
