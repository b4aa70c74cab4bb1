//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pressloop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render every item of a feed through the loop
    Render {
        /// Feed file (.toml or .json)
        feed: PathBuf,

        /// Page to render for each item (clamped to the item's pages)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Show the full view instead of the teaser
        #[arg(long)]
        full: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Configuration file (defaults to ./pressloop.toml when present)
        #[arg(short, long, env = "PRESSLOOP_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Show how each item of a feed is segmented
    Pages {
        /// Feed file (.toml or .json)
        feed: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Configuration file (defaults to ./pressloop.toml when present)
        #[arg(short, long, env = "PRESSLOOP_CONFIG")]
        config: Option<PathBuf>,
    },
}
