use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mhc", about = "Mental health companion — resources and chat", version)]
pub struct Cli {
    /// JSON or YAML file replacing the built-in catalog.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version.
    Version,

    /// List every resource in the catalog.
    List,

    /// List resources in a category (case-insensitive).
    Category {
        name: String,
    },

    /// Show a single resource.
    Get {
        id: String,
    },

    /// Render the resource card grid.
    Cards,

    /// Chat with the simulated bot. Reads one message per line from stdin.
    Chat {
        /// Delay before the bot replies, in milliseconds.
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
    },
}
