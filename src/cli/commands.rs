//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: show items with a given status
//! - add: add a pending item
//! - remove / toggle: act on one item by id
//! - clear: remove every item

use clap::{Parser, Subcommand};
use comprar::domain::ItemStatus;
use std::path::PathBuf;

/// Comprar - a shopping list kept in a local key-value store
#[derive(Parser, Debug)]
#[command(name = "comprar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List items (the default command)
    List {
        /// Status to show (pending, done)
        #[arg(short, long, default_value = "pending")]
        status: ItemStatus,
    },

    /// Add a pending item
    Add {
        /// What needs buying; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Remove an item
    Remove {
        /// Item ID to remove
        id: String,

        /// Status to list afterwards
        #[arg(short, long, default_value = "pending")]
        status: ItemStatus,
    },

    /// Flip an item between pending and done
    Toggle {
        /// Item ID to toggle
        id: String,

        /// Status to list afterwards
        #[arg(short, long, default_value = "pending")]
        status: ItemStatus,
    },

    /// Remove all items
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
