//! Command-line interface argument parsing
//!
//! Defines all CLI commands and their arguments using Clap.

use clap::{Parser, Subcommand};

/// UserHub CLI - manage users in a UserHub directory server
#[derive(Parser, Debug)]
#[command(name = "userhub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for managing users in a UserHub directory server")]
#[command(long_about = concat!(
    "UserHub (v", env!("CARGO_PKG_VERSION"), ")\n",
    "A CLI tool for managing users in a UserHub directory server.\n\n",
    "Use this tool to list the directory (list), add users (add),\n",
    "edit existing users (update), and delete users (remove)."
))]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// UserHub server URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all users in the directory
    ///
    /// Example:
    ///   userhub list
    #[command(visible_alias = "ls")]
    #[command(display_order = 1)]
    List,

    /// Add a new user
    ///
    /// The server assigns the id.
    ///
    /// Example:
    ///   userhub add --name "Ada Lovelace" --email ada@example.com --age 36
    #[command(visible_alias = "create")]
    #[command(display_order = 2)]
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Age in years
        #[arg(long)]
        age: u32,
    },

    /// Update an existing user
    ///
    /// Sends the full record; all fields are required.
    ///
    /// Example:
    ///   userhub update 42 --name "Ada King" --email ada@example.com --age 37
    #[command(visible_alias = "edit")]
    #[command(display_order = 3)]
    Update {
        /// Id of the user to update
        id: i64,

        /// Display name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Age in years
        #[arg(long)]
        age: u32,
    },

    /// Remove a user from the directory
    ///
    /// Examples:
    ///   userhub remove 42
    ///   userhub remove 42 --yes    # Skip the confirmation prompt
    #[command(visible_alias = "delete")]
    #[command(visible_alias = "rm")]
    #[command(display_order = 4)]
    Remove {
        /// Id of the user to remove
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Check CLI version
    ///
    /// Example:
    ///   userhub version
    #[command(display_order = 5)]
    Version,
}

impl Cli {
    /// Parse command-line arguments
    ///
    /// # Returns
    ///
    /// Parsed CLI arguments
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }
}
