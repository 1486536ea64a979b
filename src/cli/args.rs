// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Relay bookmark operations to the native companion host
pub struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[arg(long = "no-color", help = "disable colored output")]
    pub no_color: bool,

    #[arg(long = "generate-config", help = "print a default config file")]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all bookmarks held by the host
    List {
        #[arg(long = "json", help = "print the raw host response as JSON")]
        json: bool,
    },

    /// Save a new bookmark
    Add {
        /// URL to bookmark
        url: String,

        #[arg(short = 't', long = "title", help = "bookmark title")]
        title: Option<String>,

        #[arg(short = 'd', long = "description", help = "bookmark description")]
        description: Option<String>,

        #[arg(short = 'T', long = "tags", help = "comma separated tag list")]
        tags: Option<String>,
    },

    /// Update a saved bookmark in place
    Update {
        /// Host-assigned bookmark id
        id: i32,

        /// Replacement URL
        url: String,

        #[arg(short = 't', long = "title", help = "bookmark title")]
        title: Option<String>,

        #[arg(short = 'd', long = "description", help = "bookmark description")]
        description: Option<String>,

        #[arg(short = 'T', long = "tags", help = "comma separated tag list")]
        tags: Option<String>,
    },

    /// Delete a bookmark by id
    Delete {
        /// Host-assigned bookmark id
        id: i32,
    },

    /// Check that the native host is present and version-compatible
    Check,
}
