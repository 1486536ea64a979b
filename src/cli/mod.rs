// src/cli/mod.rs
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;

pub mod args;
pub mod bridge_commands;
pub mod display;
pub mod error;

pub fn execute_command(cli: Cli) -> CliResult<()> {
    if cli.generate_config {
        println!("{}", crate::config::generate_default_config());
        return Ok(());
    }
    match cli.command {
        Some(Commands::List { json }) => bridge_commands::list(json),
        Some(Commands::Add {
            url,
            title,
            description,
            tags,
        }) => bridge_commands::add(url, title, description, tags),
        Some(Commands::Update {
            id,
            url,
            title,
            description,
            tags,
        }) => bridge_commands::update(id, url, title, description, tags),
        Some(Commands::Delete { id }) => bridge_commands::delete(id),
        Some(Commands::Check) => bridge_commands::check(),
        None => Ok(()),
    }
}
