// src/main.rs
use clap::Parser;
use crossterm::style::Stylize;
use markrelay::app_state::AppState;
use markrelay::cli::args::Cli;
use markrelay::cli::display::ErrorBanner;
use markrelay::cli::error::CliError;
use markrelay::exitcode;
use termcolor::{ColorChoice, StandardStream};
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    filter::{filter_fn, LevelFilter},
    fmt::{self, format::FmtSpan},
    prelude::*,
};

#[instrument]
fn main() {
    // use stderr as human output in order to make stdout output passable to downstream processes
    let cli = Cli::parse();

    setup_logging(cli.debug, cli.no_color);

    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let mut stderr = StandardStream::stderr(color_choice);

    // Load configuration with CLI overrides into the global state
    let config_path_ref = cli.config.as_deref();
    if let Err(e) = AppState::update_global(AppState::new_with_config_file(config_path_ref)) {
        eprintln!("{}", format!("Failed to initialize state: {}", e).red());
        std::process::exit(exitcode::USAGE);
    }

    if let Err(e) = markrelay::cli::execute_command(cli) {
        // Failures surface through the error banner; unsuccessful host
        // answers map to UNAVAILABLE so scripts can tell them apart from
        // usage mistakes.
        let banner = ErrorBanner::new(e.to_string());
        let _ = banner.write(&mut stderr);

        let code = match e {
            CliError::CommandFailed(_) => exitcode::UNAVAILABLE,
            _ => exitcode::USAGE,
        };
        std::process::exit(code);
    }
}

fn setup_logging(verbosity: u8, no_color: bool) {
    debug!("INIT: Attempting logger init from main.rs");

    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a noisy module filter
    let noisy_modules = ["tokio", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr) // Set writer first
        .with_target(true)
        .with_ansi(!no_color) // Control ANSI colors based on flag
        .with_thread_names(false)
        .with_span_events(FmtSpan::ENTER)
        .with_span_events(FmtSpan::CLOSE);

    // Apply filters to the layer
    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    // Log initial debug level
    match filter {
        LevelFilter::INFO => info!("Debug mode: info"),
        LevelFilter::DEBUG => debug!("Debug mode: debug"),
        LevelFilter::TRACE => debug!("Debug mode: trace"),
        _ => {}
    }
}
