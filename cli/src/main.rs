mod cli;
mod commands;
mod config;
mod consts;
mod errors;
mod output;

use anyhow::Context as _;
use clap::Parser;
use cli::args::Args;
use errors::{CliError, init_error};
use log::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), CliError> {
    let args = Args::parse();
    let color_logs = args.color.use_colors_for(&std::io::stderr());
    let color_output = args.color.use_colors_for(&std::io::stdout());
    let level = args.verbose.log_level_filter().as_str().to_ascii_lowercase();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}={level},revision_diff={level}", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(color_logs)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialise tracing")
        .map_err(init_error)?;

    colored::control::set_override(color_output);

    debug!("Starting revdiff version {}", env!("CARGO_PKG_VERSION"));

    commands::run(args)
}
