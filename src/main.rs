use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod graphql;
mod loader;
mod mutation;
mod prompt;
mod records;
mod remote;
mod sync;
#[cfg(test)]
mod test_support;

use cli::{normalize_flag_style, SyncArgs};
use graphql::HttpTransport;
use prompt::Prompter;

fn main() -> Result<()> {
    init_tracing();
    let args = SyncArgs::parse_from(normalize_flag_style(std::env::args_os()));

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let config = config::resolve(&args, |key| std::env::var(key).ok(), &mut prompter)?;

    let records = loader::load_input_records(&config.input_path)?;
    let transport = HttpTransport::new(config.endpoint.as_str());
    sync::run(&transport, records, config.assume_yes, &mut prompter)?;
    Ok(())
}

// Logs go to stderr so prompts on stdout stay readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
