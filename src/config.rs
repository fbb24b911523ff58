//! Run configuration.
//!
//! Each value is resolved in priority order:
//! 1. CLI flag (`-hygraphEndpoint`, `-filePath`)
//! 2. Environment variable (`HYGRAPH_ENDPOINT`, `BOARDGAME_CSV`)
//! 3. Interactive prompt on stdin
use crate::cli::SyncArgs;
use crate::prompt::Prompter;
use anyhow::{bail, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const ENDPOINT_ENV: &str = "HYGRAPH_ENDPOINT";
pub const INPUT_ENV: &str = "BOARDGAME_CSV";

const ENDPOINT_QUESTION: &str = "You did not provide a URL to connect to. What is the Public Content URL for your Hygraph project?";
const INPUT_QUESTION: &str =
    "You did not provide a path for your input CSV. Please enter it now:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub endpoint: String,
    pub input_path: PathBuf,
    /// Skip the confirmation asked when the CMS holds no games.
    pub assume_yes: bool,
}

/// Resolve the configuration, prompting only for values still missing.
pub fn resolve<E, R, W>(args: &SyncArgs, env: E, prompter: &mut Prompter<R, W>) -> Result<SyncConfig>
where
    E: Fn(&str) -> Option<String>,
    R: BufRead,
    W: Write,
{
    let endpoint = match pick(args.hygraph_endpoint.clone().or_else(|| env(ENDPOINT_ENV))) {
        Some(endpoint) => endpoint,
        None => prompter.ask(ENDPOINT_QUESTION)?.trim().to_string(),
    };
    if endpoint.is_empty() {
        bail!("no Hygraph endpoint given");
    }

    let input_path = match args.file_path.clone() {
        Some(path) => path,
        None => PathBuf::from(match pick(env(INPUT_ENV)) {
            Some(path) => path,
            None => prompter.ask(INPUT_QUESTION)?.trim().to_string(),
        }),
    };
    if input_path.as_os_str().is_empty() {
        bail!("no input file path given");
    }

    Ok(SyncConfig {
        endpoint,
        input_path,
        assume_yes: args.yes,
    })
}

fn pick(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
