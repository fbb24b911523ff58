//! CLI argument parsing.
//!
//! The flags keep their historical Go-style spelling (`-hygraphEndpoint`,
//! `-filePath`); `normalize_flag_style` rewrites those to the double-dash form
//! clap expects.
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Long flags that may be written with a single leading dash.
const LONG_FLAGS: [&str; 5] = ["hygraphEndpoint", "filePath", "yes", "help", "version"];

#[derive(Parser, Debug, Default)]
#[command(
    name = "boardgame-sync",
    version,
    about = "Create or update Hygraph board-game entries from a CSV export",
    after_help = "Missing values are read from HYGRAPH_ENDPOINT / BOARDGAME_CSV, then prompted for.\n\nExamples:\n  boardgame-sync -hygraphEndpoint https://api-eu.hygraph.com/v2/<id>/master -filePath games.csv\n  boardgame-sync --filePath games.csv --yes"
)]
pub struct SyncArgs {
    /// Public content API URL of the Hygraph project
    #[arg(long = "hygraphEndpoint", value_name = "URL")]
    pub hygraph_endpoint: Option<String>,

    /// Path to the CSV export to sync
    #[arg(long = "filePath", value_name = "PATH")]
    pub file_path: Option<PathBuf>,

    /// Continue without asking when the CMS holds no games yet
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Rewrite `-flag` / `-flag=value` to `--flag` / `--flag=value` for known long flags.
pub fn normalize_flag_style<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for (idx, arg) in args.into_iter().enumerate() {
        if idx == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if arg.to_str() == Some("--") {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let rewritten = arg.to_str().and_then(|text| {
            let name = text.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let flag = name.split_once('=').map_or(name, |(flag, _)| flag);
            LONG_FLAGS
                .contains(&flag)
                .then(|| OsString::from(format!("-{text}")))
        });
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> SyncArgs {
        let argv = args.iter().map(OsString::from);
        SyncArgs::try_parse_from(normalize_flag_style(argv)).expect("parse args")
    }

    #[test]
    fn accepts_go_style_single_dash_flags() {
        let args = parse(&[
            "boardgame-sync",
            "-hygraphEndpoint",
            "https://api.example/graphql",
            "-filePath=games.csv",
        ]);
        assert_eq!(
            args.hygraph_endpoint.as_deref(),
            Some("https://api.example/graphql")
        );
        assert_eq!(args.file_path, Some(PathBuf::from("games.csv")));
        assert!(!args.yes);
    }

    #[test]
    fn accepts_double_dash_and_short_flags() {
        let args = parse(&["boardgame-sync", "--filePath", "games.csv", "-y"]);
        assert_eq!(args.hygraph_endpoint, None);
        assert_eq!(args.file_path, Some(PathBuf::from("games.csv")));
        assert!(args.yes);
    }

    #[test]
    fn values_that_look_like_flags_are_left_alone() {
        let argv = ["boardgame-sync", "-filePath", "-notes.csv", "--", "-yes"]
            .iter()
            .map(OsString::from);
        let normalized = normalize_flag_style(argv);
        assert_eq!(
            normalized,
            ["boardgame-sync", "--filePath", "-notes.csv", "--", "-yes"]
                .iter()
                .map(OsString::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn flags_are_optional() {
        let args = parse(&["boardgame-sync"]);
        assert!(args.hygraph_endpoint.is_none());
        assert!(args.file_path.is_none());
    }
}
