//! genie - filesystem tagger
//!
//! Attach free-form tags to filesystem paths and retrieve paths by tag,
//! including boolean search queries:
//!
//! ```text
//! genie tag ~/notes/standup.md work
//! genie search work and ( urgent or today )
//! genie print ~/notes/standup.md
//! genie rm ~/notes/standup.md work
//! ```

mod output;
mod paths;

use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use genie_core::query;
use genie_core::store::TagStore;
use genie_sqlite::SqliteStore;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for usage errors (missing operands, unknown commands).
const EXIT_USAGE: u8 = 1;
/// Dedicated exit code for a query that contains no parseable expression.
const EXIT_UNPARSABLE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "genie")]
#[command(about = "filesystem tagger")]
#[command(version)]
struct Cli {
    /// Emit results as a JSON item list instead of plain lines
    #[arg(short = 'j', long = "json", global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tag the given PATH with the given TAG
    #[command(alias = "t")]
    Tag {
        /// List every distinct tag in the store instead of tagging
        #[arg(short = 'l', long = "list")]
        list: bool,

        /// Path to tag; glob patterns (`*`, `?`, `[`) tag every match
        path: Option<String>,

        /// Tag to apply
        tag: Option<String>,
    },

    /// Remove from the given PATH the given TAG
    #[command(alias = "remove")]
    Rm {
        /// Path to untag
        path: Option<String>,

        /// Tag to remove
        tag: Option<String>,
    },

    /// Search for and return all PATHs matching the tag query
    #[command(alias = "s")]
    Search {
        /// Query words, space-joined into one expression
        /// (`work and ( urgent or today )`)
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Show all tags applied to the given PATH
    #[command(aliases = ["p", "show"])]
    Print {
        /// Path whose tags to list
        path: Option<String>,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return ExitCode::from(handle_parse_error(&err)),
    };
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Command::Tag { list: true, .. } => {
            let store = open_store()?;
            output::emit(&store.all_tags()?, cli.json);
            Ok(ExitCode::SUCCESS)
        }
        Command::Tag {
            list: false,
            path: Some(path),
            tag: Some(tag),
        } => {
            let mut store = open_store()?;
            for canonical in expand(&path) {
                debug!(path = %canonical, tag = %tag, "tagging");
                store.tag(&canonical, &tag)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Tag { .. } => Ok(usage_error()),

        Command::Rm {
            path: Some(path),
            tag: Some(tag),
        } => {
            let mut store = open_store()?;
            let removed = store.untag(&paths::canonicalize(&path), &tag)?;
            debug!(path = %path, tag = %tag, removed, "untagged");
            Ok(ExitCode::SUCCESS)
        }
        Command::Rm { .. } => Ok(usage_error()),

        Command::Search { query } if !query.is_empty() => {
            let input = query.join(" ");
            let expr = match query::Parser::parse_str(&input) {
                Ok(expr) => expr,
                Err(err) => {
                    eprintln!("Error: {err}");
                    return Ok(ExitCode::from(EXIT_UNPARSABLE));
                }
            };
            debug!(expr = %expr, "parsed search expression");

            let store = open_store()?;
            let mut results: Vec<String> =
                query::evaluate(&expr, &store)?.into_iter().collect();
            results.sort();
            output::emit(&results, cli.json);
            Ok(ExitCode::SUCCESS)
        }
        Command::Search { .. } => Ok(usage_error()),

        Command::Print { path: Some(path) } => {
            let store = open_store()?;
            output::emit(&store.tags_for_path(&paths::canonicalize(&path))?, cli.json);
            Ok(ExitCode::SUCCESS)
        }
        Command::Print { .. } => Ok(usage_error()),
    }
}

fn open_store() -> Result<SqliteStore, genie_sqlite::SqliteError> {
    let db_path = SqliteStore::default_path()?;
    debug!(db = %db_path.display(), "opening tag database");
    SqliteStore::open(db_path)
}

/// Expand a raw path argument into canonical storage paths. A glob
/// pattern tags every match; anything else (including a pattern that
/// matches nothing on a filesystem error) is stored as a single path.
fn expand(raw: &str) -> Vec<String> {
    if paths::is_glob_pattern(raw) {
        if let Ok(matches) = glob::glob(raw) {
            let expanded: Vec<String> = matches
                .flatten()
                .map(|p| paths::canonicalize(&p.to_string_lossy()))
                .collect();
            if !expanded.is_empty() {
                return expanded;
            }
        }
    }
    vec![paths::canonicalize(raw)]
}

/// clap reports its own errors with process status 2, which is the code
/// reserved here for an unparsable query. Map argument errors to the
/// usage status and help/version requests to success.
fn handle_parse_error(err: &clap::Error) -> u8 {
    let _ = err.print();
    match err.kind() {
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
        _ => EXIT_USAGE,
    }
}

fn usage_error() -> ExitCode {
    println!("Error: Not enough arguments\n");
    let _ = Cli::command().print_help();
    ExitCode::from(EXIT_USAGE)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_subcommand_aliases() {
        let cli = Cli::parse_from(["genie", "t", "/tmp/a", "work"]);
        assert!(matches!(cli.command, Command::Tag { .. }));

        let cli = Cli::parse_from(["genie", "s", "work", "and", "urgent"]);
        match cli.command {
            Command::Search { query } => assert_eq!(query, vec!["work", "and", "urgent"]),
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::parse_from(["genie", "show", "/tmp/a"]);
        assert!(matches!(cli.command, Command::Print { .. }));
    }

    #[test]
    fn test_json_flag_is_global() {
        let cli = Cli::parse_from(["genie", "-j", "search", "work"]);
        assert!(cli.json);

        let cli = Cli::parse_from(["genie", "search", "-j", "work"]);
        assert!(cli.json);
    }

    #[test]
    fn test_tag_list_flag() {
        let cli = Cli::parse_from(["genie", "tag", "-l"]);
        match cli.command {
            Command::Tag { list, path, tag } => {
                assert!(list);
                assert!(path.is_none());
                assert!(tag.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_argument_errors_exit_with_usage_code() {
        let err = Cli::try_parse_from(["genie"]).unwrap_err();
        assert_eq!(handle_parse_error(&err), EXIT_USAGE);

        let err = Cli::try_parse_from(["genie", "bogus"]).unwrap_err();
        assert_eq!(handle_parse_error(&err), EXIT_USAGE);
        assert_ne!(EXIT_USAGE, EXIT_UNPARSABLE);
    }

    #[test]
    fn test_help_and_version_requests_exit_zero() {
        let err = Cli::try_parse_from(["genie", "--help"]).unwrap_err();
        assert_eq!(handle_parse_error(&err), 0);

        let err = Cli::try_parse_from(["genie", "--version"]).unwrap_err();
        assert_eq!(handle_parse_error(&err), 0);
    }

    #[test]
    fn test_expand_plain_path_is_single_entry() {
        let expanded = expand("/tmp/no-such-file.txt");
        assert_eq!(expanded, vec!["/tmp/no-such-file.txt".to_string()]);
    }
}
